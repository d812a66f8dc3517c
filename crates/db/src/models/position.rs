use jobtrail_core::ownership::Owned;
use jobtrail_core::types::{DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `positions` table: a user-defined role tag.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: DbId,
    pub owner_id: UserId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Position {
    const ENTITY: &'static str = "Position";

    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}
