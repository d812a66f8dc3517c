use jobtrail_core::ownership::Owned;
use jobtrail_core::types::{DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notes` table. Notes are never edited after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub application_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A note together with the owner of its parent application.
#[derive(Debug, Clone, FromRow)]
pub struct NoteOwner {
    pub note_id: DbId,
    pub application_id: DbId,
    pub owner_id: UserId,
}

impl Owned for NoteOwner {
    const ENTITY: &'static str = "Note";

    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}
