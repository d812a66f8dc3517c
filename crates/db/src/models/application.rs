use jobtrail_core::ownership::Owned;
use jobtrail_core::status::ApplicationStatus;
use jobtrail_core::types::{DbId, Timestamp, UserId};
use serde::Serialize;
use sqlx::FromRow;

use super::position::Position;

/// A row from the `applications` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: DbId,
    pub owner_id: UserId,
    pub company_name: String,
    pub post_url: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub position_id: Option<DbId>,
    pub submitted_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Application {
    const ENTITY: &'static str = "Application";

    fn owner_id(&self) -> &str {
        &self.owner_id
    }
}

/// Field values for a new application row.
#[derive(Debug, Clone)]
pub struct NewApplication<'a> {
    pub owner_id: &'a str,
    pub company_name: &'a str,
    pub post_url: Option<&'a str>,
    pub position_id: Option<&'a str>,
    /// Defaults to the insert time when `None`.
    pub submitted_at: Option<Timestamp>,
}

/// Partial update of an application row. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ApplicationChanges<'a> {
    pub company_name: Option<&'a str>,
    pub post_url: Option<&'a str>,
    pub status: Option<ApplicationStatus>,
    pub position_id: Option<&'a str>,
    pub submitted_at: Option<Timestamp>,
}

/// An application left-joined with its position. Position columns are
/// prefixed with `position_` and are all NULL when there is no position.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithPositionRow {
    #[sqlx(flatten)]
    pub application: Application,
    pub position_ref_id: Option<DbId>,
    pub position_owner_id: Option<UserId>,
    pub position_name: Option<String>,
    pub position_color: Option<String>,
    pub position_created_at: Option<Timestamp>,
    pub position_updated_at: Option<Timestamp>,
}

/// Listing entry: `{ application, position }` with `position` null when absent.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithPosition {
    pub application: Application,
    pub position: Option<Position>,
}

impl From<ApplicationWithPositionRow> for ApplicationWithPosition {
    fn from(row: ApplicationWithPositionRow) -> Self {
        let position = match (
            row.position_ref_id,
            row.position_owner_id,
            row.position_name,
            row.position_color,
            row.position_created_at,
            row.position_updated_at,
        ) {
            (Some(id), Some(owner_id), Some(name), Some(color), Some(created_at), Some(updated_at)) => {
                Some(Position {
                    id,
                    owner_id,
                    name,
                    color,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Self {
            application: row.application,
            position,
        }
    }
}
