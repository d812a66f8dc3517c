//! Repository for the `notes` table.

use sqlx::PgExecutor;

use crate::models::note::{Note, NoteOwner};

/// Column list for `notes` queries.
const COLUMNS: &str = "id, application_id, content, created_at, updated_at";

/// Provides create/list/delete for notes. There is no update.
pub struct NoteRepo;

impl NoteRepo {
    /// Notes attached to an application, oldest first.
    pub async fn list_for_application<'e, E: PgExecutor<'e>>(
        executor: E,
        application_id: &str,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE application_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(application_id)
            .fetch_all(executor)
            .await
    }

    /// Insert a note under an existing application.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        application_id: &str,
        content: &str,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (id, application_id, content) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(application_id)
            .bind(content)
            .fetch_one(executor)
            .await
    }

    /// Look up a note's parent application and that application's owner.
    pub async fn find_owner<'e, E: PgExecutor<'e>>(
        executor: E,
        note_id: &str,
    ) -> Result<Option<NoteOwner>, sqlx::Error> {
        sqlx::query_as::<_, NoteOwner>(
            "SELECT n.id AS note_id, n.application_id, a.owner_id \
             FROM notes n \
             JOIN applications a ON a.id = n.application_id \
             WHERE n.id = $1",
        )
        .bind(note_id)
        .fetch_optional(executor)
        .await
    }

    /// Delete a note. Returns the deleted ID, or `None` if nothing matched.
    pub async fn delete<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("DELETE FROM notes WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
