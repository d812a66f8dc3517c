//! Repository for the `applications` table.

use sqlx::PgExecutor;

use crate::models::application::{
    Application, ApplicationChanges, ApplicationWithPosition, ApplicationWithPositionRow,
    NewApplication,
};

/// Column list for `applications` queries.
const COLUMNS: &str = "\
    id, owner_id, company_name, post_url, status, position_id, \
    submitted_at, created_at, updated_at";

/// Provides CRUD operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// All applications owned by `owner_id`, each left-joined with its position.
    pub async fn list_with_positions<'e, E: PgExecutor<'e>>(
        executor: E,
        owner_id: &str,
    ) -> Result<Vec<ApplicationWithPosition>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ApplicationWithPositionRow>(
            "SELECT a.id, a.owner_id, a.company_name, a.post_url, a.status, a.position_id, \
                    a.submitted_at, a.created_at, a.updated_at, \
                    p.id AS position_ref_id, p.owner_id AS position_owner_id, \
                    p.name AS position_name, p.color AS position_color, \
                    p.created_at AS position_created_at, p.updated_at AS position_updated_at \
             FROM applications a \
             LEFT JOIN positions p ON p.id = a.position_id \
             WHERE a.owner_id = $1 \
             ORDER BY a.submitted_at DESC, a.id",
        )
        .bind(owner_id)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(ApplicationWithPosition::from).collect())
    }

    /// Find an application by its ID.
    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new application. Status starts at the column default (`APPLIED`).
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        input: &NewApplication<'_>,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (id, owner_id, company_name, post_url, position_id, submitted_at) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(input.owner_id)
            .bind(input.company_name)
            .bind(input.post_url)
            .bind(input.position_id)
            .bind(input.submitted_at)
            .fetch_one(executor)
            .await
    }

    /// Apply a partial update; `updated_at` is refreshed by trigger.
    ///
    /// Returns `None` if no application with the given ID exists.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        changes: &ApplicationChanges<'_>,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET \
                 company_name = COALESCE($2, company_name), \
                 post_url = COALESCE($3, post_url), \
                 status = COALESCE($4, status), \
                 position_id = COALESCE($5, position_id), \
                 submitted_at = COALESCE($6, submitted_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(changes.company_name)
            .bind(changes.post_url)
            .bind(changes.status.map(|s| s.as_str()))
            .bind(changes.position_id)
            .bind(changes.submitted_at)
            .fetch_optional(executor)
            .await
    }

    /// Delete an application (its notes cascade). Returns the deleted ID, or
    /// `None` if nothing matched.
    pub async fn delete<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("DELETE FROM applications WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
