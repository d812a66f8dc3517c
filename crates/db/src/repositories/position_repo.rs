//! Repository for the `positions` table.

use sqlx::PgExecutor;

use crate::models::position::Position;

/// Column list for `positions` queries.
const COLUMNS: &str = "id, owner_id, name, color, created_at, updated_at";

/// Provides CRUD operations for positions.
pub struct PositionRepo;

impl PositionRepo {
    /// All positions owned by `owner_id`, ordered by name.
    pub async fn list_for_owner<'e, E: PgExecutor<'e>>(
        executor: E,
        owner_id: &str,
    ) -> Result<Vec<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE owner_id = $1 ORDER BY name, id");
        sqlx::query_as::<_, Position>(&query)
            .bind(owner_id)
            .fetch_all(executor)
            .await
    }

    /// Find a position by its ID.
    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
    ) -> Result<Option<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE id = $1");
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a position owned by `owner_id` whose name equals `name` exactly
    /// (case-sensitive).
    pub async fn find_by_name<'e, E: PgExecutor<'e>>(
        executor: E,
        owner_id: &str,
        name: &str,
    ) -> Result<Option<Position>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM positions WHERE owner_id = $1 AND name = $2");
        sqlx::query_as::<_, Position>(&query)
            .bind(owner_id)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new position. A duplicate name for the same owner violates
    /// `uq_positions_owner_id_name`.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        owner_id: &str,
        name: &str,
        color: &str,
    ) -> Result<Position, sqlx::Error> {
        let query = format!(
            "INSERT INTO positions (id, owner_id, name, color) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(name)
            .bind(color)
            .fetch_one(executor)
            .await
    }

    /// Insert a new position unless the owner already has one with this name.
    ///
    /// Returns `None` when the name was taken, leaving the existing row as is.
    pub async fn insert_if_absent<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        owner_id: &str,
        name: &str,
        color: &str,
    ) -> Result<Option<Position>, sqlx::Error> {
        let query = format!(
            "INSERT INTO positions (id, owner_id, name, color) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_positions_owner_id_name DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(name)
            .bind(color)
            .fetch_optional(executor)
            .await
    }

    /// Update a position's name and/or color.
    ///
    /// Returns `None` if no position with the given ID exists.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<Option<Position>, sqlx::Error> {
        let query = format!(
            "UPDATE positions SET \
                 name = COALESCE($2, name), \
                 color = COALESCE($3, color) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(id)
            .bind(name)
            .bind(color)
            .fetch_optional(executor)
            .await
    }

    /// Delete a position. Applications referencing it keep a NULL `position_id`.
    ///
    /// Returns the deleted ID, or `None` if nothing matched.
    pub async fn delete<'e, E: PgExecutor<'e>>(
        executor: E,
        id: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("DELETE FROM positions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
