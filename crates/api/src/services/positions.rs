//! Position (role) listing, editing and name resolution.

use jobtrail_core::error::CoreError;
use jobtrail_core::ownership::assert_ownership;
use jobtrail_core::schema::{CreatePosition, PositionRef, UpdatePosition};
use jobtrail_core::types::{new_id, DbId};
use jobtrail_db::models::position::Position;
use jobtrail_db::repositories::PositionRepo;
use jobtrail_db::DbPool;
use sqlx::{PgConnection, PgExecutor};

use crate::error::{AppError, AppResult};

/// Fetch a position and verify `user_id` owns it.
pub async fn find_owned<'e, E: PgExecutor<'e>>(
    executor: E,
    id: &str,
    user_id: &str,
) -> AppResult<Position> {
    let position = PositionRepo::find_by_id(executor, id)
        .await?
        .ok_or_else(|| AppError::not_found("Position", id))?;
    assert_ownership(&position, user_id)?;
    Ok(position)
}

/// Map a user-typed role name to a position owned by `owner_id`, creating it
/// with `color` when no position has exactly that (case-sensitive) name.
///
/// Matching an existing position writes nothing and keeps its color. A
/// concurrent request creating the same name is absorbed by the unique
/// constraint: the loser re-reads the winner's row.
pub async fn resolve_or_create(
    conn: &mut PgConnection,
    owner_id: &str,
    name: &str,
    color: &str,
) -> AppResult<Position> {
    if let Some(existing) = PositionRepo::find_by_name(&mut *conn, owner_id, name).await? {
        tracing::debug!(position_id = %existing.id, user_id = %owner_id, "Matched existing position");
        return Ok(existing);
    }

    if let Some(created) =
        PositionRepo::insert_if_absent(&mut *conn, &new_id(), owner_id, name, color).await?
    {
        tracing::info!(position_id = %created.id, user_id = %owner_id, "Position created");
        return Ok(created);
    }

    PositionRepo::find_by_name(&mut *conn, owner_id, name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Position '{name}' could neither be created nor found"
            )))
        })
}

/// Turn a request's position reference into a position owned by `owner_id`.
///
/// A selected id is used as is once ownership is confirmed; a typed name
/// goes through [`resolve_or_create`].
pub async fn resolve_ref(
    conn: &mut PgConnection,
    owner_id: &str,
    position: &PositionRef,
) -> AppResult<Position> {
    match position {
        PositionRef::Existing(id) => find_owned(&mut *conn, id, owner_id).await,
        PositionRef::ByName { name, color } => {
            resolve_or_create(conn, owner_id, name, color).await
        }
    }
}

/// Positions available to `owner_id`, ordered by name.
pub async fn list(pool: &DbPool, owner_id: &str) -> AppResult<Vec<Position>> {
    Ok(PositionRepo::list_for_owner(pool, owner_id).await?)
}

/// Explicitly create a position. A duplicate name is a conflict; a
/// concurrent duplicate is caught by `uq_positions_owner_id_name` instead.
pub async fn create(pool: &DbPool, owner_id: &str, input: &CreatePosition) -> AppResult<Position> {
    if PositionRepo::find_by_name(pool, owner_id, &input.name)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "A position named '{}' already exists",
            input.name
        ))
        .into());
    }

    let position = PositionRepo::create(pool, &new_id(), owner_id, &input.name, &input.color).await?;
    tracing::info!(position_id = %position.id, user_id = %owner_id, "Position created");
    Ok(position)
}

/// Resolve a typed name to a position, creating it if needed.
pub async fn resolve(pool: &DbPool, owner_id: &str, input: &CreatePosition) -> AppResult<Position> {
    let mut conn = pool.acquire().await?;
    resolve_or_create(&mut conn, owner_id, &input.name, &input.color).await
}

/// Rename and/or recolor a position owned by `user_id`.
pub async fn update(
    pool: &DbPool,
    id: &str,
    user_id: &str,
    input: &UpdatePosition,
) -> AppResult<Position> {
    find_owned(pool, id, user_id).await?;

    let position = PositionRepo::update(pool, id, input.name.as_deref(), input.color.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Position", id))?;

    tracing::info!(position_id = %id, user_id = %user_id, "Position updated");
    Ok(position)
}

/// Delete a position owned by `user_id`. Tagged applications are untagged.
pub async fn delete(pool: &DbPool, id: &str, user_id: &str) -> AppResult<DbId> {
    find_owned(pool, id, user_id).await?;

    let deleted = PositionRepo::delete(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Position", id))?;

    tracing::info!(position_id = %id, user_id = %user_id, "Position deleted");
    Ok(deleted)
}
