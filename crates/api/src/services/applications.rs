//! Application lifecycle: create, partial update (including kanban status
//! moves), delete and the per-user listing.

use jobtrail_core::ownership::assert_ownership;
use jobtrail_core::schema::{CreateApplication, UpdateApplication};
use jobtrail_core::status::TransitionPolicy;
use jobtrail_core::types::{new_id, DbId};
use jobtrail_db::models::application::{
    Application, ApplicationChanges, ApplicationWithPosition, NewApplication,
};
use jobtrail_db::repositories::ApplicationRepo;
use jobtrail_db::DbPool;
use sqlx::PgExecutor;

use super::positions;
use crate::error::{AppError, AppResult};

/// Fetch an application and verify `user_id` owns it.
pub async fn find_owned<'e, E: PgExecutor<'e>>(
    executor: E,
    id: &str,
    user_id: &str,
) -> AppResult<Application> {
    let application = ApplicationRepo::find_by_id(executor, id)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id))?;
    assert_ownership(&application, user_id)?;
    Ok(application)
}

/// Every application owned by `owner_id`, with its position when tagged.
pub async fn list(pool: &DbPool, owner_id: &str) -> AppResult<Vec<ApplicationWithPosition>> {
    Ok(ApplicationRepo::list_with_positions(pool, owner_id).await?)
}

/// Create an application in status `APPLIED`.
///
/// Position resolution and the insert share one transaction, so a failed
/// insert never leaves a freshly created position behind.
pub async fn create(
    pool: &DbPool,
    owner_id: &str,
    input: &CreateApplication,
) -> AppResult<Application> {
    let mut tx = pool.begin().await?;

    let position = match input.position_ref() {
        Some(position_ref) => Some(positions::resolve_ref(&mut tx, owner_id, &position_ref).await?),
        None => None,
    };

    let application = ApplicationRepo::create(
        &mut *tx,
        &new_id(),
        &NewApplication {
            owner_id,
            company_name: &input.company_name,
            post_url: input.post_url.as_deref(),
            position_id: position.as_ref().map(|p| p.id.as_str()),
            submitted_at: input.submitted_at,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        application_id = %application.id,
        user_id = %owner_id,
        position_id = ?application.position_id,
        "Application created",
    );
    Ok(application)
}

/// Apply the fields present in `input`; everything else keeps its value.
///
/// Ownership is checked before any write, and a status change must pass
/// `policy`. Concurrent updates are last-write-wins per column.
pub async fn update(
    pool: &DbPool,
    policy: TransitionPolicy,
    id: &str,
    user_id: &str,
    input: &UpdateApplication,
) -> AppResult<Application> {
    let mut tx = pool.begin().await?;

    let current = find_owned(&mut *tx, id, user_id).await?;

    if let Some(next) = input.status {
        policy.check(current.status, next)?;
    }

    let position = match input.position_ref() {
        Some(position_ref) => Some(positions::resolve_ref(&mut tx, user_id, &position_ref).await?),
        None => None,
    };

    let changes = ApplicationChanges {
        company_name: input.company_name.as_deref(),
        post_url: input.post_url.as_deref(),
        status: input.status,
        position_id: position.as_ref().map(|p| p.id.as_str()),
        submitted_at: input.submitted_at,
    };

    let application = ApplicationRepo::update(&mut *tx, id, &changes)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id))?;

    tx.commit().await?;

    if current.status != application.status {
        tracing::info!(
            application_id = %id,
            user_id = %user_id,
            from = %current.status,
            to = %application.status,
            "Application status changed",
        );
    } else {
        tracing::info!(application_id = %id, user_id = %user_id, "Application updated");
    }
    Ok(application)
}

/// Delete an application owned by `user_id`; its notes go with it.
pub async fn delete(pool: &DbPool, id: &str, user_id: &str) -> AppResult<DbId> {
    find_owned(pool, id, user_id).await?;

    let deleted = ApplicationRepo::delete(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id))?;

    tracing::info!(application_id = %id, user_id = %user_id, "Application deleted");
    Ok(deleted)
}
