//! Notes attached to applications. Access always goes through the parent
//! application's owner.

use jobtrail_core::ownership::assert_ownership;
use jobtrail_core::schema::CreateNote;
use jobtrail_core::types::{new_id, DbId};
use jobtrail_db::models::note::{Note, NoteOwner};
use jobtrail_db::repositories::NoteRepo;
use jobtrail_db::DbPool;

use super::applications;
use crate::error::{AppError, AppResult};

/// Load a note's parent application owner and verify it is `user_id`.
///
/// A missing note is a not-found error; a note under another user's
/// application is forbidden.
pub async fn check_permission(pool: &DbPool, note_id: &str, user_id: &str) -> AppResult<NoteOwner> {
    let owner = NoteRepo::find_owner(pool, note_id)
        .await?
        .ok_or_else(|| AppError::not_found("Note", note_id))?;
    assert_ownership(&owner, user_id)?;
    Ok(owner)
}

/// Notes of an application owned by `user_id`.
pub async fn list(pool: &DbPool, application_id: &str, user_id: &str) -> AppResult<Vec<Note>> {
    applications::find_owned(pool, application_id, user_id).await?;
    Ok(NoteRepo::list_for_application(pool, application_id).await?)
}

/// Attach a note to an application owned by `user_id`.
pub async fn create(
    pool: &DbPool,
    application_id: &str,
    user_id: &str,
    input: &CreateNote,
) -> AppResult<Note> {
    applications::find_owned(pool, application_id, user_id).await?;

    let note = NoteRepo::create(pool, &new_id(), application_id, &input.content).await?;

    tracing::info!(
        note_id = %note.id,
        application_id = %application_id,
        user_id = %user_id,
        "Note created",
    );
    Ok(note)
}

/// Delete a note under an application owned by `user_id`.
pub async fn delete(pool: &DbPool, note_id: &str, user_id: &str) -> AppResult<DbId> {
    let owner = check_permission(pool, note_id, user_id).await?;

    let deleted = NoteRepo::delete(pool, note_id)
        .await?
        .ok_or_else(|| AppError::not_found("Note", note_id))?;

    tracing::info!(
        note_id = %note_id,
        application_id = %owner.application_id,
        user_id = %user_id,
        "Note deleted",
    );
    Ok(deleted)
}
