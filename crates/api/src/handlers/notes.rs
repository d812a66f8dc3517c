//! Handlers for application notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobtrail_core::schema::CreateNote;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated::ValidatedJson;
use crate::response::{DataResponse, DeletedResponse};
use crate::services::notes;
use crate::state::AppState;

/// GET /api/v1/applications/{id}/notes
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = notes::list(&state.pool, &application_id, &auth.user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/applications/{id}/notes
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(application_id): Path<String>,
    ValidatedJson(input): ValidatedJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let note = notes::create(&state.pool, &application_id, &auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = notes::delete(&state.pool, &id, &auth.user_id).await?;
    Ok(Json(DeletedResponse { id }))
}
