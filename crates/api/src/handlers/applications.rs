//! Handlers for the `/applications` resource.
//!
//! All endpoints require authentication via [`AuthUser`] and only ever touch
//! the caller's own applications.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobtrail_core::schema::{CreateApplication, UpdateApplication};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated::ValidatedJson;
use crate::response::{DataResponse, DeletedResponse};
use crate::services::applications;
use crate::state::AppState;

/// GET /api/v1/applications
///
/// The caller's applications, each with its position (or `null`).
pub async fn list_applications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let data = applications::list(&state.pool, &auth.user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/applications
///
/// Create an application in status `APPLIED`. Returns 201.
pub async fn create_application(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateApplication>,
) -> AppResult<impl IntoResponse> {
    let application = applications::create(&state.pool, &auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// PUT /api/v1/applications/{id}
///
/// Partial update; also used by the board when a card changes column.
pub async fn update_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateApplication>,
) -> AppResult<impl IntoResponse> {
    let application = applications::update(
        &state.pool,
        state.config.transition_policy,
        &id,
        &auth.user_id,
        &input,
    )
    .await?;
    Ok(Json(application))
}

/// DELETE /api/v1/applications/{id}
pub async fn delete_application(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = applications::delete(&state.pool, &id, &auth.user_id).await?;
    Ok(Json(DeletedResponse { id }))
}
