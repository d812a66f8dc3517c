//! Handlers for the `/positions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jobtrail_core::schema::{CreatePosition, UpdatePosition};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated::ValidatedJson;
use crate::response::{DataResponse, DeletedResponse};
use crate::services::positions;
use crate::state::AppState;

/// GET /api/v1/positions
pub async fn list_positions(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let data = positions::list(&state.pool, &auth.user_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/positions
///
/// Create a position with an explicit color. 409 if the name is taken.
pub async fn create_position(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePosition>,
) -> AppResult<impl IntoResponse> {
    let position = positions::create(&state.pool, &auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(position)))
}

/// POST /api/v1/positions/resolve
///
/// Return the caller's position with exactly this name, creating it with
/// the given color if there is none.
pub async fn resolve_position(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePosition>,
) -> AppResult<impl IntoResponse> {
    let position = positions::resolve(&state.pool, &auth.user_id, &input).await?;
    Ok(Json(position))
}

/// PUT /api/v1/positions/{id}
pub async fn update_position(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdatePosition>,
) -> AppResult<impl IntoResponse> {
    let position = positions::update(&state.pool, &id, &auth.user_id, &input).await?;
    Ok(Json(position))
}

/// DELETE /api/v1/positions/{id}
pub async fn delete_position(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = positions::delete(&state.pool, &id, &auth.user_id).await?;
    Ok(Json(DeletedResponse { id }))
}
