use axum::Json;
use serde::Serialize;

use crate::middleware::auth::AuthUser;

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: String,
}

/// Response of `GET /api/v1/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub message: &'static str,
    pub user: SessionUser,
}

/// GET /api/v1/me -- echo the authenticated caller. Handy for the client to
/// confirm its token is accepted.
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        message: "This is private",
        user: SessionUser { id: auth.user_id },
    })
}
