//! Route definitions for positions (roles).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::positions;
use crate::state::AppState;

/// Position routes mounted at `/positions`.
///
/// ```text
/// GET    /              -> list_positions
/// POST   /              -> create_position
/// POST   /resolve       -> resolve_position
/// PUT    /{id}          -> update_position
/// DELETE /{id}          -> delete_position
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(positions::list_positions).post(positions::create_position),
        )
        .route("/resolve", post(positions::resolve_position))
        .route(
            "/{id}",
            put(positions::update_position).delete(positions::delete_position),
        )
}
