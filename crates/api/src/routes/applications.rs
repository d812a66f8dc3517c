//! Route definitions for applications and their notes.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{applications, notes};
use crate::state::AppState;

/// Application routes mounted at `/applications`.
///
/// ```text
/// GET    /              -> list_applications
/// POST   /              -> create_application
/// PUT    /{id}          -> update_application
/// DELETE /{id}          -> delete_application
/// GET    /{id}/notes    -> list_notes
/// POST   /{id}/notes    -> create_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(applications::list_applications).post(applications::create_application),
        )
        .route(
            "/{id}",
            put(applications::update_application).delete(applications::delete_application),
        )
        .route("/{id}/notes", get(notes::list_notes).post(notes::create_note))
}
