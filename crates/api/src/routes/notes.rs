use axum::routing::delete;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes mounted at `/notes`. Listing and creation live under
/// `/applications/{id}/notes`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(notes::delete_note))
}
