pub mod applications;
pub mod health;
pub mod notes;
pub mod positions;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /me                                   authenticated caller
///
/// /applications                         list, create
/// /applications/{id}                    update (PUT), delete
/// /applications/{id}/notes              list, create notes
///
/// /positions                            list, create
/// /positions/resolve                    find-or-create by name (POST)
/// /positions/{id}                       update (PUT), delete
///
/// /notes/{id}                           delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::me::me))
        .nest("/applications", applications::router())
        .nest("/positions", positions::router())
        .nest("/notes", notes::router())
}
