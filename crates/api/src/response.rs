//! Shared response envelope types for API handlers.
//!
//! List endpoints use a `{ "data": ... }` envelope; deletes answer with the
//! removed id. Single-entity responses are the bare entity.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "id": ... }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: String,
}
