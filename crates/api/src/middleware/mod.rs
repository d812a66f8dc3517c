//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`validated::ValidatedJson`] -- Deserializes a JSON body and runs its schema rules.

pub mod auth;
pub mod validated;
