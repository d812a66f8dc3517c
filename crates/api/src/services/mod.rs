//! Domain services sitting between the handlers and the repositories.
//!
//! Every function that touches a user-owned row takes the acting user and
//! runs the ownership guard before reading further or mutating anything.

pub mod applications;
pub mod notes;
pub mod positions;
