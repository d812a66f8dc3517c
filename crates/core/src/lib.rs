//! Domain logic for the jobtrail application tracker.
//!
//! Nothing in this crate touches the database; the `db` and `api` crates
//! build on these types.

pub mod color;
pub mod error;
pub mod ownership;
pub mod schema;
pub mod status;
pub mod types;
