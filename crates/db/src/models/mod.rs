//! Row structs for each table.
//!
//! Request DTOs live in `jobtrail_core::schema`; this module only holds what
//! comes back from the database.

pub mod application;
pub mod note;
pub mod position;
