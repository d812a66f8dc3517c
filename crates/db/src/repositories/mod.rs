//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods. The
//! first argument is any `PgExecutor`, so the same method runs against
//! `&PgPool` or `&mut *tx` inside a transaction.

pub mod application_repo;
pub mod note_repo;
pub mod position_repo;

pub use application_repo::ApplicationRepo;
pub use note_repo::NoteRepo;
pub use position_repo::PositionRepo;
