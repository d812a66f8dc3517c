pub mod applications;
pub mod me;
pub mod notes;
pub mod positions;
