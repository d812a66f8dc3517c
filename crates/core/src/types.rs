/// Primary keys are opaque TEXT identifiers (UUIDv7 strings generated server-side).
pub type DbId = String;

/// User identifiers come from the external identity provider and are opaque.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh, time-ordered primary key.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7().to_string()
}
