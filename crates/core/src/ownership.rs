//! Ownership guard shared by every handler touching user-owned data.

use crate::error::CoreError;

/// A resource that belongs to exactly one user.
pub trait Owned {
    /// Entity name used in error messages and logs (e.g. `"Application"`).
    const ENTITY: &'static str;

    /// Identifier of the user owning this resource.
    fn owner_id(&self) -> &str;
}

/// Fail with [`CoreError::Forbidden`] unless `acting_user_id` owns `resource`.
pub fn assert_ownership<R: Owned + ?Sized>(
    resource: &R,
    acting_user_id: &str,
) -> Result<(), CoreError> {
    if resource.owner_id() != acting_user_id {
        return Err(CoreError::Forbidden(format!(
            "{} belongs to another user",
            R::ENTITY
        )));
    }
    Ok(())
}
