//! Bearer-token verification.
//!
//! Sessions are issued by the external identity provider; this service only
//! verifies the HS256 access tokens it signs with the shared secret.

pub mod jwt;
