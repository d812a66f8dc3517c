//! Hex color validation for position (role) badges.
//!
//! Colors are always supplied by the client (the color picker emits
//! `#rrggbb`); the server never generates one.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

/// Accepted color shape, shared with the web client's color picker checks.
pub const HEX_COLOR_PATTERN: &str = r"^#[0-9a-fA-F]{6}$";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid hex color regex"));

/// Whether `value` is a `#rrggbb` hex color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// `validator` custom rule for color fields.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if is_hex_color(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("hex_color");
    err.message = Some("must be a hex color such as #1a2b3c".into());
    Err(err)
}
