//! Request schema shared by the server and the web client.
//!
//! Each DTO carries its `validator` rules and derives [`TS`]; `cargo test`
//! writes the TypeScript shapes to `bindings/`. ts-rs only exports shapes,
//! not rules. The client mirrors the rules from the public constants here
//! and in [`crate::color`] ([`MAX_NAME_LEN`], [`MAX_NOTE_LEN`],
//! [`MAX_URL_LEN`], [`crate::color::HEX_COLOR_PATTERN`]) plus "not blank"
//! on every required text field. The server check stays authoritative.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError};

use crate::color::validate_hex_color;
use crate::status::ApplicationStatus;
use crate::types::{DbId, Timestamp};

/// Maximum length of free-text name fields.
pub const MAX_NAME_LEN: u64 = 200;

/// Maximum length of a note body.
pub const MAX_NOTE_LEN: u64 = 10_000;

/// Maximum length of a job post link.
pub const MAX_URL_LEN: u64 = 2_048;

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// An empty or whitespace-only optional string means "not provided".
///
/// The web form sends `""` for a link left blank.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn position_ref_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("position_ref");
    err.message = Some(message.into());
    err
}

/// `positionId` and `positionName` are mutually exclusive, and a new name
/// needs a color.
fn check_position_ref(
    position_id: Option<&str>,
    position_name: Option<&str>,
    position_color: Option<&str>,
) -> Result<(), ValidationError> {
    match (position_id, position_name, position_color) {
        (Some(_), Some(_), _) => Err(position_ref_error(
            "positionId and positionName cannot both be set",
        )),
        (Some(_), None, Some(_)) => Err(position_ref_error(
            "positionColor only applies together with positionName",
        )),
        (None, Some(_), None) => Err(position_ref_error(
            "positionColor is required together with positionName",
        )),
        (None, None, Some(_)) => Err(position_ref_error(
            "positionColor only applies together with positionName",
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Position references
// ---------------------------------------------------------------------------

/// How a request refers to the position (role) of an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionRef {
    /// Selected from the list of existing positions.
    Existing(DbId),
    /// Typed by the user; matched by exact name or created.
    ByName { name: String, color: String },
}

fn position_ref_of(
    position_id: &Option<DbId>,
    position_name: &Option<String>,
    position_color: &Option<String>,
) -> Option<PositionRef> {
    match (position_id, position_name, position_color) {
        (Some(id), _, _) => Some(PositionRef::Existing(id.clone())),
        (None, Some(name), Some(color)) => Some(PositionRef::ByName {
            name: name.clone(),
            color: color.clone(),
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// Body of `createApplication`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_application_refs"))]
#[ts(export)]
pub struct CreateApplication {
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    pub company_name: String,
    /// Free-form link; scheme-less values like `linkedin.com/jobs/1` are kept.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = MAX_URL_LEN))]
    #[ts(optional)]
    pub post_url: Option<String>,
    #[ts(optional)]
    pub position_id: Option<DbId>,
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    #[ts(optional)]
    pub position_name: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    #[ts(optional)]
    pub position_color: Option<String>,
    #[ts(optional)]
    pub submitted_at: Option<Timestamp>,
}

fn validate_create_application_refs(input: &CreateApplication) -> Result<(), ValidationError> {
    check_position_ref(
        input.position_id.as_deref(),
        input.position_name.as_deref(),
        input.position_color.as_deref(),
    )
}

impl CreateApplication {
    /// The position this application should be tagged with, if any.
    pub fn position_ref(&self) -> Option<PositionRef> {
        position_ref_of(&self.position_id, &self.position_name, &self.position_color)
    }
}

/// Body of `updateApplication`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_application_refs"))]
#[ts(export)]
pub struct UpdateApplication {
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    #[ts(optional)]
    pub company_name: Option<String>,
    /// Free-form link; scheme-less values like `linkedin.com/jobs/1` are kept.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(max = MAX_URL_LEN))]
    #[ts(optional)]
    pub post_url: Option<String>,
    #[ts(optional)]
    pub status: Option<ApplicationStatus>,
    #[ts(optional)]
    pub position_id: Option<DbId>,
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    #[ts(optional)]
    pub position_name: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    #[ts(optional)]
    pub position_color: Option<String>,
    #[ts(optional)]
    pub submitted_at: Option<Timestamp>,
}

fn validate_update_application_refs(input: &UpdateApplication) -> Result<(), ValidationError> {
    check_position_ref(
        input.position_id.as_deref(),
        input.position_name.as_deref(),
        input.position_color.as_deref(),
    )
}

impl UpdateApplication {
    /// The position to re-tag the application with, if the request changes it.
    pub fn position_ref(&self) -> Option<PositionRef> {
        position_ref_of(&self.position_id, &self.position_name, &self.position_color)
    }
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// Body of `createPosition` and `resolvePosition`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreatePosition {
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(custom(function = "validate_hex_color"))]
    pub color: String,
}

/// Body of `updatePosition`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdatePosition {
    #[validate(custom(function = "not_blank"), length(max = MAX_NAME_LEN))]
    #[ts(optional)]
    pub name: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    #[ts(optional)]
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// Body of `createNote`. The parent application comes from the route.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateNote {
    #[validate(custom(function = "not_blank"), length(max = MAX_NOTE_LEN))]
    pub content: String,
}
