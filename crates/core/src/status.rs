//! Application lifecycle status (the kanban board columns) and the policy
//! deciding which column-to-column moves are accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Lifecycle stage of a job application. Wire and storage values are the
/// upper-case variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Accepted,
    Rejected,
    Refused,
    Archived,
}

impl ApplicationStatus {
    /// Every status, in board column order.
    pub const ALL: [ApplicationStatus; 6] = [
        Self::Applied,
        Self::Interviewing,
        Self::Accepted,
        Self::Rejected,
        Self::Refused,
        Self::Archived,
    ];

    /// Stable string representation matching serde and the database column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "APPLIED",
            Self::Interviewing => "INTERVIEWING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Refused => "REFUSED",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Whether `next` is an edge of the nominal lifecycle graph.
    ///
    /// ```text
    /// APPLIED      -> INTERVIEWING | REJECTED | REFUSED | ARCHIVED
    /// INTERVIEWING -> ACCEPTED | REJECTED | REFUSED | ARCHIVED
    /// *            -> ARCHIVED
    /// ```
    ///
    /// Staying in the same status is always allowed.
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;

        if self == next || next == Archived {
            return true;
        }
        matches!(
            (self, next),
            (Applied, Interviewing | Rejected | Refused)
                | (Interviewing, Accepted | Rejected | Refused)
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown application status '{s}'")))
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How status changes requested by clients are checked.
///
/// The board lets a card be dropped into any column, so `Permissive` is the
/// default. `Guarded` only accepts edges of the nominal lifecycle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Guarded,
}

impl TransitionPolicy {
    /// Check a requested transition against this policy.
    pub fn check(self, from: ApplicationStatus, to: ApplicationStatus) -> Result<(), CoreError> {
        match self {
            Self::Permissive => Ok(()),
            Self::Guarded if from.can_transition_to(to) => Ok(()),
            Self::Guarded => Err(CoreError::Validation(format!(
                "Cannot move an application from {from} to {to}"
            ))),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "guarded" => Ok(Self::Guarded),
            other => Err(CoreError::Validation(format!(
                "Unknown transition policy '{other}' (expected 'permissive' or 'guarded')"
            ))),
        }
    }
}
