//! Status enums and policies for Cubik.
//!
//! Stored statuses (`VerifyStatus`, `JoinRoundStatus`) serialize in
//! `SCREAMING_SNAKE_CASE` to match the data service. `DisplayStatus` is
//! derived and never stored.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VerifyStatus
// ---------------------------------------------------------------------------

/// Administrative verification of a project, independent of any round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerifyStatus {
    Pending,
    Review,
    Verified,
    Failed,
}

impl VerifyStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Review => "REVIEW",
            Self::Verified => "VERIFIED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JoinRoundStatus
// ---------------------------------------------------------------------------

/// Admission state of a project within one funding round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinRoundStatus {
    Pending,
    Approved,
    Rejected,
}

impl JoinRoundStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for JoinRoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DisplayStatus
// ---------------------------------------------------------------------------

/// The single status shown for a project.
///
/// A union of the verification statuses, the membership statuses, and the
/// two temporal states `Live` / `Ended`. `Unknown` is only produced when
/// resolution fails to pick a round, which should never happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayStatus {
    Review,
    Verified,
    Failed,
    Pending,
    Approved,
    Rejected,
    Live,
    Ended,
    Unknown,
}

impl DisplayStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Review => "REVIEW",
            Self::Verified => "VERIFIED",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Live => "LIVE",
            Self::Ended => "ENDED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<VerifyStatus> for DisplayStatus {
    fn from(status: VerifyStatus) -> Self {
        match status {
            VerifyStatus::Pending => Self::Pending,
            VerifyStatus::Review => Self::Review,
            VerifyStatus::Verified => Self::Verified,
            VerifyStatus::Failed => Self::Failed,
        }
    }
}

impl From<JoinRoundStatus> for DisplayStatus {
    fn from(status: JoinRoundStatus) -> Self {
        match status {
            JoinRoundStatus::Pending => Self::Pending,
            JoinRoundStatus::Approved => Self::Approved,
            JoinRoundStatus::Rejected => Self::Rejected,
        }
    }
}

// ---------------------------------------------------------------------------
// TieBreak
// ---------------------------------------------------------------------------

/// How one status is chosen when a verified project belongs to several rounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The last membership in list order wins.
    #[default]
    LastInOrder,
    /// The first membership in list order wins.
    FirstInOrder,
    /// Highest ranked status wins; equal ranks go to the earliest membership.
    Priority,
}

impl TieBreak {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastInOrder => "last_in_order",
            Self::FirstInOrder => "first_in_order",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
