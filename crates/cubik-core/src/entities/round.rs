use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Contribution;
use crate::enums::JoinRoundStatus;
use crate::errors::CoreError;

/// A time-boxed campaign during which approved projects receive contributions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingRound {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

/// Where `now` falls relative to a round's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// `now < start_time`
    Upcoming,
    /// `start_time <= now < end_time`
    Open,
    /// `now >= end_time`
    Closed,
}

impl FundingRound {
    /// Compare `now` against the round window. Ignores the `active` flag.
    #[must_use]
    pub fn phase(&self, now: DateTime<Utc>) -> RoundPhase {
        if now < self.start_time {
            RoundPhase::Upcoming
        } else if now < self.end_time {
            RoundPhase::Open
        } else {
            RoundPhase::Closed
        }
    }

    /// Reject rounds whose window ends before it starts.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the round.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.end_time < self.start_time {
            return Err(CoreError::Validation(format!(
                "funding round {} ends ({}) before it starts ({})",
                self.id,
                self.end_time.to_rfc3339(),
                self.start_time.to_rfc3339()
            )));
        }
        Ok(())
    }
}

/// A project's admission into one funding round.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundMembership {
    pub id: String,
    pub status: JoinRoundStatus,
    pub funding_round: FundingRound,
}
