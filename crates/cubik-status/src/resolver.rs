//! Project status resolution.
//!
//! Verification gates everything: a project that is not `VERIFIED` shows its
//! verification status. A verified project outside any round shows
//! `VERIFIED`. Otherwise each round membership yields a status and the
//! configured [`TieBreak`] picks one.
//!
//! ```text
//! round inactive                   → ENDED
//! membership PENDING / REJECTED    → PENDING / REJECTED
//! APPROVED, now <  start           → APPROVED
//! APPROVED, start <= now < end     → LIVE
//! APPROVED, now >= end             → ENDED
//! ```

use chrono::{DateTime, Utc};
use cubik_core::Clock;
use cubik_core::entities::{Project, RoundMembership, RoundPhase};
use cubik_core::enums::{DisplayStatus, JoinRoundStatus, TieBreak, VerifyStatus};
use schemars::JsonSchema;
use serde::Serialize;

/// The status to display for a project, and the round it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ResolvedStatus<'a> {
    pub round: Option<&'a RoundMembership>,
    pub status: DisplayStatus,
}

impl<'a> ResolvedStatus<'a> {
    #[must_use]
    pub const fn without_round(status: DisplayStatus) -> Self {
        Self {
            round: None,
            status,
        }
    }

    #[must_use]
    pub const fn for_round(round: &'a RoundMembership, status: DisplayStatus) -> Self {
        Self {
            round: Some(round),
            status,
        }
    }
}

/// Status of a single membership at `now`, ignoring verification.
#[must_use]
pub fn round_status(membership: &RoundMembership, now: DateTime<Utc>) -> DisplayStatus {
    let round = &membership.funding_round;
    if !round.active {
        return DisplayStatus::Ended;
    }
    match membership.status {
        JoinRoundStatus::Pending | JoinRoundStatus::Rejected => membership.status.into(),
        JoinRoundStatus::Approved => match round.phase(now) {
            RoundPhase::Upcoming => DisplayStatus::Approved,
            RoundPhase::Open => DisplayStatus::Live,
            RoundPhase::Closed => DisplayStatus::Ended,
        },
    }
}

/// One resolution per membership, in list order.
///
/// Empty unless the project is verified and belongs to at least one round.
#[must_use]
pub fn resolve_rounds(project: &Project, now: DateTime<Utc>) -> Vec<ResolvedStatus<'_>> {
    if project.verify_status != VerifyStatus::Verified {
        return Vec::new();
    }
    project
        .round_memberships
        .iter()
        .map(|membership| ResolvedStatus::for_round(membership, round_status(membership, now)))
        .collect()
}

/// Rank used by [`TieBreak::Priority`]. Higher wins.
const fn priority_rank(status: DisplayStatus) -> u8 {
    match status {
        DisplayStatus::Live => 4,
        DisplayStatus::Approved => 3,
        DisplayStatus::Pending => 2,
        DisplayStatus::Rejected => 1,
        DisplayStatus::Ended
        | DisplayStatus::Review
        | DisplayStatus::Verified
        | DisplayStatus::Failed
        | DisplayStatus::Unknown => 0,
    }
}

/// Resolves the single display status of a project.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusResolver {
    tie_break: TieBreak,
}

impl StatusResolver {
    #[must_use]
    pub const fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Resolve against the clock, reading it once.
    #[must_use]
    pub fn resolve_now<'a>(&self, project: &'a Project, clock: &dyn Clock) -> ResolvedStatus<'a> {
        self.resolve(project, clock.now())
    }

    /// Resolve the project's status at `now`.
    #[must_use]
    pub fn resolve<'a>(&self, project: &'a Project, now: DateTime<Utc>) -> ResolvedStatus<'a> {
        if project.verify_status != VerifyStatus::Verified {
            return ResolvedStatus::without_round(project.verify_status.into());
        }
        if project.round_memberships.is_empty() {
            return ResolvedStatus::without_round(DisplayStatus::Verified);
        }

        let rounds = resolve_rounds(project, now);
        let picked = match self.tie_break {
            TieBreak::LastInOrder => rounds.into_iter().last(),
            TieBreak::FirstInOrder => rounds.into_iter().next(),
            // `max_by_key` keeps the last maximum, so walk backwards to keep
            // the earliest one.
            TieBreak::Priority => rounds
                .into_iter()
                .rev()
                .max_by_key(|resolved| priority_rank(resolved.status)),
        };

        match picked {
            Some(resolved) => {
                tracing::debug!(
                    project_id = %project.id,
                    status = %resolved.status,
                    round_id = resolved.round.map(|r| r.funding_round.id.as_str()),
                    tie_break = %self.tie_break,
                    "resolved project status"
                );
                resolved
            }
            None => {
                tracing::error!(
                    project_id = %project.id,
                    memberships = project.round_memberships.len(),
                    "no round produced a status; falling back to UNKNOWN"
                );
                ResolvedStatus::without_round(DisplayStatus::Unknown)
            }
        }
    }
}
