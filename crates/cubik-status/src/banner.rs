//! Banner text shown above a project card for each display status.

use chrono::{DateTime, Utc};
use cubik_core::enums::DisplayStatus;
use serde::Serialize;

use crate::ResolvedStatus;

/// Label and message for a resolved status. Layout and colors are up to the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    pub status: DisplayStatus,
    pub label: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

impl StatusBanner {
    #[must_use]
    pub fn for_status(resolved: &ResolvedStatus<'_>) -> Self {
        let round = resolved.round.map(|membership| &membership.funding_round);
        let round_name = round.map(|r| r.name.clone());
        let name = round_name.as_deref().unwrap_or("this");

        let (label, message) = match resolved.status {
            DisplayStatus::Review => (
                "Under Review",
                "Thank you for submitting. Your project is under review.".to_string(),
            ),
            DisplayStatus::Verified => (
                "Verified",
                "Congratulations! Your project has been verified. You can now apply for grants."
                    .to_string(),
            ),
            DisplayStatus::Failed => (
                "Approval Failed",
                "Unfortunately your project did not meet the review criteria.".to_string(),
            ),
            DisplayStatus::Live => ("Live", format!("Participating in {name} Round")),
            DisplayStatus::Approved => (
                "Selected",
                format!(
                    "Congratulations your project has been selected to participate in {name} Round."
                ),
            ),
            DisplayStatus::Rejected => (
                "Not Selected",
                "Thank you for your submission, but unfortunately it did not meet our review criteria."
                    .to_string(),
            ),
            DisplayStatus::Pending => match round {
                Some(_) => (
                    "Approval Pending",
                    format!(
                        "Your project is currently under review for {name} Round. Check your mail for more information."
                    ),
                ),
                None => ("Approval Pending", "Your project is awaiting review.".to_string()),
            },
            DisplayStatus::Ended => ("Round Ended", format!("{name} Round has ended.")),
            DisplayStatus::Unknown => (
                "Status Unavailable",
                "We could not determine the status of this project.".to_string(),
            ),
        };

        // Only a live banner carries the countdown window.
        let (starts_at, ends_at) = match (resolved.status, round) {
            (DisplayStatus::Live, Some(r)) => (Some(r.start_time), Some(r.end_time)),
            _ => (None, None),
        };

        Self {
            status: resolved.status,
            label,
            message,
            round_name,
            starts_at,
            ends_at,
        }
    }
}
