use std::collections::HashSet;

use cubik_core::entities::{Contribution, Contributor, RoundMembership};
use serde::Serialize;

/// Contributions to `project_id` across all of its rounds, one per username.
///
/// Rounds hold contributions for every participating project, so the list is
/// filtered by project first. The first contribution seen for a username is
/// kept, and round/list order is preserved.
#[must_use]
pub fn unique_contributors<'a>(
    project_id: &str,
    memberships: &'a [RoundMembership],
) -> Vec<&'a Contribution> {
    let mut seen = HashSet::new();
    memberships
        .iter()
        .flat_map(|membership| &membership.funding_round.contributions)
        .filter(|contribution| contribution.project_id == project_id)
        .filter(|contribution| seen.insert(contribution.contributor.username.as_str()))
        .collect()
}

/// Compact avatar row for a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributorPreview {
    pub total: usize,
    /// The most recent contributors, oldest first.
    pub avatars: Vec<Contributor>,
    /// `"- -"` with no contributors, `"+N"` for the ones not shown, else empty.
    pub overflow: String,
}

impl ContributorPreview {
    #[must_use]
    pub fn from_contributors(contributions: &[&Contribution], max_avatars: usize) -> Self {
        let total = contributions.len();
        let avatars = contributions[total.saturating_sub(max_avatars)..]
            .iter()
            .map(|contribution| contribution.contributor.clone())
            .collect();

        let overflow = if total == 0 {
            String::from("- -")
        } else if total > max_avatars {
            format!("+{}", total - max_avatars)
        } else {
            String::new()
        };

        Self {
            total,
            avatars,
            overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use cubik_core::entities::FundingRound;
    use cubik_core::enums::JoinRoundStatus;
    use pretty_assertions::assert_eq;

    fn contribution(id: &str, project_id: &str, username: &str) -> Contribution {
        Contribution {
            id: id.into(),
            project_id: project_id.into(),
            contributor: Contributor {
                username: username.into(),
                profile_picture: None,
            },
            amount: 10.0,
            created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    fn membership(round_id: &str, contributions: Vec<Contribution>) -> RoundMembership {
        RoundMembership {
            id: format!("pjr-{round_id}"),
            status: JoinRoundStatus::Approved,
            funding_round: FundingRound {
                id: round_id.into(),
                name: round_id.into(),
                active: true,
                start_time: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2023, 7, 1, 0, 0, 0).unwrap(),
                contributions,
            },
        }
    }

    fn ids(list: &[&Contribution]) -> Vec<String> {
        list.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn dedups_across_rounds_keeping_first() {
        let memberships = vec![
            membership(
                "alpha",
                vec![
                    contribution("c1", "prj", "ana"),
                    contribution("c2", "other", "bob"),
                    contribution("c3", "prj", "ana"),
                ],
            ),
            membership(
                "beta",
                vec![contribution("c4", "prj", "bob"), contribution("c5", "prj", "ana")],
            ),
        ];

        let unique = unique_contributors("prj", &memberships);
        assert_eq!(ids(&unique), vec!["c1", "c4"]);
    }

    #[test]
    fn preview_of_nobody() {
        let preview = ContributorPreview::from_contributors(&[], 3);
        assert_eq!(preview.total, 0);
        assert!(preview.avatars.is_empty());
        assert_eq!(preview.overflow, "- -");
    }

    #[test]
    fn preview_within_limit_has_no_overflow() {
        let a = contribution("c1", "prj", "ana");
        let b = contribution("c2", "prj", "bob");
        let preview = ContributorPreview::from_contributors(&[&a, &b], 3);
        assert_eq!(preview.avatars.len(), 2);
        assert_eq!(preview.overflow, "");
    }

    #[test]
    fn preview_shows_last_avatars_and_overflow() {
        let all: Vec<Contribution> = ["ana", "bob", "cy", "dee", "eve"]
            .iter()
            .enumerate()
            .map(|(i, name)| contribution(&format!("c{i}"), "prj", name))
            .collect();
        let refs: Vec<&Contribution> = all.iter().collect();

        let preview = ContributorPreview::from_contributors(&refs, 3);
        let names: Vec<&str> = preview.avatars.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(names, vec!["cy", "dee", "eve"]);
        assert_eq!(preview.overflow, "+2");
        assert_eq!(preview.total, 5);
    }
}
