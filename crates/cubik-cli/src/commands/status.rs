use chrono::{DateTime, Utc};
use cubik_core::entities::Project;
use cubik_core::enums::{DisplayStatus, JoinRoundStatus, TieBreak, VerifyStatus};
use cubik_status::{ResolvedStatus, StatusResolver, resolve_rounds};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::StatusArgs;
use crate::commands::shared::input::load_project;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusResponse<'a> {
    project_id: &'a str,
    tie_break: TieBreak,
    evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    resolved: ResolvedStatus<'a>,
}

#[derive(Debug, Serialize)]
struct RoundStatusRow<'a> {
    round_id: &'a str,
    round_name: &'a str,
    active: bool,
    membership_status: JoinRoundStatus,
    status: DisplayStatus,
}

/// Per-round statuses. `rounds` is empty unless the project is verified, so
/// the verification status is always reported alongside.
#[derive(Debug, Serialize)]
struct RoundsResponse<'a> {
    project_id: &'a str,
    verify_status: VerifyStatus,
    evaluated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rounds: Vec<RoundStatusRow<'a>>,
}

pub fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = load_project(&args.input.input)?;
    let now = ctx.clock().now();

    if args.all {
        let response = rounds(&project, now);
        return match flags.format {
            OutputFormat::Table if !response.rounds.is_empty() => output(&response.rounds, flags.format),
            _ => output(&response, flags.format),
        };
    }

    let tie_break = args
        .tie_break
        .map_or(ctx.config.status.tie_break, TieBreak::from);
    output(&resolve(&project, tie_break, now), flags.format)
}

fn resolve(project: &Project, tie_break: TieBreak, now: DateTime<Utc>) -> StatusResponse<'_> {
    StatusResponse {
        project_id: &project.id,
        tie_break,
        evaluated_at: now,
        resolved: StatusResolver::new(tie_break).resolve(project, now),
    }
}

fn rounds(project: &Project, now: DateTime<Utc>) -> RoundsResponse<'_> {
    RoundsResponse {
        project_id: &project.id,
        verify_status: project.verify_status,
        evaluated_at: now,
        rounds: round_rows(project, now),
    }
}

fn round_rows(project: &Project, now: DateTime<Utc>) -> Vec<RoundStatusRow<'_>> {
    resolve_rounds(project, now)
        .into_iter()
        .filter_map(|resolved| {
            let membership = resolved.round?;
            Some(RoundStatusRow {
                round_id: &membership.funding_round.id,
                round_name: &membership.funding_round.name,
                active: membership.funding_round.active,
                membership_status: membership.status,
                status: resolved.status,
            })
        })
        .collect()
}
