use chrono::{DateTime, Utc};
use cubik_core::entities::Project;
use cubik_dashboard::{ContributorPreview, unique_contributors};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InputArgs;
use crate::commands::shared::input::load_project;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContributorRow<'a> {
    username: &'a str,
    first_contribution: &'a str,
    amount: f64,
    contributed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ContributorsResponse<'a> {
    project_id: &'a str,
    contributors: Vec<ContributorRow<'a>>,
    preview: ContributorPreview,
}

pub fn handle(args: &InputArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = load_project(&args.input)?;
    let response = build(&project, ctx.config.dashboard.contributor_preview);
    match flags.format {
        // Rows only; the nested preview does not fit a table.
        crate::cli::OutputFormat::Table => output(&response.contributors, flags.format),
        _ => output(&response, flags.format),
    }
}

fn build(project: &Project, max_avatars: usize) -> ContributorsResponse<'_> {
    let unique = unique_contributors(&project.id, &project.round_memberships);
    let preview = ContributorPreview::from_contributors(&unique, max_avatars);
    let contributors = unique
        .iter()
        .map(|contribution| ContributorRow {
            username: &contribution.contributor.username,
            first_contribution: &contribution.id,
            amount: contribution.amount,
            contributed_at: contribution.created_at,
        })
        .collect();

    ContributorsResponse {
        project_id: &project.id,
        contributors,
        preview,
    }
}
