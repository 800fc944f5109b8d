use chrono::NaiveDate;
use cubik_core::entities::Project;
use cubik_dashboard::{DailyTotal, daily_funding_series};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FundingArgs;
use crate::commands::shared::input::load_project;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &FundingArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = load_project(&args.input.input)?;
    let days = args.days.unwrap_or(ctx.config.dashboard.chart_window_days);
    let today = ctx.clock().now().date_naive();
    output(&series(&project, today, days), flags.format)
}

/// All donations to the project, across rounds, bucketed by day.
fn series(project: &Project, today: NaiveDate, days: u32) -> Vec<DailyTotal> {
    let contributions = project
        .round_memberships
        .iter()
        .flat_map(|membership| &membership.funding_round.contributions)
        .filter(|contribution| contribution.project_id == project.id);
    daily_funding_series(contributions, today, days)
}
