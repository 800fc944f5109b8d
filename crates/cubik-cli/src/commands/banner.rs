use cubik_status::{StatusBanner, StatusResolver};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InputArgs;
use crate::commands::shared::input::load_project;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &InputArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = load_project(&args.input)?;
    let resolved = StatusResolver::new(ctx.config.status.tie_break).resolve_now(&project, ctx.clock());
    output(&StatusBanner::for_status(&resolved), flags.format)
}
