use cubik_core::entities::Project;
use cubik_status::ResolvedStatus;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::output::output;

pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.kind {
        SchemaKind::Project => schema_for!(Project),
        SchemaKind::Resolved => schema_for!(ResolvedStatus<'static>),
    };
    output(&schema, flags.format)
}
