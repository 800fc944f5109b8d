pub mod admin;
pub mod banner;
pub mod contributors;
pub mod funding;
pub mod schema;
pub mod shared;
pub mod sign_in;
pub mod status;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status(args) => status::handle(args, ctx, flags),
        Commands::Banner(args) => banner::handle(args, ctx, flags),
        Commands::Contributors(args) => contributors::handle(args, ctx, flags),
        Commands::Funding(args) => funding::handle(args, ctx, flags),
        Commands::Admin { action } => admin::handle(action, ctx, flags),
        Commands::SignIn { action } => sign_in::handle(action, ctx, flags),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}
