use clap::{Args, Subcommand, ValueEnum};
use cubik_config::DashboardConfig;

use super::TieBreakArg;

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve the display status of a project export.
    Status(StatusArgs),
    /// Show the status banner text for a project export.
    Banner(InputArgs),
    /// List unique contributors of a project with the avatar preview.
    Contributors(InputArgs),
    /// Daily donation totals for the funding chart.
    Funding(FundingArgs),
    /// Admin authorization checks.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Wallet sign-in helpers.
    SignIn {
        #[command(subcommand)]
        action: SignInCommands,
    },
    /// Print the JSON Schema of an input or output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// Project JSON file exported by the data service ("-" for stdin).
    pub input: String,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// List the status of every round membership instead of a single status.
    #[arg(long)]
    pub all: bool,
    /// Override the configured multi-round tie-break (not used with --all).
    #[arg(long, value_enum, conflicts_with = "all")]
    pub tie_break: Option<TieBreakArg>,
}

#[derive(Clone, Debug, Args)]
pub struct FundingArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Days before today to include, 1 to 366 (defaults to `dashboard.chart_window_days`).
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(DashboardConfig::MAX_CHART_WINDOW_DAYS))
    )]
    pub days: Option<u32>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Evaluate the admin-controls gate for a wallet.
    Check(AdminCheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AdminCheckArgs {
    /// Connected wallet. Omit to check a disconnected session.
    #[arg(long)]
    pub wallet: Option<String>,
    /// Main wallet on the signed-in session (defaults to --wallet).
    #[arg(long)]
    pub session_wallet: Option<String>,
    /// Treat the session as having no main wallet.
    #[arg(long, conflicts_with = "session_wallet")]
    pub no_session_wallet: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SignInCommands {
    /// Print the message a wallet must sign for the given CSRF token.
    Message(SignInMessageArgs),
    /// Check a wallet's base58 ed25519 signature over the sign-in message.
    Verify(SignInVerifyArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SignInMessageArgs {
    /// CSRF token issued by the session provider.
    #[arg(long)]
    pub csrf: String,
}

#[derive(Clone, Debug, Args)]
pub struct SignInVerifyArgs {
    /// CSRF token the message was built with.
    #[arg(long)]
    pub csrf: String,
    /// Wallet that signed.
    #[arg(long)]
    pub wallet: String,
    /// Base58 signature returned by the wallet.
    #[arg(long)]
    pub signature: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaKind {
    /// Project export consumed by every project command.
    Project,
    /// Resolved status produced by `cubik status`.
    Resolved,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub kind: SchemaKind,
}
