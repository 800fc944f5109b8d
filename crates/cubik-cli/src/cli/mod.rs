use chrono::{DateTime, Utc};
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat, TieBreakArg};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cubik` binary.
#[derive(Debug, Parser)]
#[command(name = "cubik", version, about = "Cubik - project status and dashboard data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// How responses are printed
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Only log errors, and never color tables
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log at debug level unless CUBIK_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Evaluate as of this RFC 3339 instant instead of now
    #[arg(long, global = true, value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,

    /// Config file to use instead of the user/project config files
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

impl Cli {
    /// Flags handed to every command handler.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            at: self.at,
            config: self.config.clone(),
        }
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|error| format!("expected an RFC 3339 instant like 2023-06-15T12:00:00Z: {error}"))
}
