use chrono::{DateTime, Utc};
use clap::ValueEnum;
use cubik_core::enums::TieBreak;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// CLI spelling of the multi-round tie-break policy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TieBreakArg {
    LastInOrder,
    FirstInOrder,
    Priority,
}

impl From<TieBreakArg> for TieBreak {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::LastInOrder => Self::LastInOrder,
            TieBreakArg::FirstInOrder => Self::FirstInOrder,
            TieBreakArg::Priority => Self::Priority,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub at: Option<DateTime<Utc>>,
    pub config: Option<String>,
}
