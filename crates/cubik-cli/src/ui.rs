//! Terminal presentation settings, fixed once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalStyle {
    /// Color status cells in table output.
    pub status_color: bool,
    /// Width tables are squeezed into, when known.
    pub width: Option<usize>,
}

static STYLE: OnceLock<TerminalStyle> = OnceLock::new();

/// What the process environment says about stdout.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal<'a> {
    is_tty: bool,
    no_color: bool,
    columns: Option<&'a str>,
}

fn detect(flags: &GlobalFlags, terminal: Terminal<'_>) -> TerminalStyle {
    let status_color = flags.format == OutputFormat::Table
        && terminal.is_tty
        && !terminal.no_color
        && !flags.quiet;
    let width = terminal
        .columns
        .and_then(|columns| columns.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);
    TerminalStyle {
        status_color,
        width,
    }
}

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let style = detect(
        flags,
        Terminal {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: columns.as_deref(),
        },
    );
    // A second call keeps the first style.
    let _ = STYLE.set(style);
}

#[must_use]
pub fn style() -> TerminalStyle {
    STYLE.get().copied().unwrap_or_default()
}
