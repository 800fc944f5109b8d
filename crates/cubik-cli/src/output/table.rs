#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned table. Long cells are truncated with `…` when the table
/// would exceed `max_width`; status-like cells are colored when enabled.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = column_widths(headers, rows);
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color {
                    colorize(&cell, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect()
}

/// Narrow the widest column one character at a time until the table fits or
/// every column is at its floor.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// Wrap the padded cell in an ANSI color chosen from its raw value.
fn colorize(raw: &str, padded: String) -> String {
    let code = match raw.to_ascii_lowercase().as_str() {
        "live" | "verified" | "approved" | "granted" | "true" => "32",
        "pending" | "review" | "not_connected" => "33",
        "failed" | "rejected" | "not_admin" | "wallet_mismatch" | "unknown" | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableOptions {
        TableOptions {
            max_width: None,
            color: false,
        }
    }

    #[test]
    fn aligns_columns() {
        let rows = vec![
            vec!["round-a".to_string(), "LIVE".to_string(), "12.5".to_string()],
            vec!["round-bbbbbb".to_string(), "ENDED".to_string(), "3".to_string()],
        ];
        let table = render_table(&["round", "status", "total"], &rows, plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        // Numbers are right-aligned.
        assert!(lines[3].ends_with("     3"));
    }

    #[test]
    fn truncates_to_max_width() {
        let rows = vec![vec!["x".repeat(80), "LIVE".to_string()]];
        let table = render_table(
            &["message", "status"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40);
        assert!(row.contains('…'));
    }

    #[test]
    fn colors_known_statuses_only() {
        assert!(colorize("LIVE", "LIVE  ".into()).starts_with("\u{1b}[32m"));
        assert_eq!(colorize("alpha", "alpha ".into()), "alpha ");
    }
}
