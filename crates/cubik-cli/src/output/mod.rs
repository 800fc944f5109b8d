//! Response rendering shared by every command.

use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// `json` is pretty-printed, `raw` is one compact line.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Raw => serde_json::to_string(value)?,
        OutputFormat::Table => render_table(value)?,
    };
    Ok(rendered)
}

/// Write a rendered response followed by a newline.
pub fn write_to<T: Serialize>(
    writer: &mut impl Write,
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(writer, "{}", render(value, format)?)?;
    Ok(())
}

/// Write a rendered response to stdout.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    write_to(&mut std::io::stdout().lock(), value, format)
}

fn table_options() -> table::TableOptions {
    let style = ui::style();
    table::TableOptions {
        max_width: style.width,
        color: style.status_color,
    }
}

/// Arrays of objects become one row per item; a single object becomes
/// key/value rows; anything else is a one-cell table.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    let rendered = match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            let mut headers = Vec::<String>::new();
            for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| String::from("-"), cell))
                        .collect::<Vec<String>>()
                })
                .collect::<Vec<_>>();
            table::render_table(&header_refs, &rows, table_options())
        }
        Value::Array(items) => {
            let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
            table::render_table(&["value"], &rows, table_options())
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render_table(&["key", "value"], &rows, table_options())
        }
        scalar => table::render_table(&["value"], &[vec![cell(&scalar)]], table_options()),
    };
    Ok(rendered)
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, write_to};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        round: &'static str,
        status: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            round: "alpha",
            status: "LIVE",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["status"], "LIVE");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Row {
            round: "alpha",
            status: "LIVE",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_has_a_row_per_item() {
        let rows = vec![
            Row {
                round: "alpha",
                status: "LIVE",
            },
            Row {
                round: "beta",
                status: "ENDED",
            },
        ];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap();
        assert!(header.find("round").unwrap() < header.find("status").unwrap());
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn write_to_appends_newline() {
        let mut buffer = Vec::new();
        write_to(&mut buffer, &"LIVE", OutputFormat::Raw).expect("write should work");
        assert_eq!(String::from_utf8(buffer).unwrap(), "\"LIVE\"\n");
    }

    #[test]
    fn table_render_for_empty_array() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(render(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }
}
