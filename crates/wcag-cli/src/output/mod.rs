use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui::Ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// Tables list object keys alphabetically; use [`render_records`] when the
/// column order matters.
pub fn render<T: Serialize>(value: &T, ui: &Ui) -> anyhow::Result<String> {
    match ui.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let value = serde_json::to_value(value)?;
            Ok(match value {
                Value::Array(items) => {
                    let columns = union_keys(&items);
                    let columns = columns.iter().map(String::as_str).collect::<Vec<_>>();
                    records_table(&items, &columns, ui)
                }
                Value::Object(map) => {
                    let mut entries = map.into_iter().collect::<Vec<_>>();
                    entries.sort_by(|a, b| a.0.cmp(&b.0));
                    let rows = entries
                        .into_iter()
                        .map(|(key, value)| vec![key, value_to_cell(&value)])
                        .collect::<Vec<_>>();
                    table::render_table(&["key", "value"], &rows, ui.table_options())
                }
                scalar => value_to_cell(&scalar),
            })
        }
    }
}

/// Render a list of records with table columns in the given order.
pub fn render_records<T: Serialize>(
    items: &[T],
    columns: &[&str],
    ui: &Ui,
) -> anyhow::Result<String> {
    match ui.format {
        OutputFormat::Table => {
            let items = items
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records_table(&items, columns, ui))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&items, ui),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, ui: &Ui) -> anyhow::Result<()> {
    println!("{}", render(value, ui)?);
    Ok(())
}

pub fn output_records<T: Serialize>(
    items: &[T],
    columns: &[&str],
    ui: &Ui,
) -> anyhow::Result<()> {
    println!("{}", render_records(items, columns, ui)?);
    Ok(())
}

fn records_table(items: &[Value], columns: &[&str], ui: &Ui) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    let rows = items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| {
                    item.get(column)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(columns, &rows, ui.table_options())
}

fn union_keys(items: &[Value]) -> Vec<String> {
    let mut keys = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys.sort();
    keys
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{render, render_records};
    use crate::cli::OutputFormat;
    use crate::ui::Ui;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        level: &'static str,
        keywords: Vec<&'static str>,
    }

    fn example() -> Example {
        Example {
            id: "2.1.1",
            level: "A",
            keywords: vec!["keyboard", "navigation"],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), &Ui::plain(OutputFormat::Json)).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "2.1.1");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), &Ui::plain(OutputFormat::Raw)).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_table_is_key_value() {
        let out = render(&example(), &Ui::plain(OutputFormat::Table)).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("keyboard, navigation"));
    }

    #[test]
    fn records_keep_requested_column_order() {
        let out = render_records(&[example()], &["level", "id"], &Ui::plain(OutputFormat::Table))
            .expect("table render should work");
        let header = out.lines().next().expect("header");
        assert!(header.find("level") < header.find("id"));
        assert!(!header.contains("keywords"));
    }

    #[test]
    fn empty_records_render_placeholder() {
        let out = render_records::<Example>(&[], &["id"], &Ui::plain(OutputFormat::Table)).expect("render");
        assert_eq!(out, "(no rows)");
    }
}
