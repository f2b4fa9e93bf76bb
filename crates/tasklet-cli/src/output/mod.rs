use serde::Serialize;
use serde_json::Value;
use tasklet_core::enums::Theme;
use tasklet_core::responses::Snapshot;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Palette, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    theme: Theme,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options(theme)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, theme: Theme) -> anyhow::Result<()> {
    let rendered = render(value, format, theme)?;
    println!("{rendered}");
    Ok(())
}

/// Render the dashboard view.
///
/// JSON formats serialize the snapshot as-is. The table format shows a status
/// line followed by the visible tasks.
pub fn render_snapshot(snapshot: &Snapshot, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(snapshot, format, snapshot.theme);
    }

    let options = table_options(snapshot.theme);
    let counts = snapshot.counts;
    let status = format!(
        "{} total  {} active  {} completed  |  filter: {}  theme: {}",
        counts.total, counts.active, counts.completed, snapshot.filter, snapshot.theme
    );
    let status = match options.palette {
        Some(palette) => Palette::paint(palette.accent, &status),
        None => status,
    };

    let body = if snapshot.tasks.is_empty() {
        String::from("(no tasks)")
    } else {
        render_table(&snapshot.tasks, options)?
    };

    Ok(format!("{status}\n\n{body}"))
}

fn table_options(theme: Theme) -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        palette: prefs.table_color.then(|| Palette::for_theme(theme)),
    }
}

fn render_table<T: Serialize>(value: &T, options: TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        Value::Null => Ok(String::from("(none)")),
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort_by_key(|header| column_rank(header));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

/// Task columns read best as id, text, state, date; anything else trails alphabetically.
fn column_rank(header: &str) -> (usize, String) {
    let rank = ["id", "text", "completed", "createdAt"]
        .iter()
        .position(|known| *known == header)
        .unwrap_or(usize::MAX);
    (rank, header.to_string())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
