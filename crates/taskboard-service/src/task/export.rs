//! CSV export of a board's tasks.

use std::collections::HashMap;

use uuid::Uuid;

use taskboard_entity::board::Column;
use taskboard_entity::task::Task;

const HEADER: &str = "Title,Description,Priority,Column,Created";

/// Quote a field when it contains a delimiter, quote or line break.
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Renders tasks as CSV, one row per task, in the given order.
///
/// A task whose column is not in `columns` shows the column id instead.
pub fn render_tasks_csv(columns: &[Column], tasks: &[Task]) -> String {
    let names: HashMap<Uuid, &str> = columns.iter().map(|c| (c.id, c.name.as_str())).collect();

    let mut output = String::with_capacity(HEADER.len() + 1 + tasks.len() * 64);
    output.push_str(HEADER);
    output.push('\n');

    for task in tasks {
        let column = names
            .get(&task.column_id)
            .map(|name| name.to_string())
            .unwrap_or_else(|| task.column_id.to_string());

        output.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_csv(&task.title),
            escape_csv(&task.description),
            task.priority,
            escape_csv(&column),
            task.created_at.format("%Y-%m-%d"),
        ));
    }

    output
}
