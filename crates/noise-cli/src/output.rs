//! Terminal rendering helpers

use colored::Colorize;
use serde_json::{Map, Value};

/// Build a query object from optional filters, `None` when nothing is set
pub fn params(pairs: Vec<(&str, Option<Value>)>) -> Option<Value> {
    let map: Map<String, Value> = pairs
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .collect();

    if map.is_empty() {
        None
    } else {
        Some(Value::Object(map))
    }
}

/// Items under `key`, or the body itself when the backend returned a bare list
pub fn items<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Render a scalar without JSON quoting
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("   {:<14} {}", format!("{}:", label), value);
}

/// One line per item with the selected columns
pub fn print_rows(rows: &[Value], columns: &[&str]) {
    if rows.is_empty() {
        println!("{}", "   (none)".dimmed());
        return;
    }

    println!("   {}", columns.join(" | ").bold());
    for row in rows {
        let line: Vec<String> = columns.iter().map(|c| cell(&row[*c])).collect();
        println!("   {}", line.join(" | "));
    }
    println!();
    println!("   {} {}", rows.len().to_string().cyan(), "items".dimmed());
}

/// Backend status message, when it sent one
pub fn message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str)
}
