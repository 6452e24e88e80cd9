pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Column order for installment rows; JSON maps would sort them alphabetically.
pub const SCHEDULE_COLUMNS: [&str; 5] = [
    "number",
    "payment",
    "interest_portion",
    "principal_portion",
    "remaining_principal",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Render a scalar JSON value as plain text.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// The installment rows of a loan result envelope, if a schedule was produced.
pub fn schedule_rows(value: &Value) -> Option<&Vec<Value>> {
    value.get("result")?.get("schedule")?.as_array()
}
