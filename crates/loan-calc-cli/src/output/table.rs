use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_scalar, schedule_rows, SCHEDULE_COLUMNS};

/// Format the result envelope as tables using the tabled crate.
pub fn print_table(value: &Value) {
    let Some(Value::Object(result)) = value.get("result") else {
        println!("{}", format_scalar(value));
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result.iter().filter(|(k, _)| k.as_str() != "schedule") {
        builder.push_record([key.as_str(), &format_scalar(val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(rows) = schedule_rows(value) {
        print_schedule_table(rows);
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_schedule_table(rows: &[Value]) {
    if rows.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(SCHEDULE_COLUMNS);
    for row in rows {
        let record: Vec<String> = SCHEDULE_COLUMNS
            .iter()
            .map(|col| row.get(*col).map(format_scalar).unwrap_or_default())
            .collect();
        builder.push_record(record);
    }

    println!("\n{}", Table::from(builder));
}
