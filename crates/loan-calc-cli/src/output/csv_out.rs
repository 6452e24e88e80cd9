use serde_json::Value;
use std::io;

use super::{format_scalar, schedule_rows, SCHEDULE_COLUMNS};

/// Write output as CSV to stdout: one row per installment when a schedule
/// exists, otherwise a two-column field/value listing of the totals.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(rows) = schedule_rows(value) {
        let _ = wtr.write_record(SCHEDULE_COLUMNS);
        for row in rows {
            let record: Vec<String> = SCHEDULE_COLUMNS
                .iter()
                .map(|col| row.get(*col).map(format_scalar).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    } else if let Some(Value::Object(result)) = value.get("result") {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in result {
            let _ = wtr.write_record([key.as_str(), &format_scalar(val)]);
        }
    } else {
        let _ = wtr.write_record([&format_scalar(value)]);
    }

    let _ = wtr.flush();
}
