use serde_json::Value;

use super::format_scalar;

/// Print just the monthly payment, falling back to the first result field.
pub fn print_minimal(value: &Value) {
    let result_obj = value.get("result").unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(payment) = map.get("monthly_payment").filter(|v| !v.is_null()) {
            println!("{}", format_scalar(payment));
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result_obj));
}
