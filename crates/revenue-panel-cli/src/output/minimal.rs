use serde_json::Value;

use crate::output::{is_no_data, unwrap_panel};

/// Print just the key answer value from the output.
///
/// Digs into the summary cards when present, then tries the headline
/// metrics in priority order, then falls back to the first field.
pub fn print_minimal(value: &Value) {
    if is_no_data(value) {
        println!("no data");
        return;
    }

    let envelope = unwrap_panel(value);
    let result_obj = envelope
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(envelope);

    // The panel nests the cards under "summary"
    let cards = result_obj.get("summary").unwrap_or(result_obj);

    let priority_keys = [
        "participation_pct",
        "focal_total",
        "comparison_mean",
        "grand_total",
        "total",
    ];

    if let Value::Object(map) = cards {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(cards));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
