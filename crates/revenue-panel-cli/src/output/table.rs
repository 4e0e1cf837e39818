use serde_json::Value;
use tabled::{builder::Builder, Table};

use crate::output::{is_no_data, unwrap_panel};

/// Format output as tables using the tabled crate.
///
/// A full panel prints the summary cards followed by one table per chart;
/// flat results print as Field/Value pairs.
pub fn print_table(value: &Value) {
    if is_no_data(value) {
        println!("No data found for the selected filters.");
        return;
    }

    match unwrap_panel(value) {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result, map);
            } else {
                print_flat_object(&Value::Object(map.clone()));
            }
        }
        Value::Array(arr) => print_array_table(arr),
        other => println!("{}", other),
    }
}

fn print_result(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result {
        // Full panel: summary cards plus one table per chart
        Value::Object(map) if map.contains_key("summary") => {
            if let Some(summary) = map.get("summary") {
                println!("Summary");
                print_flat_object(summary);
            }
            let charts = [
                ("ranking", "Ranking by institution"),
                ("trend", "Trend by period"),
                ("share", "Share of total"),
                ("comparison", "Comparison by category"),
            ];
            for (key, title) in charts {
                if let Some(Value::Array(rows)) = map.get(key) {
                    println!("\n{}", title);
                    print_array_table(rows);
                }
            }
        }
        Value::Object(_) => print_flat_object(result),
        Value::Array(rows) => print_array_table(rows),
        other => println!("{}", other),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(format_value)
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
