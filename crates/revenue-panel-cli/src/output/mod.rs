pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// True for the "no data for selection" signal.
pub fn is_no_data(value: &Value) -> bool {
    value.get("status").and_then(Value::as_str) == Some("no_data")
}

/// Unwrap the computation envelope out of a panel result, if present.
pub fn unwrap_panel(value: &Value) -> &Value {
    value.get("panel").unwrap_or(value)
}
