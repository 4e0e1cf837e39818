use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use revenue_panel_core::dataset::{columns, ColumnMap, RecordStore};
use revenue_panel_core::types::RevenueRecord;

use crate::input::stdin;

/// Load the record store from `--records` (CSV or JSON, by extension) or
/// from a JSON record array piped on stdin.
pub fn load_store(path: &Option<String>) -> Result<RecordStore, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        let resolved = resolve_path(path)?;
        if resolved.extension().and_then(|e| e.to_str()) == Some("csv") {
            read_csv_records(&resolved)
        } else {
            let records: Vec<RevenueRecord> = read_json(&resolved)?;
            Ok(RecordStore::from_records(records))
        }
    } else if let Some(value) = stdin::read_stdin()? {
        let records: Vec<RevenueRecord> = serde_json::from_value(value)?;
        Ok(RecordStore::from_records(records))
    } else {
        Err("--records is required (or pipe a JSON record array)".into())
    }
}

/// Read a CSV file whose headers normalize to the canonical columns.
fn read_csv_records(path: &Path) -> Result<RecordStore, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

    let headers = reader.headers()?.clone();
    let labels: Vec<&str> = headers.iter().collect();
    let map = ColumnMap::resolve(&labels)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        // Header occupies line 1
        records.push(record_from_row(&map, &row, i + 2)?);
    }
    Ok(RecordStore::from_records(records))
}

fn record_from_row(
    map: &ColumnMap,
    row: &csv::StringRecord,
    line: usize,
) -> Result<RevenueRecord, Box<dyn std::error::Error>> {
    let fiscal_year: i32 = cell(row, map.fiscal_year, columns::FISCAL_YEAR, line)?
        .trim()
        .parse()
        .map_err(|e| format!("Line {}: invalid {}: {}", line, columns::FISCAL_YEAR, e))?;

    let amount = Decimal::from_str(cell(row, map.amount, columns::AMOUNT, line)?.trim())
        .map_err(|e| format!("Line {}: invalid {}: {}", line, columns::AMOUNT, e))?;

    Ok(RevenueRecord {
        fiscal_year,
        period: cell(row, map.period, columns::PERIOD, line)?.trim().to_string(),
        institution: cell(row, map.institution, columns::INSTITUTION, line)?
            .trim()
            .to_string(),
        revenue_category: cell(row, map.revenue_category, columns::REVENUE_CATEGORY, line)?
            .trim()
            .to_string(),
        amount,
    })
}

fn cell<'a>(
    row: &'a csv::StringRecord,
    idx: usize,
    name: &str,
    line: usize,
) -> Result<&'a str, Box<dyn std::error::Error>> {
    row.get(idx)
        .ok_or_else(|| format!("Line {}: missing value for {}", line, name).into())
}

/// Read a JSON file and deserialise into a typed struct.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))?;
    Ok(value)
}

/// Resolve and validate the records path.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("File not found: {}", resolved.display()).into());
    }

    if !resolved.is_file() {
        return Err(format!("Not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}
