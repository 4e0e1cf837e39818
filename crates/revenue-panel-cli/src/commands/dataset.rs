use clap::{Args, ValueEnum};
use serde_json::Value;

use revenue_panel_core::dataset::RecordField;

use crate::input;

/// Arguments for listing distinct field values
#[derive(Args)]
pub struct ValuesArgs {
    /// Records file (.csv or .json); falls back to stdin
    #[arg(long)]
    pub records: Option<String>,

    /// Field to list
    #[arg(long, value_enum)]
    pub field: FieldArg,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum FieldArg {
    FiscalYear,
    Period,
    Institution,
    RevenueCategory,
}

impl From<FieldArg> for RecordField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::FiscalYear => RecordField::FiscalYear,
            FieldArg::Period => RecordField::Period,
            FieldArg::Institution => RecordField::Institution,
            FieldArg::RevenueCategory => RecordField::RevenueCategory,
        }
    }
}

pub fn run_values(args: ValuesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = input::records::load_store(&args.records)?;
    Ok(serde_json::to_value(
        store.distinct_values(args.field.into()),
    )?)
}
