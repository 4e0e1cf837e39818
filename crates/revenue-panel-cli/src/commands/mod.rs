pub mod dataset;
pub mod panel;
pub mod tables;

use clap::Args;
use serde_json::Value;

use revenue_panel_core::dataset::RecordStore;
use revenue_panel_core::filter::FilterSelection;

/// How many institutions the default selection picks up, matching the
/// dashboard sidebar's "up to 4" default.
pub const DEFAULT_INSTITUTION_LIMIT: usize = 4;

/// Record source and filter flags shared by every aggregation command.
#[derive(Args)]
pub struct SelectionArgs {
    /// Records file: .csv with EXERCICIO, COMPETENCIA, INSTITUIÇÃO,
    /// RECEITA and VALOR columns, or a .json record array. Falls back to
    /// a JSON record array piped on stdin.
    #[arg(long)]
    pub records: Option<String>,

    /// Fiscal year to report on (exactly one)
    #[arg(long)]
    pub fiscal_year: i32,

    /// Periods to include, comma-separated (defaults to every period)
    #[arg(long, value_delimiter = ',')]
    pub periods: Vec<String>,

    /// Institutions to include, focal institution first, comma-separated
    /// (defaults to the first four in the dataset)
    #[arg(long, value_delimiter = ',')]
    pub institutions: Vec<String>,

    /// Revenue categories to include, comma-separated (defaults to every category)
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,
}

/// Build the effective selection: dashboard defaults, overridden per flag.
pub fn selection_from_args(
    store: &RecordStore,
    args: &SelectionArgs,
) -> Result<FilterSelection, Box<dyn std::error::Error>> {
    let mut selection = store.default_selection(args.fiscal_year, DEFAULT_INSTITUTION_LIMIT)?;
    if !args.periods.is_empty() {
        selection.periods = args.periods.clone();
    }
    if !args.institutions.is_empty() {
        selection.institutions = args.institutions.clone();
    }
    if !args.categories.is_empty() {
        selection.revenue_categories = args.categories.clone();
    }
    Ok(selection)
}

/// The "no data for selection" signal, as a renderable value.
pub fn no_data_value() -> Value {
    serde_json::json!({ "status": "no_data" })
}
