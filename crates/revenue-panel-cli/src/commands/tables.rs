use clap::Args;
use serde_json::Value;

use revenue_panel_core::aggregate::tables;
use revenue_panel_core::filter::{apply_filters, FilterOutcome, FilteredRecords};

use crate::commands::{no_data_value, selection_from_args, SelectionArgs};
use crate::input;

/// Arguments for the ranking table
#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the trend table
#[derive(Args)]
pub struct TrendArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the share table
#[derive(Args)]
pub struct ShareArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the category comparison table
#[derive(Args)]
pub struct ComparisonArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Load, filter, and hand back the matched records, or None for "no data".
fn filtered_for(args: &SelectionArgs) -> Result<Option<FilteredRecords>, Box<dyn std::error::Error>> {
    let store = input::records::load_store(&args.records)?;
    let selection = selection_from_args(&store, args)?;
    match apply_filters(store.records(), &selection)? {
        FilterOutcome::NoData => Ok(None),
        FilterOutcome::Matched(filtered) => Ok(Some(filtered)),
    }
}

pub fn run_rank(args: RankArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match filtered_for(&args.selection)? {
        None => Ok(no_data_value()),
        Some(filtered) => Ok(serde_json::to_value(tables::rank_by_institution(&filtered))?),
    }
}

pub fn run_trend(args: TrendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match filtered_for(&args.selection)? {
        None => Ok(no_data_value()),
        Some(filtered) => Ok(serde_json::to_value(tables::trend_by_period_institution(
            &filtered,
        ))?),
    }
}

pub fn run_share(args: ShareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match filtered_for(&args.selection)? {
        None => Ok(no_data_value()),
        Some(filtered) => Ok(serde_json::to_value(tables::share_by_institution(&filtered))?),
    }
}

pub fn run_comparison(args: ComparisonArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match filtered_for(&args.selection)? {
        None => Ok(no_data_value()),
        Some(filtered) => Ok(serde_json::to_value(
            tables::comparison_by_category_institution(&filtered),
        )?),
    }
}
