use clap::Args;
use serde_json::Value;

use revenue_panel_core::aggregate::{panel, summary};
use revenue_panel_core::filter::{apply_filters, FilterOutcome};

use crate::commands::{no_data_value, selection_from_args, SelectionArgs};
use crate::input;

/// Arguments for the full panel computation
#[derive(Args)]
pub struct PanelArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// Arguments for the summary cards
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run_panel(args: PanelArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = input::records::load_store(&args.selection.records)?;
    let selection = selection_from_args(&store, &args.selection)?;
    let result = panel::run_panel(&store, &selection)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let store = input::records::load_store(&args.selection.records)?;
    let selection = selection_from_args(&store, &args.selection)?;
    match apply_filters(store.records(), &selection)? {
        FilterOutcome::NoData => Ok(no_data_value()),
        FilterOutcome::Matched(filtered) => {
            let envelope = summary::summarize(&filtered, selection.focal_institution()?)?;
            Ok(serde_json::to_value(envelope)?)
        }
    }
}
