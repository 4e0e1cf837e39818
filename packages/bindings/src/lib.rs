use napi::Result as NapiResult;
use napi_derive::napi;

use revenue_panel_core::aggregate::{panel, summary, tables};
use revenue_panel_core::dataset::{RecordField, RecordStore};
use revenue_panel_core::filter::{self, FilterOutcome, FilterSelection};
use revenue_panel_core::types::RevenueRecord;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_records(records_json: &str) -> NapiResult<Vec<RevenueRecord>> {
    serde_json::from_str(records_json).map_err(to_napi_error)
}

fn parse_selection(selection_json: &str) -> NapiResult<FilterSelection> {
    serde_json::from_str(selection_json).map_err(to_napi_error)
}

const NO_DATA: &str = r#"{"status":"no_data"}"#;

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// Filter the records and compute the full dashboard panel.
/// Returns `{"status": "no_data"}` or `{"status": "ready", "panel": ...}`.
#[napi]
pub fn compute_panel(records_json: String, selection_json: String) -> NapiResult<String> {
    let store = RecordStore::from_records(parse_records(&records_json)?);
    let selection = parse_selection(&selection_json)?;
    let result = panel::run_panel(&store, &selection).map_err(to_napi_error)?;
    serde_json::to_string(&result).map_err(to_napi_error)
}

/// Filter the records and return the matching subset.
#[napi]
pub fn apply_filters(records_json: String, selection_json: String) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let selection = parse_selection(&selection_json)?;
    let outcome = filter::apply_filters(&records, &selection).map_err(to_napi_error)?;
    serde_json::to_string(&outcome).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Individual aggregations
// ---------------------------------------------------------------------------

/// Summary cards for the focal institution of the selection.
#[napi]
pub fn summarize(records_json: String, selection_json: String) -> NapiResult<String> {
    let records = parse_records(&records_json)?;
    let selection = parse_selection(&selection_json)?;
    match filter::apply_filters(&records, &selection).map_err(to_napi_error)? {
        FilterOutcome::NoData => Ok(NO_DATA.to_string()),
        FilterOutcome::Matched(filtered) => {
            let focal = selection.focal_institution().map_err(to_napi_error)?;
            let output = summary::summarize(&filtered, focal).map_err(to_napi_error)?;
            serde_json::to_string(&output).map_err(to_napi_error)
        }
    }
}

macro_rules! table_binding {
    ($name:ident, $table_fn:path) => {
        #[napi]
        pub fn $name(records_json: String, selection_json: String) -> NapiResult<String> {
            let records = parse_records(&records_json)?;
            let selection = parse_selection(&selection_json)?;
            match filter::apply_filters(&records, &selection).map_err(to_napi_error)? {
                FilterOutcome::NoData => Ok(NO_DATA.to_string()),
                FilterOutcome::Matched(filtered) => {
                    serde_json::to_string(&$table_fn(&filtered)).map_err(to_napi_error)
                }
            }
        }
    };
}

table_binding!(rank_by_institution, tables::rank_by_institution);
table_binding!(trend_by_period_institution, tables::trend_by_period_institution);
table_binding!(share_by_institution, tables::share_by_institution);
table_binding!(
    comparison_by_category_institution,
    tables::comparison_by_category_institution
);

// ---------------------------------------------------------------------------
// Filter option lists
// ---------------------------------------------------------------------------

/// Distinct values of a record field, for populating filter widgets.
/// `field` is one of "fiscal_year", "period", "institution",
/// "revenue_category".
#[napi]
pub fn distinct_values(records_json: String, field: String) -> NapiResult<String> {
    let store = RecordStore::from_records(parse_records(&records_json)?);
    let field: RecordField =
        serde_json::from_value(serde_json::Value::String(field)).map_err(to_napi_error)?;
    serde_json::to_string(&store.distinct_values(field)).map_err(to_napi_error)
}
