use serde::Serialize;
use std::time::Instant;

use crate::aggregate::summary::{summarize, SummaryOutput};
use crate::aggregate::tables::{
    comparison_by_category_institution, rank_by_institution, share_by_institution,
    trend_by_period_institution, CategoryInstitutionTotal, InstitutionTotal,
    PeriodInstitutionTotal,
};
use crate::dataset::RecordStore;
use crate::filter::{apply_filters, FilterOutcome, FilterSelection, FilteredRecords};
use crate::types::{with_metadata, ComputationOutput};
use crate::RevenuePanelResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Everything one dashboard repaint needs: the summary cards plus the four
/// chart tables.
#[derive(Debug, Clone, Serialize)]
pub struct PanelOutput {
    pub summary: SummaryOutput,
    pub ranking: Vec<InstitutionTotal>,
    pub trend: Vec<PeriodInstitutionTotal>,
    pub share: Vec<InstitutionTotal>,
    pub comparison: Vec<CategoryInstitutionTotal>,
}

/// Result of one user interaction against the panel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "panel", rename_all = "snake_case")]
pub enum PanelResult {
    /// The selection matched no records; render a "no data" message.
    NoData,
    /// Metrics and chart tables for the selection.
    Ready(ComputationOutput<PanelOutput>),
}

// ---------------------------------------------------------------------------
// Panel computation
// ---------------------------------------------------------------------------

/// One full recomputation pass over an already-filtered set.
///
/// Pure: identical filtered records and selection always produce an
/// identical panel. Summary warnings (missing comparison data, undefined
/// participation) surface on this envelope.
pub fn compute_panel(
    filtered: &FilteredRecords,
    selection: &FilterSelection,
) -> RevenuePanelResult<ComputationOutput<PanelOutput>> {
    let start = Instant::now();

    let focal = selection.focal_institution()?;
    let summary_envelope = summarize(filtered, focal)?;
    let warnings = summary_envelope.warnings;

    let output = PanelOutput {
        summary: summary_envelope.result,
        ranking: rank_by_institution(filtered),
        trend: trend_by_period_institution(filtered),
        share: share_by_institution(filtered),
        comparison: comparison_by_category_institution(filtered),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Revenue Panel (summary cards, ranking, per-period trend, share, category comparison)",
        &serde_json::json!({
            "fiscal_year": selection.fiscal_year,
            "periods": selection.periods.len(),
            "institutions": selection.institutions.len(),
            "revenue_categories": selection.revenue_categories.len(),
            "record_count": filtered.records().len(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Filter the store and compute the panel in one call — the unit of work
/// behind every user interaction (upload, filter change).
pub fn run_panel(
    store: &RecordStore,
    selection: &FilterSelection,
) -> RevenuePanelResult<PanelResult> {
    match apply_filters(store.records(), selection)? {
        FilterOutcome::NoData => Ok(PanelResult::NoData),
        FilterOutcome::Matched(filtered) => {
            Ok(PanelResult::Ready(compute_panel(&filtered, selection)?))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
