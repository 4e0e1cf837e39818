use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::filter::FilteredRecords;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::RevenuePanelResult;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Headline metrics for the dashboard's summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOutput {
    /// Institution the cards report on
    pub focal_institution: String,
    /// Total revenue of the focal institution within the filtered set
    pub focal_total: Money,
    /// Mean of the individual line amounts of every other institution.
    /// `None` when the focal institution is the only one present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_mean: Option<Money>,
    /// Focal share of the filtered grand total, as a percentage in [0, 100]
    /// for non-negative amounts. `None` when the grand total is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participation_pct: Option<Decimal>,
    /// Sum of every amount in the filtered set
    pub grand_total: Money,
}

// ---------------------------------------------------------------------------
// Summary computation
// ---------------------------------------------------------------------------

/// Compute the summary card metrics for the focal institution.
///
/// The comparison mean averages raw line amounts, not per-institution
/// totals: an institution reporting more lines weighs more. Degenerate
/// cases come back as `None` with a warning in the envelope, never as a
/// silent zero or a division panic.
pub fn summarize(
    filtered: &FilteredRecords,
    focal: &str,
) -> RevenuePanelResult<ComputationOutput<SummaryOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let mut focal_total = Decimal::ZERO;
    let mut comparison_sum = Decimal::ZERO;
    let mut comparison_count: usize = 0;
    let mut focal_count: usize = 0;
    let mut grand_total = Decimal::ZERO;

    for record in filtered.records() {
        grand_total += record.amount;
        if record.institution == focal {
            focal_total += record.amount;
            focal_count += 1;
        } else {
            comparison_sum += record.amount;
            comparison_count += 1;
        }
    }

    if focal_count == 0 {
        warnings.push(format!(
            "Focal institution '{}' has no records in the filtered set",
            focal
        ));
    }

    let comparison_mean = if comparison_count == 0 {
        warnings.push(format!(
            "No comparison data: '{}' is the only institution in the filtered set",
            focal
        ));
        None
    } else {
        Some(comparison_sum / Decimal::from(comparison_count as u64))
    };

    let participation_pct = if grand_total.is_zero() {
        warnings.push(
            "Filtered grand total is zero; participation percentage is undefined".to_string(),
        );
        None
    } else {
        Some(focal_total / grand_total * dec!(100))
    };

    let output = SummaryOutput {
        focal_institution: focal.to_string(),
        focal_total,
        comparison_mean,
        participation_pct,
        grand_total,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Focal Institution Summary (total, raw-line comparison mean, participation share)",
        &serde_json::json!({
            "focal_institution": focal,
            "record_count": filtered.records().len(),
            "comparison_record_count": comparison_count,
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
