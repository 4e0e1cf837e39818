use serde::Serialize;

use crate::filter::FilterSelection;
use crate::types::RevenueRecord;
use crate::RevenuePanelResult;

/// Records that matched a selection. Non-empty by construction: the
/// aggregator only accepts this type, so aggregating an empty filter
/// result is impossible rather than merely discouraged.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredRecords(Vec<RevenueRecord>);

impl FilteredRecords {
    pub fn records(&self) -> &[RevenueRecord] {
        &self.0
    }

    pub fn into_records(self) -> Vec<RevenueRecord> {
        self.0
    }
}

/// Outcome of one filtering pass.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "records", rename_all = "snake_case")]
pub enum FilterOutcome {
    /// Nothing matched. A valid terminal state — callers render a
    /// "no data for selection" message instead of aggregating.
    NoData,
    /// At least one record matched.
    Matched(FilteredRecords),
}

/// Apply the conjunction of the selection's four predicates, preserving
/// the relative order of matching records.
pub fn apply_filters(
    records: &[RevenueRecord],
    selection: &FilterSelection,
) -> RevenuePanelResult<FilterOutcome> {
    selection.validate()?;

    let matched: Vec<RevenueRecord> = records
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();

    if matched.is_empty() {
        Ok(FilterOutcome::NoData)
    } else {
        Ok(FilterOutcome::Matched(FilteredRecords(matched)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn records() -> Vec<RevenueRecord> {
        vec![
            RevenueRecord::new(2024, "Q1", "A", "Tax", dec!(100)),
            RevenueRecord::new(2024, "Q1", "B", "Tax", dec!(50)),
            RevenueRecord::new(2023, "Q1", "A", "Tax", dec!(70)),
            RevenueRecord::new(2024, "Q2", "A", "Tax", dec!(30)),
        ]
    }

    fn selection() -> FilterSelection {
        FilterSelection {
            fiscal_year: 2024,
            periods: vec!["Q1".to_string(), "Q2".to_string()],
            institutions: vec!["A".to_string(), "B".to_string()],
            revenue_categories: vec!["Tax".to_string()],
        }
    }

    #[test]
    fn test_apply_filters_keeps_input_order() {
        let outcome = apply_filters(&records(), &selection()).unwrap();
        match outcome {
            FilterOutcome::Matched(filtered) => {
                let amounts: Vec<_> = filtered.records().iter().map(|r| r.amount).collect();
                assert_eq!(amounts, vec![dec!(100), dec!(50), dec!(30)]);
            }
            FilterOutcome::NoData => panic!("Expected matches"),
        }
    }

    #[test]
    fn test_apply_filters_excludes_other_years() {
        let outcome = apply_filters(&records(), &selection()).unwrap();
        if let FilterOutcome::Matched(filtered) = outcome {
            assert!(filtered.records().iter().all(|r| r.fiscal_year == 2024));
        } else {
            panic!("Expected matches");
        }
    }

    #[test]
    fn test_apply_filters_empty_is_no_data_not_error() {
        let mut s = selection();
        s.fiscal_year = 1999;
        let outcome = apply_filters(&records(), &s).unwrap();
        assert!(matches!(outcome, FilterOutcome::NoData));
    }

    #[test]
    fn test_apply_filters_rejects_invalid_selection() {
        let mut s = selection();
        s.periods.clear();
        assert!(apply_filters(&records(), &s).is_err());
    }
}
