use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RevenuePanelError;
use crate::filter::FilterSelection;
use crate::types::RevenueRecord;
use crate::RevenuePanelResult;

/// Filterable fields of a revenue record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    FiscalYear,
    Period,
    Institution,
    RevenueCategory,
}

/// In-memory dataset of revenue lines.
///
/// Loaded once per uploaded file and read-only thereafter; every
/// recomputation pass borrows the same records. Sessions own their store —
/// nothing here is shared across users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordStore {
    records: Vec<RevenueRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<RevenueRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RevenueRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique values of a field, for the filter option lists.
    ///
    /// Fiscal years come back ascending; the other fields keep the order
    /// they first appear in the dataset.
    pub fn distinct_values(&self, field: RecordField) -> Vec<String> {
        match field {
            RecordField::FiscalYear => {
                self.fiscal_years().iter().map(|y| y.to_string()).collect()
            }
            RecordField::Period => first_seen(self.records.iter().map(|r| r.period.as_str())),
            RecordField::Institution => {
                first_seen(self.records.iter().map(|r| r.institution.as_str()))
            }
            RecordField::RevenueCategory => {
                first_seen(self.records.iter().map(|r| r.revenue_category.as_str()))
            }
        }
    }

    /// Distinct fiscal years, ascending.
    pub fn fiscal_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.fiscal_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Periods in first-seen order.
    pub fn periods(&self) -> Vec<String> {
        first_seen(self.records.iter().map(|r| r.period.as_str()))
    }

    /// Institutions in first-seen order.
    pub fn institutions(&self) -> Vec<String> {
        first_seen(self.records.iter().map(|r| r.institution.as_str()))
    }

    /// Revenue categories in first-seen order.
    pub fn revenue_categories(&self) -> Vec<String> {
        first_seen(self.records.iter().map(|r| r.revenue_category.as_str()))
    }

    /// Selection mirroring the dashboard's sidebar defaults: one fiscal
    /// year, every period, every revenue category, and the first
    /// `max_institutions` institutions (the first of which becomes the
    /// focal institution).
    ///
    /// The cap applies to this convenience only; selections built by hand
    /// may name any number of institutions.
    pub fn default_selection(
        &self,
        fiscal_year: i32,
        max_institutions: usize,
    ) -> RevenuePanelResult<FilterSelection> {
        if self.records.is_empty() {
            return Err(RevenuePanelError::InsufficientData(
                "Dataset has no records to build a selection from".to_string(),
            ));
        }

        let mut institutions = self.institutions();
        institutions.truncate(max_institutions);

        Ok(FilterSelection {
            fiscal_year,
            periods: self.periods(),
            institutions,
            revenue_categories: self.revenue_categories(),
        })
    }
}

/// Unique values in first-seen order.
fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_store() -> RecordStore {
        RecordStore::from_records(vec![
            RevenueRecord::new(2024, "2024-02", "Beta", "Tax", dec!(50)),
            RevenueRecord::new(2023, "2023-01", "Alpha", "Transfer", dec!(80)),
            RevenueRecord::new(2024, "2024-01", "Alpha", "Tax", dec!(100)),
            RevenueRecord::new(2024, "2024-02", "Gamma", "Tax", dec!(25)),
        ])
    }

    #[test]
    fn test_fiscal_years_sorted_ascending() {
        assert_eq!(sample_store().fiscal_years(), vec![2023, 2024]);
    }

    #[test]
    fn test_institutions_first_seen_order() {
        assert_eq!(
            sample_store().institutions(),
            vec!["Beta".to_string(), "Alpha".to_string(), "Gamma".to_string()]
        );
    }

    #[test]
    fn test_distinct_values_by_field() {
        let store = sample_store();
        assert_eq!(
            store.distinct_values(RecordField::FiscalYear),
            vec!["2023".to_string(), "2024".to_string()]
        );
        assert_eq!(
            store.distinct_values(RecordField::RevenueCategory),
            vec!["Tax".to_string(), "Transfer".to_string()]
        );
    }

    #[test]
    fn test_default_selection_caps_institutions() {
        let store = sample_store();
        let selection = store.default_selection(2024, 2).unwrap();
        assert_eq!(selection.fiscal_year, 2024);
        assert_eq!(selection.institutions, vec!["Beta", "Alpha"]);
        assert_eq!(selection.focal_institution().unwrap(), "Beta");
        // all periods and categories stay selected
        assert_eq!(selection.periods.len(), 3);
        assert_eq!(selection.revenue_categories.len(), 2);
    }

    #[test]
    fn test_default_selection_on_empty_store() {
        let store = RecordStore::from_records(Vec::new());
        assert!(store.default_selection(2024, 4).is_err());
    }
}
