use serde::{Deserialize, Serialize};

use crate::error::RevenuePanelError;
use crate::types::RevenueRecord;
use crate::RevenuePanelResult;

/// User-selected filter criteria for one recomputation pass.
///
/// `fiscal_year` is an equality predicate — exactly one year per pass.
/// The remaining fields are set-membership predicates. `institutions`
/// keeps its selection order: the first entry is the focal institution
/// the summary cards report on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub fiscal_year: i32,
    pub periods: Vec<String>,
    pub institutions: Vec<String>,
    pub revenue_categories: Vec<String>,
}

impl FilterSelection {
    /// First selected institution — the subject of the summary metrics.
    pub fn focal_institution(&self) -> RevenuePanelResult<&str> {
        self.institutions
            .first()
            .map(String::as_str)
            .ok_or_else(|| RevenuePanelError::InvalidInput {
                field: "institutions".to_string(),
                reason: "At least one institution must be selected".to_string(),
            })
    }

    /// Reject selections with an empty membership list.
    pub fn validate(&self) -> RevenuePanelResult<()> {
        if self.periods.is_empty() {
            return Err(RevenuePanelError::InvalidInput {
                field: "periods".to_string(),
                reason: "At least one period must be selected".to_string(),
            });
        }
        if self.institutions.is_empty() {
            return Err(RevenuePanelError::InvalidInput {
                field: "institutions".to_string(),
                reason: "At least one institution must be selected".to_string(),
            });
        }
        if self.revenue_categories.is_empty() {
            return Err(RevenuePanelError::InvalidInput {
                field: "revenue_categories".to_string(),
                reason: "At least one revenue category must be selected".to_string(),
            });
        }
        Ok(())
    }

    /// True when `record` satisfies the conjunction of all four predicates.
    pub fn matches(&self, record: &RevenueRecord) -> bool {
        record.fiscal_year == self.fiscal_year
            && self.periods.iter().any(|p| p == &record.period)
            && self.institutions.iter().any(|i| i == &record.institution)
            && self
                .revenue_categories
                .iter()
                .any(|c| c == &record.revenue_category)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn selection() -> FilterSelection {
        FilterSelection {
            fiscal_year: 2024,
            periods: vec!["Q1".to_string(), "Q2".to_string()],
            institutions: vec!["A".to_string(), "B".to_string()],
            revenue_categories: vec!["Tax".to_string()],
        }
    }

    #[test]
    fn test_validate_accepts_complete_selection() {
        assert!(selection().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let mut s = selection();
        s.periods.clear();
        assert!(s.validate().is_err());

        let mut s = selection();
        s.institutions.clear();
        assert!(s.validate().is_err());

        let mut s = selection();
        s.revenue_categories.clear();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_focal_institution_is_first_selected() {
        assert_eq!(selection().focal_institution().unwrap(), "A");
    }

    #[test]
    fn test_matches_requires_all_four_predicates() {
        let s = selection();
        let hit = RevenueRecord::new(2024, "Q1", "A", "Tax", dec!(10));
        assert!(s.matches(&hit));

        let wrong_year = RevenueRecord::new(2023, "Q1", "A", "Tax", dec!(10));
        assert!(!s.matches(&wrong_year));

        let wrong_period = RevenueRecord::new(2024, "Q3", "A", "Tax", dec!(10));
        assert!(!s.matches(&wrong_period));

        let wrong_institution = RevenueRecord::new(2024, "Q1", "C", "Tax", dec!(10));
        assert!(!s.matches(&wrong_institution));

        let wrong_category = RevenueRecord::new(2024, "Q1", "A", "Transfer", dec!(10));
        assert!(!s.matches(&wrong_category));
    }
}
