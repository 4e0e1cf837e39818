use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::filter::FilteredRecords;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Table row types
// ---------------------------------------------------------------------------

/// One bar of the ranking chart / one slice of the share chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionTotal {
    pub institution: String,
    pub total: Money,
}

/// One point of the per-period trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInstitutionTotal {
    pub period: String,
    pub institution: String,
    pub total: Money,
}

/// One grouped bar of the category comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInstitutionTotal {
    pub revenue_category: String,
    pub institution: String,
    pub total: Money,
}

// ---------------------------------------------------------------------------
// Group-by reductions
// ---------------------------------------------------------------------------

/// Sum amounts per institution, keyed in name order.
/// Shared by the ranking and share tables.
fn totals_by_institution(filtered: &FilteredRecords) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for record in filtered.records() {
        *totals
            .entry(record.institution.clone())
            .or_insert(Decimal::ZERO) += record.amount;
    }
    totals
}

/// Ranking chart: institutions by total revenue, highest first.
/// Equal totals fall back to institution name ascending.
pub fn rank_by_institution(filtered: &FilteredRecords) -> Vec<InstitutionTotal> {
    let mut rows: Vec<InstitutionTotal> = totals_by_institution(filtered)
        .into_iter()
        .map(|(institution, total)| InstitutionTotal { institution, total })
        .collect();
    rows.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.institution.cmp(&b.institution))
    });
    rows
}

/// Share (donut) chart: per-institution totals, name order.
pub fn share_by_institution(filtered: &FilteredRecords) -> Vec<InstitutionTotal> {
    totals_by_institution(filtered)
        .into_iter()
        .map(|(institution, total)| InstitutionTotal { institution, total })
        .collect()
}

/// Trend chart: revenue summed per (period, institution).
/// Display ordering is the presentation layer's concern.
pub fn trend_by_period_institution(filtered: &FilteredRecords) -> Vec<PeriodInstitutionTotal> {
    let mut totals: BTreeMap<(String, String), Money> = BTreeMap::new();
    for record in filtered.records() {
        *totals
            .entry((record.period.clone(), record.institution.clone()))
            .or_insert(Decimal::ZERO) += record.amount;
    }
    totals
        .into_iter()
        .map(|((period, institution), total)| PeriodInstitutionTotal {
            period,
            institution,
            total,
        })
        .collect()
}

/// Category comparison chart: revenue summed per (category, institution).
pub fn comparison_by_category_institution(
    filtered: &FilteredRecords,
) -> Vec<CategoryInstitutionTotal> {
    let mut totals: BTreeMap<(String, String), Money> = BTreeMap::new();
    for record in filtered.records() {
        *totals
            .entry((
                record.revenue_category.clone(),
                record.institution.clone(),
            ))
            .or_insert(Decimal::ZERO) += record.amount;
    }
    totals
        .into_iter()
        .map(
            |((revenue_category, institution), total)| CategoryInstitutionTotal {
                revenue_category,
                institution,
                total,
            },
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply_filters, FilterOutcome, FilterSelection};
    use crate::types::RevenueRecord;
    use rust_decimal_macros::dec;

    fn filtered_fixture() -> FilteredRecords {
        let records = vec![
            RevenueRecord::new(2024, "Q1", "B", "Tax", dec!(60)),
            RevenueRecord::new(2024, "Q1", "A", "Tax", dec!(100)),
            RevenueRecord::new(2024, "Q2", "B", "Transfer", dec!(40)),
            RevenueRecord::new(2024, "Q2", "A", "Tax", dec!(30)),
            RevenueRecord::new(2024, "Q1", "C", "Transfer", dec!(130)),
        ];
        let selection = FilterSelection {
            fiscal_year: 2024,
            periods: vec!["Q1".to_string(), "Q2".to_string()],
            institutions: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            revenue_categories: vec!["Tax".to_string(), "Transfer".to_string()],
        };
        match apply_filters(&records, &selection).unwrap() {
            FilterOutcome::Matched(f) => f,
            FilterOutcome::NoData => panic!("Fixture produced no matches"),
        }
    }

    #[test]
    fn test_rank_sorts_descending_by_total() {
        let rows = rank_by_institution(&filtered_fixture());
        // A = 130, B = 100, C = 130 → ties A/C broken by name ascending
        assert_eq!(rows[0].institution, "A");
        assert_eq!(rows[0].total, dec!(130));
        assert_eq!(rows[1].institution, "C");
        assert_eq!(rows[1].total, dec!(130));
        assert_eq!(rows[2].institution, "B");
        assert_eq!(rows[2].total, dec!(100));
    }

    #[test]
    fn test_share_matches_rank_totals() {
        let f = filtered_fixture();
        let mut rank: Vec<_> = rank_by_institution(&f);
        rank.sort_by(|a, b| a.institution.cmp(&b.institution));
        let share = share_by_institution(&f);
        assert_eq!(rank, share);
    }

    #[test]
    fn test_table_totals_cover_every_amount() {
        let f = filtered_fixture();
        let filtered_sum: Decimal = f.records().iter().map(|r| r.amount).sum();
        let rank_sum: Decimal = rank_by_institution(&f).iter().map(|r| r.total).sum();
        let share_sum: Decimal = share_by_institution(&f).iter().map(|r| r.total).sum();
        assert_eq!(rank_sum, filtered_sum);
        assert_eq!(share_sum, filtered_sum);
    }

    #[test]
    fn test_trend_groups_by_period_and_institution() {
        let rows = trend_by_period_institution(&filtered_fixture());
        // 5 records spread over 5 distinct (period, institution) pairs
        assert_eq!(rows.len(), 5);
        let q1_a = rows
            .iter()
            .find(|r| r.period == "Q1" && r.institution == "A")
            .unwrap();
        assert_eq!(q1_a.total, dec!(100));
    }

    #[test]
    fn test_trend_sums_multiple_lines_in_same_cell() {
        let records = vec![
            RevenueRecord::new(2024, "Q1", "A", "Tax", dec!(10)),
            RevenueRecord::new(2024, "Q1", "A", "Transfer", dec!(15)),
        ];
        let selection = FilterSelection {
            fiscal_year: 2024,
            periods: vec!["Q1".to_string()],
            institutions: vec!["A".to_string()],
            revenue_categories: vec!["Tax".to_string(), "Transfer".to_string()],
        };
        let f = match apply_filters(&records, &selection).unwrap() {
            FilterOutcome::Matched(f) => f,
            FilterOutcome::NoData => panic!("Fixture produced no matches"),
        };
        let rows = trend_by_period_institution(&f);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, dec!(25));
    }

    #[test]
    fn test_comparison_groups_by_category_and_institution() {
        let rows = comparison_by_category_institution(&filtered_fixture());
        let tax_a = rows
            .iter()
            .find(|r| r.revenue_category == "Tax" && r.institution == "A")
            .unwrap();
        // A's Tax lines: 100 + 30
        assert_eq!(tax_a.total, dec!(130));
        let transfer_b = rows
            .iter()
            .find(|r| r.revenue_category == "Transfer" && r.institution == "B")
            .unwrap();
        assert_eq!(transfer_b.total, dec!(40));
    }

    #[test]
    fn test_tables_are_referentially_transparent() {
        let f = filtered_fixture();
        assert_eq!(rank_by_institution(&f), rank_by_institution(&f));
        assert_eq!(
            trend_by_period_institution(&f),
            trend_by_period_institution(&f)
        );
        assert_eq!(
            comparison_by_category_institution(&f),
            comparison_by_category_institution(&f)
        );
    }
}
