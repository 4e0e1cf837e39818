use crate::error::RevenuePanelError;
use crate::RevenuePanelResult;

// ---------------------------------------------------------------------------
// Canonical column labels
// ---------------------------------------------------------------------------

/// Fiscal year column (accounting year)
pub const FISCAL_YEAR: &str = "EXERCICIO";
/// Reporting period column (sub-year interval)
pub const PERIOD: &str = "COMPETENCIA";
/// Institution column
pub const INSTITUTION: &str = "INSTITUIÇÃO";
/// Revenue category column
pub const REVENUE_CATEGORY: &str = "RECEITA";
/// Line amount column
pub const AMOUNT: &str = "VALOR";

/// Every column a dataset must carry after normalization.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [FISCAL_YEAR, PERIOD, INSTITUTION, REVENUE_CATEGORY, AMOUNT];

/// Canonicalize a raw column label: trim surrounding whitespace, upper-case.
/// Idempotent — applying it twice yields the same label.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Position of each required column within a raw header row.
///
/// Resolution happens once, at load time, before any field is referenced by
/// name. Value parsing stays with the ingestion collaborator; the core only
/// owns the label contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub fiscal_year: usize,
    pub period: usize,
    pub institution: usize,
    pub revenue_category: usize,
    pub amount: usize,
}

impl ColumnMap {
    /// Resolve the required canonical columns against a raw header row.
    ///
    /// Labels are normalized before matching; extra columns are ignored.
    /// Fails naming the first required column that is absent.
    pub fn resolve<S: AsRef<str>>(labels: &[S]) -> RevenuePanelResult<Self> {
        let normalized: Vec<String> = labels
            .iter()
            .map(|l| normalize_label(l.as_ref()))
            .collect();

        let find = |canonical: &str| -> RevenuePanelResult<usize> {
            normalized
                .iter()
                .position(|l| l == canonical)
                .ok_or_else(|| RevenuePanelError::MissingColumn(canonical.to_string()))
        };

        Ok(Self {
            fiscal_year: find(FISCAL_YEAR)?,
            period: find(PERIOD)?,
            institution: find(INSTITUTION)?,
            revenue_category: find(REVENUE_CATEGORY)?,
            amount: find(AMOUNT)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
