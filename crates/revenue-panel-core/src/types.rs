use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// A single revenue line, as delivered by the ingestion collaborator.
///
/// Immutable once loaded into a [`crate::dataset::RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Accounting year the line belongs to (EXERCICIO)
    pub fiscal_year: i32,
    /// Sub-year reporting interval, e.g. a month or quarter (COMPETENCIA)
    pub period: String,
    /// Entity the revenue is attributed to (INSTITUIÇÃO)
    pub institution: String,
    /// Classification of the revenue line (RECEITA)
    pub revenue_category: String,
    /// Line amount (VALOR)
    pub amount: Money,
}

impl RevenueRecord {
    pub fn new(
        fiscal_year: i32,
        period: impl Into<String>,
        institution: impl Into<String>,
        revenue_category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            fiscal_year,
            period: period.into(),
            institution: institution.into(),
            revenue_category: revenue_category.into(),
            amount,
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
