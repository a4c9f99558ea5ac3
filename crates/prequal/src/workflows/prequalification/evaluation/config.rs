use serde::{Deserialize, Serialize};

/// Thresholds backing the eligibility rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub minimum_annual_income: f64,
    /// Exclusive upper bound; a ratio equal to this value is rejected.
    pub maximum_debt_to_income_pct: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            minimum_annual_income: 12_000.0,
            maximum_debt_to_income_pct: 50.0,
        }
    }
}
