use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicantProfile, EmploymentStatus};
use super::config::EligibilityConfig;
use super::policy::RejectionReason;

/// Eligibility rules in the order they are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityRule {
    MinimumIncome,
    EmploymentRequired,
    DebtToIncome,
}

impl EligibilityRule {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::MinimumIncome,
            Self::EmploymentRequired,
            Self::DebtToIncome,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MinimumIncome => "Minimum income",
            Self::EmploymentRequired => "Employment",
            Self::DebtToIncome => "Debt-to-income",
        }
    }
}

/// Outcome of a single rule, kept so a decision can be audited after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub rule: EligibilityRule,
    pub passed: bool,
    pub notes: String,
}

/// Apply one rule, returning audit notes on success.
pub(crate) fn apply_rule(
    rule: EligibilityRule,
    profile: &ApplicantProfile,
    config: &EligibilityConfig,
) -> Result<String, RejectionReason> {
    match rule {
        EligibilityRule::MinimumIncome => {
            if profile.annual_income >= config.minimum_annual_income {
                Ok(format!(
                    "annual income {:.2} meets minimum {:.2}",
                    profile.annual_income, config.minimum_annual_income
                ))
            } else {
                Err(RejectionReason::InsufficientIncome {
                    minimum_annual_income: config.minimum_annual_income,
                    annual_income: profile.annual_income,
                })
            }
        }
        EligibilityRule::EmploymentRequired => {
            if profile.employment_status == EmploymentStatus::Unemployed {
                Err(RejectionReason::EmploymentRequired)
            } else {
                Ok(format!(
                    "employment status {}",
                    profile.employment_status.key()
                ))
            }
        }
        EligibilityRule::DebtToIncome => {
            let ratio = profile.debt_to_income_pct();
            if ratio < config.maximum_debt_to_income_pct {
                Ok(format!(
                    "debt-to-income {:.1}% below limit {:.1}%",
                    ratio, config.maximum_debt_to_income_pct
                ))
            } else {
                Err(RejectionReason::ExcessiveDebtToIncome {
                    maximum_pct: config.maximum_debt_to_income_pct,
                    actual_pct: ratio,
                })
            }
        }
    }
}
