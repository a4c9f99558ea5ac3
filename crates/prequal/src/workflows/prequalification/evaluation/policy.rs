use serde::{Deserialize, Serialize};

/// Eligibility outcome before any offers are priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    Qualified,
    Rejected { reason: RejectionReason },
}

impl Verdict {
    pub fn is_qualified(&self) -> bool {
        matches!(self, Verdict::Qualified)
    }

    pub fn summary(&self) -> String {
        match self {
            Verdict::Qualified => "eligible for loan offers".to_string(),
            Verdict::Rejected { reason } => reason.summary(),
        }
    }
}

/// Business reasons an applicant does not qualify. These are results, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RejectionReason {
    InsufficientIncome {
        minimum_annual_income: f64,
        annual_income: f64,
    },
    EmploymentRequired,
    ExcessiveDebtToIncome {
        maximum_pct: f64,
        actual_pct: f64,
    },
}

impl RejectionReason {
    /// Applicant-facing message.
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::InsufficientIncome {
                minimum_annual_income,
                ..
            } => format!(
                "Minimum annual income of {} required.",
                whole_dollars(*minimum_annual_income)
            ),
            RejectionReason::EmploymentRequired => {
                "Employment required for loan qualification.".to_string()
            }
            RejectionReason::ExcessiveDebtToIncome { .. } => {
                "Debt-to-income ratio too high.".to_string()
            }
        }
    }
}

fn whole_dollars(amount: f64) -> String {
    let digits = (amount.round().max(0.0) as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}
