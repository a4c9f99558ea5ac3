mod config;
mod policy;
mod rules;

pub use config::EligibilityConfig;
pub use policy::{RejectionReason, Verdict};
pub use rules::{EligibilityRule, RuleCheck};

use super::domain::ApplicantProfile;
use serde::{Deserialize, Serialize};

/// Stateless evaluator applying the eligibility rules in a fixed order.
///
/// Evaluation stops at the first failing rule; later rules are not consulted.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEvaluator {
    config: EligibilityConfig,
}

impl EligibilityEvaluator {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    pub fn evaluate(&self, profile: &ApplicantProfile) -> EligibilityOutcome {
        let mut checks = Vec::with_capacity(EligibilityRule::ordered().len());

        for rule in EligibilityRule::ordered() {
            match rules::apply_rule(rule, profile, &self.config) {
                Ok(notes) => checks.push(RuleCheck {
                    rule,
                    passed: true,
                    notes,
                }),
                Err(reason) => {
                    checks.push(RuleCheck {
                        rule,
                        passed: false,
                        notes: reason.summary(),
                    });
                    return EligibilityOutcome {
                        verdict: Verdict::Rejected { reason },
                        checks,
                    };
                }
            }
        }

        EligibilityOutcome {
            verdict: Verdict::Qualified,
            checks,
        }
    }
}

/// Verdict plus the trail of rules that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub verdict: Verdict,
    pub checks: Vec<RuleCheck>,
}
