use tracing::debug;

use super::assembler::{assemble, OfferSelection, PreQualificationResult, SelectionError};
use super::domain::{ApplicantProfile, PreQualificationForm};
use super::evaluation::{EligibilityConfig, EligibilityEvaluator, EligibilityOutcome};
use super::normalizer::{normalize_form, ValidationError};
use super::offers::{generate_offers, OfferPolicy};

/// Service composing the normalizer, eligibility rules, offer table and assembler.
///
/// Holds only immutable configuration, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PreQualificationService {
    evaluator: EligibilityEvaluator,
    policy: OfferPolicy,
}

impl PreQualificationService {
    pub fn new(config: EligibilityConfig, policy: OfferPolicy) -> Self {
        Self {
            evaluator: EligibilityEvaluator::new(config),
            policy,
        }
    }

    pub fn eligibility_config(&self) -> &EligibilityConfig {
        self.evaluator.config()
    }

    pub fn policy(&self) -> &OfferPolicy {
        &self.policy
    }

    /// Rule-by-rule eligibility trail for a profile.
    pub fn eligibility(&self, profile: &ApplicantProfile) -> EligibilityOutcome {
        self.evaluator.evaluate(profile)
    }

    /// Decide and price a validated profile.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> PreQualificationResult {
        let outcome = self.evaluator.evaluate(profile);
        let offers = if outcome.verdict.is_qualified() {
            generate_offers(&self.policy, profile)
        } else {
            Vec::new()
        };

        let result = assemble(outcome.verdict, offers);
        debug!(
            qualified = result.qualified(),
            offers = result.offers().len(),
            decision = ?result.decision(),
            "pre-qualification evaluated"
        );
        result
    }

    /// Parse a raw form and evaluate it.
    pub fn prequalify(
        &self,
        form: &PreQualificationForm,
    ) -> Result<PreQualificationResult, ValidationError> {
        let profile = normalize_form(form)?;
        Ok(self.evaluate(&profile))
    }

    /// Re-evaluate a form server-side and return the chosen offer.
    pub fn select(
        &self,
        form: &PreQualificationForm,
        offer_index: usize,
    ) -> Result<OfferSelection, PreQualificationError> {
        let result = self.prequalify(form)?;
        let selection = result.select_offer(offer_index)?;
        Ok(selection)
    }
}

/// Error raised when a request cannot be quoted.
#[derive(Debug, thiserror::Error)]
pub enum PreQualificationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
