//! Offer tier generation and amortized pricing.

pub mod amortization;
mod policy;
mod tiers;

pub use policy::{OfferPolicy, OfferTier, PricingBand, TierRule, TierTerms};
pub use tiers::{candidate_tiers, CandidateTier};

use super::domain::ApplicantProfile;
use serde::Serialize;

/// A priced loan offer. Derived amounts are computed once and cannot be changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanOffer {
    tier: OfferTier,
    loan_amount: f64,
    processing_fee: f64,
    repayment_term_months: u32,
    interest_rate_apr: f64,
    monthly_payment: f64,
    total_repayment: f64,
}

impl LoanOffer {
    pub(crate) fn price(candidate: CandidateTier, processing_fee_rate: f64) -> Self {
        let CandidateTier {
            tier,
            loan_amount,
            repayment_term_months,
            interest_rate_apr,
        } = candidate;

        let processing_fee = amortization::processing_fee(loan_amount, processing_fee_rate);
        let monthly_payment =
            amortization::monthly_payment(loan_amount, interest_rate_apr, repayment_term_months);
        let total_repayment =
            amortization::total_repayment(monthly_payment, repayment_term_months, processing_fee);

        Self {
            tier,
            loan_amount,
            processing_fee,
            repayment_term_months,
            interest_rate_apr,
            monthly_payment,
            total_repayment,
        }
    }

    pub fn tier(&self) -> OfferTier {
        self.tier
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn processing_fee(&self) -> f64 {
        self.processing_fee
    }

    pub fn repayment_term_months(&self) -> u32 {
        self.repayment_term_months
    }

    pub fn interest_rate_apr(&self) -> f64 {
        self.interest_rate_apr
    }

    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    pub fn total_repayment(&self) -> f64 {
        self.total_repayment
    }
}

/// Generate and price every tier the applicant is eligible for.
///
/// Callers are expected to have qualified the applicant first.
pub fn generate_offers(policy: &OfferPolicy, profile: &ApplicantProfile) -> Vec<LoanOffer> {
    candidate_tiers(policy, profile)
        .into_iter()
        .map(|candidate| LoanOffer::price(candidate, policy.processing_fee_rate))
        .collect()
}
