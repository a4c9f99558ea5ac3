use super::super::domain::ApplicantProfile;
use super::policy::{OfferPolicy, OfferTier};

/// A tier that survived its inclusion checks, before payments are computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateTier {
    pub tier: OfferTier,
    pub loan_amount: f64,
    pub repayment_term_months: u32,
    pub interest_rate_apr: f64,
}

/// Size and price every tier the applicant is eligible for, in table order.
pub fn candidate_tiers(policy: &OfferPolicy, profile: &ApplicantProfile) -> Vec<CandidateTier> {
    let band = profile.credit_score_band.pricing_band();

    policy
        .tiers
        .iter()
        .filter_map(|rule| {
            let loan_amount = rule.loan_amount(profile.requested_amount);
            if !rule.admits(profile, loan_amount) {
                return None;
            }

            let terms = rule.terms_for(band);
            Some(CandidateTier {
                tier: rule.tier,
                loan_amount,
                repayment_term_months: terms.repayment_term_months,
                interest_rate_apr: terms.interest_rate_apr,
            })
        })
        .collect()
}
