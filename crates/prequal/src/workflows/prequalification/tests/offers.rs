use super::common::*;

use crate::workflows::prequalification::domain::CreditScoreBand;
use crate::workflows::prequalification::offers::{
    candidate_tiers, generate_offers, OfferPolicy, OfferTier, PricingBand,
};

fn terms(band: CreditScoreBand) -> Vec<(OfferTier, u32, f64)> {
    let mut applicant = profile();
    applicant.credit_score_band = band;
    candidate_tiers(&OfferPolicy::default(), &applicant)
        .into_iter()
        .map(|tier| (tier.tier, tier.repayment_term_months, tier.interest_rate_apr))
        .collect()
}

#[test]
fn pricing_bands_follow_score_thresholds() {
    assert_eq!(PricingBand::from_score(750), PricingBand::Prime);
    assert_eq!(PricingBand::from_score(700), PricingBand::Prime);
    assert_eq!(PricingBand::from_score(699), PricingBand::NearPrime);
    assert_eq!(PricingBand::from_score(650), PricingBand::NearPrime);
    assert_eq!(PricingBand::from_score(649), PricingBand::Subprime);
    assert_eq!(
        CreditScoreBand::Unknown.pricing_band(),
        PricingBand::Subprime
    );
}

#[test]
fn table_prices_each_band() {
    assert_eq!(
        terms(CreditScoreBand::Excellent),
        vec![
            (OfferTier::Full, 24, 12.0),
            (OfferTier::Moderate, 18, 10.0),
            (OfferTier::Conservative, 12, 8.0),
        ]
    );
    assert_eq!(
        terms(CreditScoreBand::Good),
        vec![
            (OfferTier::Full, 18, 18.0),
            (OfferTier::Moderate, 15, 15.0),
            (OfferTier::Conservative, 12, 12.0),
        ]
    );
    for band in [
        CreditScoreBand::Fair,
        CreditScoreBand::Poor,
        CreditScoreBand::Unknown,
    ] {
        assert_eq!(
            terms(band),
            vec![
                (OfferTier::Full, 12, 24.0),
                (OfferTier::Moderate, 12, 20.0),
                (OfferTier::Conservative, 9, 16.0),
            ]
        );
    }
}

#[test]
fn reference_scenario_produces_three_offers() {
    let offers = generate_offers(&OfferPolicy::default(), &profile());

    let expected = [
        (10_000.0, 24, 12.0, 470.73),
        (7_500.0, 18, 10.0, 450.43),
        (5_000.0, 12, 8.0, 434.94),
    ];
    assert_eq!(offers.len(), expected.len());

    for (offer, (amount, months, apr, payment)) in offers.iter().zip(expected) {
        assert_eq!(offer.loan_amount(), amount);
        assert_eq!(offer.repayment_term_months(), months);
        assert_eq!(offer.interest_rate_apr(), apr);
        assert!(
            (offer.monthly_payment() - payment).abs() < 0.01,
            "payment {} for {amount}",
            offer.monthly_payment()
        );
        assert!((offer.monthly_payment() - reference_payment(amount, apr, months)).abs() < 1e-6);
        assert_offer_invariants(offer);
    }
}

#[test]
fn full_tier_requires_affordable_request() {
    let mut applicant = profile();
    applicant.annual_income = 19_999.0;
    applicant.requested_amount = 10_000.0;

    let tiers: Vec<_> = candidate_tiers(&OfferPolicy::default(), &applicant)
        .into_iter()
        .map(|tier| tier.tier)
        .collect();
    assert_eq!(tiers, vec![OfferTier::Moderate, OfferTier::Conservative]);

    applicant.annual_income = 20_000.0;
    let tiers = candidate_tiers(&OfferPolicy::default(), &applicant);
    assert_eq!(tiers.first().map(|tier| tier.tier), Some(OfferTier::Full));
}

#[test]
fn reduced_tiers_respect_the_minimum_amount() {
    let mut applicant = profile();
    applicant.requested_amount = 2_000.0;

    let amounts: Vec<_> = candidate_tiers(&OfferPolicy::default(), &applicant)
        .into_iter()
        .map(|tier| (tier.tier, tier.loan_amount))
        .collect();
    assert_eq!(
        amounts,
        vec![
            (OfferTier::Full, 2_000.0),
            (OfferTier::Moderate, 1_500.0),
            (OfferTier::Conservative, 1_000.0),
        ]
    );

    applicant.requested_amount = 1_999.0;
    let tiers: Vec<_> = candidate_tiers(&OfferPolicy::default(), &applicant)
        .into_iter()
        .map(|tier| tier.tier)
        .collect();
    assert_eq!(tiers, vec![OfferTier::Full, OfferTier::Moderate]);
}

#[test]
fn full_tier_has_no_minimum_amount() {
    let mut applicant = profile();
    applicant.annual_income = 20_000.0;
    applicant.requested_amount = 800.0;

    let offers = generate_offers(&OfferPolicy::default(), &applicant);
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].tier(), OfferTier::Full);
    assert_eq!(offers[0].loan_amount(), 800.0);
}

#[test]
fn zero_rate_policy_spreads_principal_evenly() {
    let mut policy = OfferPolicy::default();
    for rule in &mut policy.tiers {
        rule.prime.interest_rate_apr = 0.0;
    }

    let offers = generate_offers(&policy, &profile());
    assert_eq!(offers.len(), 3);
    for offer in &offers {
        assert_eq!(
            offer.monthly_payment(),
            offer.loan_amount() / offer.repayment_term_months() as f64
        );
        assert_offer_invariants(offer);
    }
}

#[test]
fn offers_descend_by_amount_across_request_sizes() {
    let policy = OfferPolicy::default();
    let mut applicant = profile();
    applicant.annual_income = 90_000.0;

    for requested in [500.0, 999.0, 1_333.0, 1_334.0, 2_000.0, 45_000.0, 100_000.0] {
        applicant.requested_amount = requested;
        let offers = generate_offers(&policy, &applicant);
        for pair in offers.windows(2) {
            assert!(pair[0].loan_amount() > pair[1].loan_amount());
        }
        offers.iter().for_each(assert_offer_invariants);
    }
}
