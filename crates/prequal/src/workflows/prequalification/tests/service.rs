use super::common::*;

use crate::workflows::prequalification::assembler::{
    assemble, QualificationDecision, SelectionError, NO_VIABLE_OFFERS_MESSAGE,
};
use crate::workflows::prequalification::domain::{CreditScoreBand, EmploymentStatus};
use crate::workflows::prequalification::evaluation::{RejectionReason, Verdict};
use crate::workflows::prequalification::normalizer::ApplicantField;
use crate::workflows::prequalification::offers::OfferTier;
use crate::workflows::prequalification::service::PreQualificationError;

#[test]
fn service_qualifies_reference_applicant() {
    let result = service().evaluate(&profile());

    assert!(result.qualified());
    assert_eq!(result.offers().len(), 3);
    assert_eq!(result.decision(), &QualificationDecision::Qualified);
    assert_eq!(
        result.message(),
        "Great news! We have 3 personalized loan offer(s) for you!"
    );
    assert_eq!(
        result.best_offer().map(|offer| offer.tier()),
        Some(OfferTier::Full)
    );
}

#[test]
fn service_returns_rejections_as_results() {
    let mut applicant = profile();
    applicant.employment_status = EmploymentStatus::Unemployed;

    let result = service().evaluate(&applicant);
    assert!(!result.qualified());
    assert!(result.offers().is_empty());
    assert_eq!(
        result.message(),
        "Employment required for loan qualification."
    );
    assert_eq!(
        result.decision(),
        &QualificationDecision::Ineligible {
            reason: RejectionReason::EmploymentRequired
        }
    );
}

#[test]
fn service_flags_qualified_applicants_without_viable_tiers() {
    let mut applicant = profile();
    applicant.annual_income = 2_000.0;
    applicant.monthly_debts = 0.0;
    applicant.requested_amount = 1_200.0;
    applicant.credit_score_band = CreditScoreBand::Fair;

    let service = service_without_income_floor();
    assert!(service.eligibility(&applicant).verdict.is_qualified());

    let result = service.evaluate(&applicant);
    assert!(!result.qualified());
    assert!(result.offers().is_empty());
    assert_eq!(result.message(), NO_VIABLE_OFFERS_MESSAGE);
    assert_eq!(result.decision(), &QualificationDecision::NoViableOffers);
}

#[test]
fn qualified_requests_of_two_thousand_or_more_always_yield_offers() {
    let service = service();
    for income in [12_000.0, 30_000.0, 250_000.0] {
        for requested in [2_000.0, 6_000.0, 6_001.0, 50_000.0, 100_000.0] {
            for band in CreditScoreBand::ordered() {
                let mut applicant = profile();
                applicant.annual_income = income;
                applicant.monthly_debts = income / 12.0 * 0.49;
                applicant.requested_amount = requested;
                applicant.credit_score_band = band;

                let result = service.evaluate(&applicant);
                assert!(result.qualified(), "income {income} request {requested}");
                assert!((1..=3).contains(&result.offers().len()));
                result.offers().iter().for_each(assert_offer_invariants);
            }
        }
    }
}

#[test]
fn evaluation_is_deterministic() {
    let service = service();
    assert_eq!(service.evaluate(&profile()), service.evaluate(&profile()));
}

#[test]
fn assembler_keeps_rejection_reason() {
    let reason = RejectionReason::ExcessiveDebtToIncome {
        maximum_pct: 50.0,
        actual_pct: 62.5,
    };
    let result = assemble(
        Verdict::Rejected {
            reason: reason.clone(),
        },
        Vec::new(),
    );

    assert_eq!(result.message(), "Debt-to-income ratio too high.");
    assert_eq!(
        result.decision(),
        &QualificationDecision::Ineligible { reason }
    );
}

#[test]
fn prequalify_surfaces_validation_errors() {
    let mut form = form();
    form.requested_amount = "250".to_string();

    let error = service().prequalify(&form).expect_err("form rejected");
    assert_eq!(error.field(), ApplicantField::RequestedAmount);
}

#[test]
fn select_carries_forward_the_chosen_offer() {
    let selection = service().select(&form(), 1).expect("offer selected");

    assert_eq!(selection.tier, OfferTier::Moderate);
    assert_eq!(selection.loan_amount, 7_500.0);
    assert_eq!(selection.repayment_term_months, 18);
    assert_eq!(selection.interest_rate_apr, 10.0);
}

#[test]
fn select_rejects_missing_offers() {
    let error = service().select(&form(), 3).expect_err("index out of range");
    assert!(matches!(
        error,
        PreQualificationError::Selection(SelectionError::OfferOutOfRange {
            index: 3,
            available: 3
        })
    ));

    let mut form = form();
    form.employment_status = "unemployed".to_string();
    let error = service().select(&form, 0).expect_err("unqualified");
    assert!(matches!(
        error,
        PreQualificationError::Selection(SelectionError::NotQualified)
    ));
}
