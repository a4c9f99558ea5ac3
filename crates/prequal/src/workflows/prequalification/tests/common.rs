use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::prequalification::domain::{
    ApplicantProfile, CreditScoreBand, EmploymentStatus, PreQualificationForm,
};
use crate::workflows::prequalification::evaluation::{EligibilityConfig, EligibilityEvaluator};
use crate::workflows::prequalification::offers::{LoanOffer, OfferPolicy};
use crate::workflows::prequalification::{prequalification_router, PreQualificationService};

pub(super) const TOLERANCE: f64 = 1e-6;

pub(super) fn profile() -> ApplicantProfile {
    ApplicantProfile {
        annual_income: 60_000.0,
        employment_status: EmploymentStatus::FullTime,
        monthly_debts: 500.0,
        requested_amount: 10_000.0,
        credit_score_band: CreditScoreBand::Excellent,
    }
}

pub(super) fn form() -> PreQualificationForm {
    PreQualificationForm {
        annual_income: "60000".to_string(),
        employment_status: "full_time".to_string(),
        monthly_debts: "500".to_string(),
        requested_amount: "10000".to_string(),
        credit_score_band: "750".to_string(),
    }
}

pub(super) fn evaluator() -> EligibilityEvaluator {
    EligibilityEvaluator::new(EligibilityConfig::default())
}

pub(super) fn service() -> PreQualificationService {
    PreQualificationService::default()
}

/// Eligibility without an income floor, so small incomes reach the offer table.
pub(super) fn service_without_income_floor() -> PreQualificationService {
    PreQualificationService::new(
        EligibilityConfig {
            minimum_annual_income: 0.0,
            ..EligibilityConfig::default()
        },
        OfferPolicy::default(),
    )
}

pub(super) fn reference_payment(loan_amount: f64, apr_pct: f64, term_months: u32) -> f64 {
    let rate = apr_pct / 100.0 / 12.0;
    if rate == 0.0 {
        return loan_amount / term_months as f64;
    }
    let growth = (1.0 + rate).powf(term_months as f64);
    loan_amount * rate * growth / (growth - 1.0)
}

pub(super) fn assert_offer_invariants(offer: &LoanOffer) {
    assert_eq!(offer.processing_fee(), offer.loan_amount() * 0.045);
    let expected_total =
        offer.monthly_payment() * offer.repayment_term_months() as f64 + offer.processing_fee();
    assert!((offer.total_repayment() - expected_total).abs() < TOLERANCE);

    let repaid = offer.monthly_payment() * offer.repayment_term_months() as f64;
    if offer.interest_rate_apr() > 0.0 {
        assert!(repaid >= offer.loan_amount());
    } else {
        assert!((repaid - offer.loan_amount()).abs() < TOLERANCE);
    }
}

pub(super) fn router() -> axum::Router {
    prequalification_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
