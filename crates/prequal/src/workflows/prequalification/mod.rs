//! Loan pre-qualification and offer generation.
//!
//! A submitted form flows through five pure stages: the normalizer parses raw text into an
//! [`ApplicantProfile`], the eligibility rules decide whether the applicant qualifies, the
//! offer table sizes up to three tiers, each tier is amortized, and the assembler packages
//! the outcome as a [`PreQualificationResult`]. Nothing here performs I/O except
//! [`BatchIntake`], which only reads its CSV input.

pub mod assembler;
pub mod batch;
pub mod domain;
pub mod evaluation;
pub mod normalizer;
pub mod offers;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use assembler::{
    assemble, OfferSelection, PreQualificationResult, QualificationDecision, SelectionError,
    NO_VIABLE_OFFERS_MESSAGE,
};
pub use batch::{BatchEntry, BatchIntake, BatchIntakeError};
pub use domain::{ApplicantProfile, CreditScoreBand, EmploymentStatus, PreQualificationForm};
pub use evaluation::{
    EligibilityConfig, EligibilityEvaluator, EligibilityOutcome, EligibilityRule,
    RejectionReason, RuleCheck, Verdict,
};
pub use normalizer::{normalize_form, ApplicantField, ValidationError};
pub use offers::{generate_offers, LoanOffer, OfferPolicy, OfferTier, PricingBand};
pub use router::{prequalification_router, OfferSelectionRequest};
pub use service::{PreQualificationError, PreQualificationService};
