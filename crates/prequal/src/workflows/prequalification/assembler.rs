use serde::{Deserialize, Serialize};

use super::evaluation::{RejectionReason, Verdict};
use super::offers::{LoanOffer, OfferTier};

pub const NO_VIABLE_OFFERS_MESSAGE: &str =
    "Unable to generate loan offers at this time. Please try a different amount.";

/// Why a result looks the way it does.
///
/// `NoViableOffers` marks an applicant who passed every eligibility rule but for whom no
/// tier could be sized. The presentation fields still read as unqualified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QualificationDecision {
    Qualified,
    Ineligible { reason: RejectionReason },
    NoViableOffers,
}

/// Single payload handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreQualificationResult {
    qualified: bool,
    offers: Vec<LoanOffer>,
    message: String,
    decision: QualificationDecision,
}

impl PreQualificationResult {
    pub fn qualified(&self) -> bool {
        self.qualified
    }

    /// Offers ordered by descending loan amount; the first is the best deal.
    pub fn offers(&self) -> &[LoanOffer] {
        &self.offers
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn decision(&self) -> &QualificationDecision {
        &self.decision
    }

    pub fn best_offer(&self) -> Option<&LoanOffer> {
        self.offers.first()
    }

    /// Pick an offer to carry forward into the full application.
    pub fn select_offer(&self, index: usize) -> Result<OfferSelection, SelectionError> {
        if !self.qualified {
            return Err(SelectionError::NotQualified);
        }

        let offer = self
            .offers
            .get(index)
            .ok_or(SelectionError::OfferOutOfRange {
                index,
                available: self.offers.len(),
            })?;

        Ok(OfferSelection {
            tier: offer.tier(),
            loan_amount: offer.loan_amount(),
            repayment_term_months: offer.repayment_term_months(),
            interest_rate_apr: offer.interest_rate_apr(),
            monthly_payment: offer.monthly_payment(),
        })
    }
}

/// Values carried forward once the applicant picks an offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferSelection {
    pub tier: OfferTier,
    pub loan_amount: f64,
    pub repayment_term_months: u32,
    pub interest_rate_apr: f64,
    pub monthly_payment: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no offers are available for an unqualified applicant")]
    NotQualified,
    #[error("offer {index} does not exist ({available} available)")]
    OfferOutOfRange { index: usize, available: usize },
}

/// Combine the eligibility verdict with whatever offers were priced.
pub fn assemble(verdict: Verdict, offers: Vec<LoanOffer>) -> PreQualificationResult {
    match verdict {
        Verdict::Rejected { reason } => PreQualificationResult {
            qualified: false,
            offers: Vec::new(),
            message: reason.summary(),
            decision: QualificationDecision::Ineligible { reason },
        },
        Verdict::Qualified if offers.is_empty() => PreQualificationResult {
            qualified: false,
            offers,
            message: NO_VIABLE_OFFERS_MESSAGE.to_string(),
            decision: QualificationDecision::NoViableOffers,
        },
        Verdict::Qualified => PreQualificationResult {
            qualified: true,
            message: format!(
                "Great news! We have {} personalized loan offer(s) for you!",
                offers.len()
            ),
            offers,
            decision: QualificationDecision::Qualified,
        },
    }
}
