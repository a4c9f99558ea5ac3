use serde::{Deserialize, Serialize};

use super::super::domain::ApplicantProfile;

/// Candidate loan sizes offered to a qualified applicant, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferTier {
    Full,
    Moderate,
    Conservative,
}

impl OfferTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Full, Self::Moderate, Self::Conservative]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full amount",
            Self::Moderate => "Moderate",
            Self::Conservative => "Conservative",
        }
    }
}

/// Pricing column selected from the representative credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBand {
    Prime,
    NearPrime,
    Subprime,
}

impl PricingBand {
    pub const fn ordered() -> [Self; 3] {
        [Self::Prime, Self::NearPrime, Self::Subprime]
    }

    /// `>= 700` prime, `650..=699` near-prime, anything lower (including unknown) subprime.
    pub const fn from_score(score: u16) -> Self {
        if score >= 700 {
            Self::Prime
        } else if score >= 650 {
            Self::NearPrime
        } else {
            Self::Subprime
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Prime => "700+",
            Self::NearPrime => "650-699",
            Self::Subprime => "<650",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierTerms {
    pub repayment_term_months: u32,
    pub interest_rate_apr: f64,
}

impl TierTerms {
    pub const fn new(repayment_term_months: u32, interest_rate_apr: f64) -> Self {
        Self {
            repayment_term_months,
            interest_rate_apr,
        }
    }
}

/// One row of the pricing table: how a tier is sized, when it applies and what it costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRule {
    pub tier: OfferTier,
    /// Share of the requested amount lent under this tier.
    pub amount_share: f64,
    /// Smallest amount the tier may offer.
    pub minimum_amount: Option<f64>,
    /// Largest requested amount, as a share of annual income, the tier will lend.
    pub max_income_share: Option<f64>,
    pub prime: TierTerms,
    pub near_prime: TierTerms,
    pub subprime: TierTerms,
}

impl TierRule {
    pub fn terms_for(&self, band: PricingBand) -> TierTerms {
        match band {
            PricingBand::Prime => self.prime,
            PricingBand::NearPrime => self.near_prime,
            PricingBand::Subprime => self.subprime,
        }
    }

    pub fn loan_amount(&self, requested_amount: f64) -> f64 {
        requested_amount * self.amount_share
    }

    pub fn admits(&self, profile: &ApplicantProfile, loan_amount: f64) -> bool {
        let affordable = self
            .max_income_share
            .map(|share| profile.requested_amount <= profile.annual_income * share)
            .unwrap_or(true);
        let above_floor = self
            .minimum_amount
            .map(|minimum| loan_amount >= minimum)
            .unwrap_or(true);

        affordable && above_floor
    }
}

/// Declarative pricing table mapped over candidate tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferPolicy {
    /// Upfront fee as a fraction of the loan amount; not financed.
    pub processing_fee_rate: f64,
    pub tiers: Vec<TierRule>,
}

impl OfferPolicy {
    pub fn tier(&self, tier: OfferTier) -> Option<&TierRule> {
        self.tiers.iter().find(|rule| rule.tier == tier)
    }
}

impl Default for OfferPolicy {
    // The full-amount tier has no minimum amount while the reduced tiers do.
    fn default() -> Self {
        Self {
            processing_fee_rate: 0.045,
            tiers: vec![
                TierRule {
                    tier: OfferTier::Full,
                    amount_share: 1.0,
                    minimum_amount: None,
                    max_income_share: Some(0.5),
                    prime: TierTerms::new(24, 12.0),
                    near_prime: TierTerms::new(18, 18.0),
                    subprime: TierTerms::new(12, 24.0),
                },
                TierRule {
                    tier: OfferTier::Moderate,
                    amount_share: 0.75,
                    minimum_amount: Some(1000.0),
                    max_income_share: None,
                    prime: TierTerms::new(18, 10.0),
                    near_prime: TierTerms::new(15, 15.0),
                    subprime: TierTerms::new(12, 20.0),
                },
                TierRule {
                    tier: OfferTier::Conservative,
                    amount_share: 0.5,
                    minimum_amount: Some(1000.0),
                    max_income_share: None,
                    prime: TierTerms::new(12, 8.0),
                    near_prime: TierTerms::new(12, 12.0),
                    subprime: TierTerms::new(9, 16.0),
                },
            ],
        }
    }
}
