use serde::{Deserialize, Deserializer, Serialize};

use super::offers::PricingBand;

/// Applicant form exactly as collected by the presentation layer.
///
/// Every field is kept as raw text; `normalizer::normalize_form` is the only place that
/// interprets it. Numeric JSON values are accepted and converted to their text form so a
/// client may post either `"60000"` or `60000`. Any other JSON value is kept as its JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreQualificationForm {
    #[serde(default, deserialize_with = "raw_field")]
    pub annual_income: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub employment_status: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub monthly_debts: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub requested_amount: String,
    #[serde(default, deserialize_with = "raw_field")]
    pub credit_score_band: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Blank,
    Structured(serde_json::Value),
}

fn raw_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match RawField::deserialize(deserializer)? {
        RawField::Text(value) => value,
        RawField::Integer(value) => value.to_string(),
        RawField::Float(value) => value.to_string(),
        RawField::Flag(value) => value.to_string(),
        RawField::Blank => String::new(),
        // Arrays and objects keep their JSON text so the normalizer rejects them by field.
        RawField::Structured(value) => value.to_string(),
    };
    Ok(raw)
}

/// Employment categories offered on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    FullTime,
    PartTime,
    SelfEmployed,
    Retired,
    Unemployed,
    Student,
}

impl EmploymentStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::SelfEmployed,
            Self::Retired,
            Self::Unemployed,
            Self::Student,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::SelfEmployed => "self_employed",
            Self::Retired => "retired",
            Self::Unemployed => "unemployed",
            Self::Student => "student",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::SelfEmployed => "Self-employed",
            Self::Retired => "Retired",
            Self::Unemployed => "Unemployed",
            Self::Student => "Student",
        }
    }

    /// Matches `full_time`, `full-time`, `Full Time` and similar spellings.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw
            .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
            .to_ascii_lowercase();

        Self::ordered()
            .into_iter()
            .find(|status| status.key() == key)
    }
}

/// Representative credit score picked on the form. Only used to choose pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum CreditScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl CreditScoreBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Good,
            Self::Fair,
            Self::Poor,
            Self::Unknown,
        ]
    }

    pub const fn representative_score(self) -> u16 {
        match self {
            Self::Excellent => 750,
            Self::Good => 680,
            Self::Fair => 620,
            Self::Poor => 550,
            Self::Unknown => 0,
        }
    }

    pub fn from_representative_score(score: u16) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|band| band.representative_score() == score)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent (750)",
            Self::Good => "Good (680)",
            Self::Fair => "Fair (620)",
            Self::Poor => "Poor (550)",
            Self::Unknown => "Unknown",
        }
    }

    pub const fn pricing_band(self) -> PricingBand {
        PricingBand::from_score(self.representative_score())
    }
}

impl TryFrom<u16> for CreditScoreBand {
    type Error = String;

    fn try_from(score: u16) -> Result<Self, Self::Error> {
        Self::from_representative_score(score)
            .ok_or_else(|| format!("{score} is not a recognized credit score band"))
    }
}

impl From<CreditScoreBand> for u16 {
    fn from(band: CreditScoreBand) -> Self {
        band.representative_score()
    }
}

/// Typed applicant data produced by the normalizer and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub annual_income: f64,
    pub employment_status: EmploymentStatus,
    pub monthly_debts: f64,
    pub requested_amount: f64,
    pub credit_score_band: CreditScoreBand,
}

impl ApplicantProfile {
    pub fn monthly_income(&self) -> f64 {
        self.annual_income / 12.0
    }

    /// Monthly debts as a percentage of monthly income.
    ///
    /// Zero income yields `0` without debts and `+inf` with them so the ratio never
    /// becomes NaN.
    pub fn debt_to_income_pct(&self) -> f64 {
        let monthly_income = self.monthly_income();
        if monthly_income <= 0.0 {
            return if self.monthly_debts > 0.0 {
                f64::INFINITY
            } else {
                0.0
            };
        }

        (self.monthly_debts / monthly_income) * 100.0
    }
}
