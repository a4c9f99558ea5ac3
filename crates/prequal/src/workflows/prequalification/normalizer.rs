use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, CreditScoreBand, EmploymentStatus, PreQualificationForm};

pub const MIN_REQUESTED_AMOUNT: f64 = 500.0;
pub const MAX_REQUESTED_AMOUNT: f64 = 100_000.0;

/// Form fields, named the way they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantField {
    AnnualIncome,
    EmploymentStatus,
    MonthlyDebts,
    RequestedAmount,
    CreditScoreBand,
}

impl ApplicantField {
    pub const fn key(self) -> &'static str {
        match self {
            Self::AnnualIncome => "annual_income",
            Self::EmploymentStatus => "employment_status",
            Self::MonthlyDebts => "monthly_debts",
            Self::RequestedAmount => "requested_amount",
            Self::CreditScoreBand => "credit_score_band",
        }
    }
}

impl fmt::Display for ApplicantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field-level rejection raised while parsing a submitted form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: ApplicantField },
    #[error("{field} must be a number (found {value:?})")]
    NotANumber { field: ApplicantField, value: String },
    #[error("{field} must not be negative (found {value})")]
    Negative { field: ApplicantField, value: f64 },
    #[error("{field} must be between {min} and {max} (found {value})")]
    OutOfRange {
        field: ApplicantField,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be one of {expected} (found {value:?})")]
    Unrecognized {
        field: ApplicantField,
        value: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> ApplicantField {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Unrecognized { field, .. } => *field,
        }
    }
}

const EMPLOYMENT_CHOICES: &str =
    "full_time, part_time, self_employed, retired, unemployed, student";
const CREDIT_BAND_CHOICES: &str = "750, 680, 620, 550 or 0 (unknown)";

/// Convert raw form text into a validated profile.
///
/// Fields are checked in form order and the first failure is returned.
pub fn normalize_form(form: &PreQualificationForm) -> Result<ApplicantProfile, ValidationError> {
    let annual_income = parse_non_negative(ApplicantField::AnnualIncome, &form.annual_income)?;
    let employment_status = parse_employment_status(&form.employment_status)?;
    let monthly_debts = parse_non_negative(ApplicantField::MonthlyDebts, &form.monthly_debts)?;

    let requested_amount = parse_amount(ApplicantField::RequestedAmount, &form.requested_amount)?;
    if !(MIN_REQUESTED_AMOUNT..=MAX_REQUESTED_AMOUNT).contains(&requested_amount) {
        return Err(ValidationError::OutOfRange {
            field: ApplicantField::RequestedAmount,
            value: requested_amount,
            min: MIN_REQUESTED_AMOUNT,
            max: MAX_REQUESTED_AMOUNT,
        });
    }

    let credit_score_band = parse_credit_band(&form.credit_score_band)?;

    Ok(ApplicantProfile {
        annual_income,
        employment_status,
        monthly_debts,
        requested_amount,
        credit_score_band,
    })
}

fn parse_non_negative(field: ApplicantField, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_amount(field, raw)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Accepts plain decimals plus a leading `$` and `,`/`_` digit grouping.
fn parse_amount(field: ApplicantField, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned
        .chars()
        .filter(|ch| *ch != ',' && *ch != '_')
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

fn parse_employment_status(raw: &str) -> Result<EmploymentStatus, ValidationError> {
    let field = ApplicantField::EmploymentStatus;
    if raw.trim().is_empty() {
        return Err(ValidationError::Missing { field });
    }

    EmploymentStatus::parse(raw).ok_or_else(|| ValidationError::Unrecognized {
        field,
        value: raw.trim().to_string(),
        expected: EMPLOYMENT_CHOICES,
    })
}

fn parse_credit_band(raw: &str) -> Result<CreditScoreBand, ValidationError> {
    let field = ApplicantField::CreditScoreBand;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }

    if trimmed.eq_ignore_ascii_case("unknown") {
        return Ok(CreditScoreBand::Unknown);
    }

    trimmed
        .parse::<u16>()
        .ok()
        .and_then(CreditScoreBand::from_representative_score)
        .ok_or_else(|| ValidationError::Unrecognized {
            field,
            value: trimmed.to_string(),
            expected: CREDIT_BAND_CHOICES,
        })
}
