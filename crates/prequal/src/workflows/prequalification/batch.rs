use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use super::assembler::PreQualificationResult;
use super::domain::PreQualificationForm;
use super::normalizer::{ApplicantField, ValidationError};
use super::service::PreQualificationService;

#[derive(Debug)]
pub enum BatchIntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchIntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchIntakeError::Io(err) => write!(f, "failed to read submission export: {}", err),
            BatchIntakeError::Csv(err) => write!(f, "invalid submission CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchIntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchIntakeError::Io(err) => Some(err),
            BatchIntakeError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchIntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchIntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Result for one CSV row. `line` is the 1-based line in the source file.
#[derive(Debug)]
pub struct BatchEntry {
    pub line: u64,
    pub outcome: Result<PreQualificationResult, ValidationError>,
}

/// Pre-qualifies a CSV export of form submissions.
///
/// Expected headers match the form field names. Rows failing validation are reported in
/// place and do not stop the batch; malformed CSV does.
pub struct BatchIntake;

impl BatchIntake {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        service: &PreQualificationService,
    ) -> Result<Vec<BatchEntry>, BatchIntakeError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, service)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        service: &PreQualificationService,
    ) -> Result<Vec<BatchEntry>, BatchIntakeError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let columns = FormColumns::locate(csv_reader.headers()?);
        let mut entries = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let form = columns.form(&record);

            let outcome = service.prequalify(&form);
            if let Err(err) = &outcome {
                warn!(line, error = %err, "skipping invalid pre-qualification row");
            }

            entries.push(BatchEntry { line, outcome });
        }

        Ok(entries)
    }
}

/// Header positions of the form fields. Cells are handed to the normalizer as raw text.
struct FormColumns {
    annual_income: Option<usize>,
    employment_status: Option<usize>,
    monthly_debts: Option<usize>,
    requested_amount: Option<usize>,
    credit_score_band: Option<usize>,
}

impl FormColumns {
    fn locate(headers: &StringRecord) -> Self {
        let position = |field: ApplicantField| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(field.key()))
        };

        Self {
            annual_income: position(ApplicantField::AnnualIncome),
            employment_status: position(ApplicantField::EmploymentStatus),
            monthly_debts: position(ApplicantField::MonthlyDebts),
            requested_amount: position(ApplicantField::RequestedAmount),
            credit_score_band: position(ApplicantField::CreditScoreBand),
        }
    }

    fn form(&self, record: &StringRecord) -> PreQualificationForm {
        let cell = |column: Option<usize>| {
            column
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .to_string()
        };

        PreQualificationForm {
            annual_income: cell(self.annual_income),
            employment_status: cell(self.employment_status),
            monthly_debts: cell(self.monthly_debts),
            requested_amount: cell(self.requested_amount),
            credit_score_band: cell(self.credit_score_band),
        }
    }
}
