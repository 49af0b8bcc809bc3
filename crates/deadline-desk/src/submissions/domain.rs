use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage format for deadlines, shared by forms, the API, and the database column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Store-assigned identifier; never reused once a record is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub i64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked regulatory filing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub product_name: String,
    pub country: String,
    pub submission_type: String,
    pub deadline_date: NaiveDate,
}

impl Submission {
    pub fn from_fields(id: SubmissionId, fields: SubmissionFields) -> Self {
        let SubmissionFields {
            product_name,
            country,
            submission_type,
            deadline_date,
        } = fields;

        Self {
            id,
            product_name,
            country,
            submission_type,
            deadline_date,
        }
    }

    pub fn fields(&self) -> SubmissionFields {
        SubmissionFields {
            product_name: self.product_name.clone(),
            country: self.country.clone(),
            submission_type: self.submission_type.clone(),
            deadline_date: self.deadline_date,
        }
    }
}

/// The four business fields of a submission after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFields {
    pub product_name: String,
    pub country: String,
    pub submission_type: String,
    pub deadline_date: NaiveDate,
}

/// Unvalidated input as it arrives from a form post, JSON body, or CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDraft {
    pub product_name: String,
    pub country: String,
    pub submission_type: String,
    pub deadline_date: String,
}

impl SubmissionDraft {
    /// Trim every field and reject blanks before parsing the deadline.
    pub fn validate(&self) -> Result<SubmissionFields, ValidationError> {
        let product_name = required(SubmissionField::ProductName, &self.product_name)?;
        let country = required(SubmissionField::Country, &self.country)?;
        let submission_type = required(SubmissionField::SubmissionType, &self.submission_type)?;
        let deadline_raw = required(SubmissionField::DeadlineDate, &self.deadline_date)?;
        let deadline_date = parse_date(&deadline_raw)?;

        Ok(SubmissionFields {
            product_name,
            country,
            submission_type,
            deadline_date,
        })
    }
}

impl From<&Submission> for SubmissionDraft {
    fn from(submission: &Submission) -> Self {
        Self {
            product_name: submission.product_name.clone(),
            country: submission.country.clone(),
            submission_type: submission.submission_type.clone(),
            deadline_date: format_date(submission.deadline_date),
        }
    }
}

fn required(field: SubmissionField, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionField {
    ProductName,
    Country,
    SubmissionType,
    DeadlineDate,
}

impl SubmissionField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductName => "Product name",
            Self::Country => "Country",
            Self::SubmissionType => "Submission type",
            Self::DeadlineDate => "Deadline date",
        }
    }
}

/// A date string that is not a valid `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid YYYY-MM-DD date")]
pub struct InvalidDate {
    pub value: String,
}

/// Input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    EmptyField(SubmissionField),
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}

/// Parses a strict `YYYY-MM-DD` date. Signed or five-digit years are refused so
/// the stored text column sorts in calendar order.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InvalidDate> {
    let invalid = || InvalidDate {
        value: raw.to_string(),
    };
    let trimmed = raw.trim();
    if !has_iso_shape(trimmed) {
        return Err(invalid());
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) if date.year() >= 1 => Ok(date),
        _ => Err(invalid()),
    }
}

fn has_iso_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
