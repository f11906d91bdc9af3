use crate::money::{is_safe_amount, MAX_SAFE_AMOUNT};

use std::fmt;

use chrono::NaiveDate;

use thiserror::Error;

/// Candidate transaction input, as it comes off a form or an import row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub amount: f64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// When false, callers substitute today (Asia/Tokyo) for `date`
    pub use_custom_date: bool,
}

/// A form that passed validation: amount rounded to a whole yen value, date
/// parsed to a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedTransaction {
    pub amount: i64,
    pub date: NaiveDate,
    pub use_custom_date: bool,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("amount must be a valid number")]
    AmountNotANumber,

    #[error("amount must be a positive number")]
    AmountNotPositive,

    #[error("amount {0} exceeds the safe integer bound ({})", MAX_SAFE_AMOUNT)]
    AmountTooLarge(f64),

    #[error("date must use the YYYY-MM-DD format: {0:?}")]
    DateFormat(String),

    #[error("date is not a valid calendar date: {0:?}")]
    DateInvalid(String),
}

impl FieldError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::AmountNotANumber | Self::AmountNotPositive | Self::AmountTooLarge(_) => "amount",
            Self::DateFormat(_) | Self::DateInvalid(_) => "date",
        }
    }
}

/// Validation failure for a whole form: one entry per failed field.
///
/// There is no partial success; a form either validates completely or the
/// caller gets every field error at once.
#[derive(Debug, Clone, PartialEq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {e}", e.field()))
            .collect();

        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Validates a candidate transaction, collecting every field failure.
pub fn validate_transaction_form(
    form: &TransactionForm,
) -> Result<ValidatedTransaction, FormErrors> {
    let mut errors = Vec::new();

    let amount = validate_amount(form.amount, &mut errors);
    let date = validate_date(&form.date, &mut errors);

    match (amount, date) {
        (Some(amount), Some(date)) => Ok(ValidatedTransaction {
            amount,
            date,
            use_custom_date: form.use_custom_date,
        }),
        _ => Err(FormErrors::new(errors)),
    }
}

fn validate_amount(amount: f64, errors: &mut Vec<FieldError>) -> Option<i64> {
    if amount.is_nan() {
        errors.push(FieldError::AmountNotANumber);
        return None;
    }

    if amount <= 0.0 {
        errors.push(FieldError::AmountNotPositive);
        return None;
    }

    if !is_safe_amount(amount) {
        errors.push(FieldError::AmountTooLarge(amount));
        return None;
    }

    // Fractional yen round to the nearest whole amount, half away from zero
    Some(amount.round() as i64)
}

fn validate_date(date: &str, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    if !matches_date_shape(date) {
        errors.push(FieldError::DateFormat(date.to_string()));
        return None;
    }

    // Round-tripping back to the input string rejects shapes chrono would
    // quietly normalize, e.g. out-of-range days
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) if parsed.format("%Y-%m-%d").to_string() == date => Some(parsed),
        _ => {
            errors.push(FieldError::DateInvalid(date.to_string()));
            None
        }
    }
}

fn matches_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();

    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
