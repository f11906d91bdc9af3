use crate::calendar;
use crate::models::EntryKind;
use crate::money::{parse_money_string, MoneyError};
use crate::validation::{validate_transaction_form, FormErrors, TransactionForm};

use chrono::NaiveDate;

use serde::Deserialize;

use thiserror::Error;

/// Represents one row of an entries CSV file
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub typ: EntryKind,

    pub amount: Option<String>,
    pub date: Option<String>,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: amount value missing: {0:?}")]
    NoAmount(InputRecord),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A parsed-but-unvalidated entry, ready for schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub kind: EntryKind,
    pub amount: f64,
    pub date: String,
    pub use_custom_date: bool,
}

/// An entry that passed validation, ready to record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedEntry {
    pub kind: EntryKind,
    pub amount: i64,
    pub date: NaiveDate,
}

impl InputRecord {
    /// Turns a raw record into an entry form.
    ///
    /// The amount column accepts anything [`parse_money_string`] accepts, so
    /// formatted values like `¥15,000` import cleanly. A missing date means
    /// "use today" and is filled with the current Asia/Tokyo date.
    pub fn parse_form(self) -> Result<EntryForm, InputParseError> {
        let raw_amount = self
            .amount
            .clone()
            .ok_or_else(|| InputParseError::NoAmount(self.clone()))?;

        let amount = parse_money_string(&raw_amount)?;

        let (date, use_custom_date) = match self.date {
            Some(date) if !date.trim().is_empty() => (date, true),
            _ => (
                calendar::today_jst().format("%Y-%m-%d").to_string(),
                false,
            ),
        };

        Ok(EntryForm {
            kind: self.typ,
            amount,
            date,
            use_custom_date,
        })
    }
}

impl EntryForm {
    /// Runs the form through schema validation and resolves the entry date,
    /// substituting today (Asia/Tokyo) when no custom date was requested.
    pub fn validate(&self) -> Result<ValidatedEntry, FormErrors> {
        let form = TransactionForm {
            amount: self.amount,
            date: self.date.clone(),
            use_custom_date: self.use_custom_date,
        };

        let validated = validate_transaction_form(&form)?;

        let date = if validated.use_custom_date {
            validated.date
        } else {
            calendar::today_jst()
        };

        Ok(ValidatedEntry {
            kind: self.kind,
            amount: validated.amount,
            date,
        })
    }
}
