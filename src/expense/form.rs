//! The form for submitting an expense and its validation.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::expense::core::{DEFAULT_CATEGORY, NewExpense};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw form data for creating an expense.
///
/// Every field is kept as text so that bad input can be reported to the user
/// instead of being rejected by the extractor. Missing fields are treated as
/// empty strings.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ExpenseForm {
    /// The date of the expense, expected in the format YYYY-MM-DD.
    #[serde(default)]
    pub date: String,
    /// The amount spent.
    #[serde(default)]
    pub amount: String,
    /// The category, "Other" if left blank.
    #[serde(default)]
    pub category: String,
    /// An optional note.
    #[serde(default)]
    pub note: String,
}

/// The reasons an expense form can be rejected.
///
/// The messages are shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The date or amount was left empty.
    #[error("Date and amount are required.")]
    MissingRequiredField,

    /// The amount is not a finite number.
    #[error("Amount must be a number.")]
    InvalidAmount,

    /// The date is not a calendar date in the format YYYY-MM-DD.
    #[error("Date must be a valid date in the format YYYY-MM-DD.")]
    InvalidDate,
}

impl ExpenseForm {
    /// Check the form and turn it into an expense that can be stored.
    ///
    /// Leading and trailing whitespace is removed from every field and an
    /// empty category is replaced with [DEFAULT_CATEGORY].
    ///
    /// # Errors
    /// Returns a:
    /// - [ValidationError::MissingRequiredField] if the date or amount is empty,
    /// - or [ValidationError::InvalidAmount] if the amount is not a finite number,
    /// - or [ValidationError::InvalidDate] if the date is not in the format YYYY-MM-DD.
    pub fn validate(&self) -> Result<NewExpense, ValidationError> {
        let date = self.date.trim();
        let amount = self.amount.trim();

        if date.is_empty() || amount.is_empty() {
            return Err(ValidationError::MissingRequiredField);
        }

        let amount = amount
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or(ValidationError::InvalidAmount)?;

        let date =
            Date::parse(date, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)?;

        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY,
            category => category,
        };

        Ok(NewExpense::new(date, amount)
            .category(category)
            .note(self.note.trim()))
    }
}
