//! Expense domain models.

use chrono::{NaiveDateTime, ParseError as ChronoParseError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{DEFAULT_DESCRIPTION, MAX_AMOUNT_INPUT_LEN};
use crate::errors::ValidationError;

/// Errors specific to expense operations.
#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Invalid expense data: {0}")]
    InvalidData(String),

    #[error("Expense not found: {0}")]
    NotFound(String),
}

/// Domain model representing a recorded expense.
///
/// Immutable value record: expenses are append-only, there is no edit or
/// delete operation. `amount > 0` is guaranteed by the ingestion boundary
/// and never re-checked by the calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    /// Calendar date-time the expense is attributed to. Defaults to "now"
    /// at ingestion; the date-picker flow supplies it explicitly.
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    /// The expense description, or the placeholder when none was recorded.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// Input model for recording a new expense.
///
/// `amount` carries the raw user text (`"12,34"`); it is normalized by
/// [`parse_amount_input`] during validation. `timestamp` accepts ISO 8601
/// date-time or `YYYY-MM-DD`; when absent the service stamps "now".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub amount: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewExpense {
    /// Validates the new expense data, returning the normalized amount.
    pub fn validate(&self) -> std::result::Result<Decimal, ValidationError> {
        let amount = parse_amount_input(&self.amount)?;
        if let Some(ts) = &self.timestamp {
            parse_timestamp(ts).map_err(ValidationError::DateTimeParse)?;
        }
        Ok(amount)
    }

    /// The explicit timestamp, parsed, when one was supplied.
    pub fn parsed_timestamp(
        &self,
    ) -> std::result::Result<Option<NaiveDateTime>, ChronoParseError> {
        match &self.timestamp {
            Some(ts) => parse_timestamp(ts).map(Some),
            None => Ok(None),
        }
    }
}

fn parse_timestamp(value: &str) -> std::result::Result<NaiveDateTime, ChronoParseError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").or_else(|_| {
        // Midnight stand-in; only the date part is ever bucketed
        chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
    })
}

/// Normalizes raw amount text into a positive `Decimal`.
///
/// Mirrors the app's input mask: digits with a single `,` (or `.`) decimal
/// separator, at most 2 fractional digits, at most [`MAX_AMOUNT_INPUT_LEN`]
/// characters. Currency symbols, grouping, and whitespace are stripped
/// rather than rejected. Non-positive results are rejected so they can
/// never reach the expense collection.
pub fn parse_amount_input(raw: &str) -> std::result::Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()));
    }
    if trimmed.len() > MAX_AMOUNT_INPUT_LEN {
        return Err(ValidationError::InvalidInput(format!(
            "amount input exceeds {} characters",
            MAX_AMOUNT_INPUT_LEN
        )));
    }

    // Keep digits and decimal separators only, comma normalized to dot
    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::InvalidInput(format!(
            "no digits in amount input '{}'",
            trimmed
        )));
    }
    if cleaned.matches('.').count() > 1 {
        return Err(ValidationError::InvalidInput(format!(
            "multiple decimal separators in '{}'",
            trimmed
        )));
    }
    if let Some((_, frac)) = cleaned.split_once('.') {
        if frac.len() > 2 {
            return Err(ValidationError::InvalidInput(format!(
                "more than 2 decimal places in '{}'",
                trimmed
            )));
        }
    }

    let amount = Decimal::from_str(&cleaned)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    Ok(amount)
}
