//! Assign-form validation for the parent dashboard.
//!
//! The form collects raw strings; this module decides whether they describe a
//! stipend and turns them into an [`AssignRequest`]. The UI only renders the
//! outcome.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::stipend::UNSPECIFIED_CATEGORY;

/// Raw input of the assign form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignForm {
    pub student: String,
    pub amount: String,
    pub category: String,
    /// `datetime-local` input value, e.g. `2026-10-20T14:30`
    pub unlock_date: String,
}

/// A validated assign submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignRequest {
    pub student: String,
    pub amount: f64,
    pub category: String,
    pub unlock_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssignValidationError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Enter a valid amount")]
    InvalidAmount,
    #[error("Enter a valid unlock date")]
    InvalidUnlockDate,
}

impl AssignForm {
    pub fn is_empty(&self) -> bool {
        self.student.is_empty()
            && self.amount.is_empty()
            && self.category.is_empty()
            && self.unlock_date.is_empty()
    }

    pub fn validate(&self) -> Result<AssignRequest, AssignValidationError> {
        if self.student.is_empty()
            || self.amount.is_empty()
            || self.category.is_empty()
            || self.unlock_date.is_empty()
        {
            return Err(AssignValidationError::MissingFields);
        }

        let amount = parse_amount(&self.amount).ok_or(AssignValidationError::InvalidAmount)?;
        let unlock_date =
            parse_unlock_input(&self.unlock_date).ok_or(AssignValidationError::InvalidUnlockDate)?;

        let category = self.category.trim();
        Ok(AssignRequest {
            student: self.student.trim().to_string(),
            amount,
            category: if category.is_empty() {
                UNSPECIFIED_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            unlock_date,
        })
    }
}

/// Parse a strictly positive, finite amount
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Parse a `datetime-local` value in the browser's local time zone
pub fn parse_unlock_input(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}
