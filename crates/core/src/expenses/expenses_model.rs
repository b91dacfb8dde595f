//! Expense domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a recorded expense.
///
/// Expenses are immutable once created; the owning user may only delete them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub note: String,
    pub entry_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a new expense.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub category_id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
    /// Defaults to today when omitted.
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
}

impl NewExpense {
    pub fn validate(&self) -> Result<()> {
        if self.category_id.trim().is_empty() {
            return Err(ValidationError::MissingField("categoryId".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Expense amount must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Optional filters for expense listings.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFilters {
    /// Calendar month in `YYYY-MM` form.
    pub period: Option<String>,
    pub category_id: Option<String>,
}
