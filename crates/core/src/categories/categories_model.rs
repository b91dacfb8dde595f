//! Category domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing an expense category with its monthly budget.
///
/// A zero budget means "no limit": the category is tracked but excluded
/// from percentage and alert calculations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub budget_amount: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new category
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub budget_amount: Decimal,
}

impl NewCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.budget_amount.is_sign_negative() {
            return Err(ValidationError::InvalidInput(
                "Budget amount cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Input model for updating a category; `None` fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub budget_amount: Option<Decimal>,
}

impl CategoryUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingField("name".to_string()).into());
            }
        }
        if let Some(budget) = &self.budget_amount {
            if budget.is_sign_negative() {
                return Err(ValidationError::InvalidInput(
                    "Budget amount cannot be negative".to_string(),
                )
                .into());
            }
        }
        Ok(())
    }
}
