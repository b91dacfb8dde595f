//! Budget evaluation models.
//!
//! `evaluate` is the pure core of the application: it turns a user's
//! categories and one period's expenses into a read-only [`BudgetSnapshot`].
//! All percentages in the snapshot are computed here and nowhere else;
//! renderers copy them verbatim.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::constants::{PERCENT_DECIMAL_PLACES, PERIOD_FORMAT};
use crate::errors::{Error, ValidationError};
use crate::expenses::Expense;

/// A calendar month used as the budget evaluation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// The current calendar month (UTC).
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Period {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The month a given date falls in.
    pub fn from_date(date: NaiveDate) -> Self {
        Period {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month.
    pub fn start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is in 1..=12")
    }

    /// First day of the following month.
    pub fn end_exclusive(&self) -> NaiveDate {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).expect("month is in 1..=12")
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start() && date < self.end_exclusive()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").map_err(|_| {
            ValidationError::InvalidInput(format!(
                "'{s}' is not a valid period; expected {PERIOD_FORMAT} form like 2025-08"
            ))
        })?;
        Ok(Period {
            year: date.year(),
            month: date.month(),
        })
    }
}

/// Rounds a percentage to the reporting scale, midpoints away from zero.
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PERCENT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn percent_used(spent: Decimal, budget: Decimal) -> Option<Decimal> {
    if budget > Decimal::ZERO {
        Some(round_percent(spent * Decimal::ONE_HUNDRED / budget))
    } else {
        // Zero budget means "no limit": the percentage is undefined,
        // never a division by zero.
        None
    }
}

/// Per-category usage within a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    pub category_id: String,
    pub name: String,
    pub budget: Decimal,
    pub spent: Decimal,
    /// `None` when the budget is zero.
    pub percent_used: Option<Decimal>,
}

impl CategoryUsage {
    pub fn remaining_amount(&self) -> Decimal {
        self.budget - self.spent
    }

    pub fn remaining_percent(&self) -> Option<Decimal> {
        self.percent_used.map(|used| Decimal::ONE_HUNDRED - used)
    }
}

/// Aggregate usage across all of the user's categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TotalUsage {
    pub budget: Decimal,
    pub spent: Decimal,
    pub percent_used: Option<Decimal>,
}

impl TotalUsage {
    pub fn remaining_amount(&self) -> Decimal {
        self.budget - self.spent
    }

    pub fn remaining_percent(&self) -> Option<Decimal> {
        self.percent_used.map(|used| Decimal::ONE_HUNDRED - used)
    }
}

/// Point-in-time, read-only view of spend versus budget for one period.
/// Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub period: String,
    pub categories: Vec<CategoryUsage>,
    pub total: TotalUsage,
}

/// Computes a [`BudgetSnapshot`] from a user's categories and the expenses
/// recorded in `period`. Pure; assumes amounts are non-negative (enforced at
/// the input boundary) and that `expenses` already belong to the snapshot's
/// user and period.
pub fn evaluate(period: &Period, categories: &[Category], expenses: &[Expense]) -> BudgetSnapshot {
    let mut spent_by_category: HashMap<&str, Decimal> = HashMap::new();
    let mut total_spent = Decimal::ZERO;
    for expense in expenses {
        *spent_by_category
            .entry(expense.category_id.as_str())
            .or_insert(Decimal::ZERO) += expense.amount;
        total_spent += expense.amount;
    }

    let mut total_budget = Decimal::ZERO;
    let mut usages = Vec::with_capacity(categories.len());
    for category in categories {
        let spent = spent_by_category
            .get(category.id.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO);
        total_budget += category.budget_amount;
        usages.push(CategoryUsage {
            category_id: category.id.clone(),
            name: category.name.clone(),
            budget: category.budget_amount,
            spent,
            percent_used: percent_used(spent, category.budget_amount),
        });
    }

    BudgetSnapshot {
        period: period.to_string(),
        categories: usages,
        total: TotalUsage {
            budget: total_budget,
            spent: total_spent,
            percent_used: percent_used(total_spent, total_budget),
        },
    }
}
