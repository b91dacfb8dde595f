//! Report models.
//!
//! A [`ReportModel`] is the single source for both the dashboard and the
//! PDF export. Every numeric value is copied from the snapshot, never
//! recomputed, so the two renderers cannot diverge.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::budgets::BudgetSnapshot;
use crate::expenses::Expense;
use crate::users::User;

/// One category row of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub category_id: String,
    pub name: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub percent_used: Option<Decimal>,
}

/// The aggregate row of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotal {
    pub budget: Decimal,
    pub spent: Decimal,
    pub percent_used: Option<Decimal>,
}

/// A recent expense listed at the bottom of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLine {
    pub entry_date: NaiveDate,
    pub category_name: String,
    pub amount: Decimal,
    pub note: String,
}

/// Structured, presentation-agnostic summary of one user's period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    pub owner_email: String,
    pub period: String,
    pub generated_at: NaiveDateTime,
    pub rows: Vec<ReportRow>,
    pub total: ReportTotal,
    pub recent_expenses: Vec<ExpenseLine>,
}

/// Builds a report from a snapshot and the user's most recent expenses.
/// Pure transformation; no I/O.
///
/// Rows are sorted by `percent_used` descending so the most at-risk
/// categories surface first; rows with an undefined percentage sort last,
/// ties broken by name ascending.
pub fn assemble(user: &User, snapshot: &BudgetSnapshot, recent: &[Expense]) -> ReportModel {
    let mut rows: Vec<ReportRow> = snapshot
        .categories
        .iter()
        .map(|usage| ReportRow {
            category_id: usage.category_id.clone(),
            name: usage.name.clone(),
            budget: usage.budget,
            spent: usage.spent,
            percent_used: usage.percent_used,
        })
        .collect();
    rows.sort_by(|a, b| match (b.percent_used, a.percent_used) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (None, None) => a.name.cmp(&b.name),
    });

    let names: HashMap<&str, &str> = snapshot
        .categories
        .iter()
        .map(|c| (c.category_id.as_str(), c.name.as_str()))
        .collect();
    let recent_expenses = recent
        .iter()
        .map(|e| ExpenseLine {
            entry_date: e.entry_date,
            category_name: names
                .get(e.category_id.as_str())
                .copied()
                .unwrap_or("Uncategorized")
                .to_string(),
            amount: e.amount,
            note: e.note.clone(),
        })
        .collect();

    ReportModel {
        owner_email: user.email.clone(),
        period: snapshot.period.clone(),
        generated_at: Utc::now().naive_utc(),
        rows,
        total: ReportTotal {
            budget: snapshot.total.budget,
            spent: snapshot.total.spent,
            percent_used: snapshot.total.percent_used,
        },
        recent_expenses,
    }
}
