//! Database models for expenses.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_stored_decimal;

/// Database model for expenses
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub note: String,
    pub entry_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Database model for recording a new expense
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::expenses)]
pub struct NewExpenseDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub note: String,
    pub entry_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

// Conversion to domain models
impl From<ExpenseDB> for spendwise_core::expenses::Expense {
    fn from(db: ExpenseDB) -> Self {
        Self {
            amount: parse_stored_decimal(&db.amount, "amount"),
            id: db.id,
            user_id: db.user_id,
            category_id: db.category_id,
            note: db.note,
            entry_date: db.entry_date,
            created_at: db.created_at,
        }
    }
}
