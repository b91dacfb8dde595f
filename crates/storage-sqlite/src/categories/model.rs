//! Database models for categories.
//!
//! Amounts are stored as TEXT and parsed to `Decimal` at the boundary to
//! avoid floating-point drift in percentage computations.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_stored_decimal;

/// Database model for categories
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub budget_amount: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new category
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategoryDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub budget_amount: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<CategoryDB> for spendwise_core::categories::Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            budget_amount: parse_stored_decimal(&db.budget_amount, "budget_amount"),
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
