use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use spendwise_core::budgets::Period;
use spendwise_core::expenses::{Expense, ExpenseFilters, ExpenseRepositoryTrait, NewExpense};
use spendwise_core::Result;

use super::model::{ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list_for_user(&self, for_user_id: &str, filters: &ExpenseFilters) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = expenses::table
            .filter(expenses::user_id.eq(for_user_id))
            .into_boxed();

        if let Some(period_str) = &filters.period {
            let period: Period = period_str.parse()?;
            query = query
                .filter(expenses::entry_date.ge(period.start()))
                .filter(expenses::entry_date.lt(period.end_exclusive()));
        }
        if let Some(category) = &filters.category_id {
            query = query.filter(expenses::category_id.eq(category.clone()));
        }

        let expenses_db = query
            .order((expenses::entry_date.desc(), expenses::created_at.desc()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(expenses_db.into_iter().map(Expense::from).collect())
    }

    fn list_for_period(&self, for_user_id: &str, period: &Period) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let expenses_db = expenses::table
            .filter(expenses::user_id.eq(for_user_id))
            .filter(expenses::entry_date.ge(period.start()))
            .filter(expenses::entry_date.lt(period.end_exclusive()))
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(expenses_db.into_iter().map(Expense::from).collect())
    }

    fn recent_for_user(&self, for_user_id: &str, limit: usize) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let expenses_db = expenses::table
            .filter(expenses::user_id.eq(for_user_id))
            .order((expenses::entry_date.desc(), expenses::created_at.desc()))
            .limit(limit as i64)
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(expenses_db.into_iter().map(Expense::from).collect())
    }

    async fn insert(&self, for_user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        let owner = for_user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let now = Utc::now();
                let new_expense_db = NewExpenseDB {
                    id: Uuid::new_v4().to_string(),
                    user_id: owner,
                    category_id: new_expense.category_id,
                    amount: new_expense.amount.to_string(),
                    note: new_expense.note.unwrap_or_default(),
                    entry_date: new_expense.entry_date.unwrap_or_else(|| now.date_naive()),
                    created_at: now.naive_utc(),
                };

                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn delete(&self, for_user_id: &str, expense_id: &str) -> Result<usize> {
        let owner = for_user_id.to_string();
        let target = expense_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    expenses::table
                        .filter(expenses::user_id.eq(&owner))
                        .filter(expenses::id.eq(&target)),
                )
                .execute(conn)
                .map_err(|e| StorageError::from(e).into())
            })
            .await
    }
}
