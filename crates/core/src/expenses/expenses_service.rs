use std::sync::Arc;

use async_trait::async_trait;

use super::expenses_model::{Expense, ExpenseFilters, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::categories::CategoryRepositoryTrait;
use crate::errors::{Error, Result};

/// Service for recording and listing expenses.
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(
        repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        ExpenseService {
            repository,
            category_repository,
        }
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn list_expenses(&self, user_id: &str, filters: &ExpenseFilters) -> Result<Vec<Expense>> {
        self.repository.list_for_user(user_id, filters)
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense> {
        new_expense.validate()?;
        // The referenced category must exist and belong to the same user.
        self.category_repository
            .find_by_id(user_id, &new_expense.category_id)?
            .ok_or_else(|| Error::NotFound(format!("Category {}", new_expense.category_id)))?;
        self.repository.insert(user_id, new_expense).await
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize> {
        let deleted = self.repository.delete(user_id, expense_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Expense {expense_id}")));
        }
        Ok(deleted)
    }
}
