use async_trait::async_trait;

use crate::budgets::Period;
use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseFilters, NewExpense};

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// List a user's expenses, newest entry date first.
    fn list_for_user(&self, user_id: &str, filters: &ExpenseFilters) -> Result<Vec<Expense>>;

    /// Load all of the user's expenses whose entry date falls inside the period.
    fn list_for_period(&self, user_id: &str, period: &Period) -> Result<Vec<Expense>>;

    /// Most recent expenses across all periods, newest first.
    fn recent_for_user(&self, user_id: &str, limit: usize) -> Result<Vec<Expense>>;

    async fn insert(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    async fn delete(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn list_expenses(&self, user_id: &str, filters: &ExpenseFilters) -> Result<Vec<Expense>>;

    /// Record a new expense after validating the amount and the category's
    /// ownership. Rejected input never reaches the store.
    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Expense>;

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}
