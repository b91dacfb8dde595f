use crate::budgets::budgets_model::{BudgetSnapshot, Period};
use crate::errors::Result;

/// Trait for budget evaluation operations
pub trait BudgetServiceTrait: Send + Sync {
    /// Loads the user's categories and the period's expenses and evaluates
    /// them into a snapshot. Read-only.
    fn snapshot_for_period(&self, user_id: &str, period: &Period) -> Result<BudgetSnapshot>;
}
