use std::sync::Arc;

use super::budgets_model::{evaluate, BudgetSnapshot, Period};
use super::budgets_traits::BudgetServiceTrait;
use crate::categories::CategoryRepositoryTrait;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;

/// Service orchestrating budget evaluation over the repositories.
///
/// All arithmetic lives in [`evaluate`]; this service only fetches the
/// inputs and has no side effects.
pub struct BudgetService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService {
            category_repository,
            expense_repository,
        }
    }
}

impl BudgetServiceTrait for BudgetService {
    fn snapshot_for_period(&self, user_id: &str, period: &Period) -> Result<BudgetSnapshot> {
        let categories = self.category_repository.list_for_user(user_id)?;
        let expenses = self.expense_repository.list_for_period(user_id, period)?;
        Ok(evaluate(period, &categories, &expenses))
    }
}
