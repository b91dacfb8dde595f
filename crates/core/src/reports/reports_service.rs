use std::sync::Arc;

use super::reports_model::{assemble, ReportModel};
use crate::budgets::{BudgetServiceTrait, Period};
use crate::constants::REPORT_RECENT_EXPENSES;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::users::User;

/// Trait for report assembly operations
pub trait ReportServiceTrait: Send + Sync {
    fn report_for_period(&self, user: &User, period: &Period) -> Result<ReportModel>;
}

/// Service assembling report models for the dashboard and the PDF export.
pub struct ReportService {
    budget_service: Arc<dyn BudgetServiceTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        budget_service: Arc<dyn BudgetServiceTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        ReportService {
            budget_service,
            expense_repository,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn report_for_period(&self, user: &User, period: &Period) -> Result<ReportModel> {
        let snapshot = self.budget_service.snapshot_for_period(&user.id, period)?;
        let recent = self
            .expense_repository
            .recent_for_user(&user.id, REPORT_RECENT_EXPENSES)?;
        Ok(assemble(user, &snapshot, &recent))
    }
}
