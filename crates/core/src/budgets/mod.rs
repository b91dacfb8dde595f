//! Budgets module - period handling and budget evaluation.

mod budgets_model;
mod budgets_service;
mod budgets_traits;

#[cfg(test)]
mod budgets_service_tests;

pub use budgets_model::{evaluate, round_percent, BudgetSnapshot, CategoryUsage, Period, TotalUsage};
pub use budgets_service::BudgetService;
pub use budgets_traits::BudgetServiceTrait;
