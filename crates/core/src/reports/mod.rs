//! Reports module - presentation-agnostic summaries for dashboard and PDF.

mod reports_model;
mod reports_service;

#[cfg(test)]
mod reports_service_tests;

pub use reports_model::{assemble, ExpenseLine, ReportModel, ReportRow, ReportTotal};
pub use reports_service::{ReportService, ReportServiceTrait};
