//! Spendwise Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Spendwise.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod budgets;
pub mod categories;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod notifications;
pub mod reports;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
