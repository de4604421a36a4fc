//! Core business logic module
//!
//! This module contains the core banking components:
//! - `ledger` - Account ownership, number issuance, and balance operations
//! - `validation` - Pure input validation rules
//! - `engine` - Operation record routing with optional validation

pub mod engine;
pub mod ledger;
pub mod validation;

pub use engine::BankEngine;
pub use ledger::Ledger;
pub use validation::ValidationResult;
