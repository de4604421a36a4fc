//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and balance operations
//! - `operation`: Operation records parsed from scripts
//! - `error`: Error types for the bank ledger

pub mod account;
pub mod error;
pub mod operation;

pub use account::{Account, AccountNumber};
pub use error::BankError;
pub use operation::{OpType, OperationRecord};
