//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory bank ledger: accounts are created
//! with sequentially minted account numbers, and deposits, withdrawals, and
//! transfers mutate balances under simple guard conditions. A CSV batch
//! driver applies operation scripts to a ledger and writes the final
//! account states.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, OperationRecord, BankError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account ownership, number issuance, and balance
//!     operations
//!   - [`core::validation`] - Pure input validation rules
//!   - [`core::engine`] - Operation routing with optional validation
//! - [`io`] - CSV reading and writing
//! - [`pipeline`] - File-to-output orchestration
//!
//! # Operations
//!
//! The engine supports four operations:
//!
//! - **Open**: Create an account with a fresh `ACC` number and zero balance
//! - **Deposit**: Credit funds to an account (positive amounts only)
//! - **Withdraw**: Debit funds from an account (requires sufficient balance)
//! - **Transfer**: Move funds between two accounts, debit before credit
//!
//! # Invariants
//!
//! - A balance never goes negative; failed operations leave every balance
//!   exactly as it was.
//! - Account numbers are unique, strictly increasing, and never reused.
//! - Validation is optional and separate from the ledger: the validator
//!   functions are pure and never touch ledger state.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{BankEngine, Ledger, ValidationResult};
pub use crate::io::write_accounts_csv;
pub use crate::pipeline::process_file;
pub use crate::types::{Account, AccountNumber, BankError, OpType, OperationRecord};
