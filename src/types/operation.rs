//! Operation types for batch script processing
//!
//! This module defines the banking operations that can appear in an
//! operation script, as parsed from CSV rows.

use crate::types::AccountNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Banking operations supported by the script driver
///
/// Each variant corresponds to one row kind in an operation script.
/// `Open` creates an account; the other three mutate existing balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpType {
    /// Open a new account for a holder
    ///
    /// The ledger assigns the next sequential account number and starts
    /// the balance at zero.
    Open,

    /// Credit funds to an existing account
    Deposit,

    /// Debit funds from an existing account
    ///
    /// Requires sufficient balance to succeed.
    Withdraw,

    /// Move funds from a source account to a target account
    ///
    /// Debit before credit; a failed debit leaves both balances unchanged.
    Transfer,
}

/// A single parsed operation from a script row
///
/// Field presence depends on the operation: `open` carries holder and
/// account type, the balance operations carry an account number and amount,
/// and `transfer` additionally carries a target account number. Presence is
/// checked during CSV conversion and re-checked by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    /// The operation to perform
    pub op: OpType,

    /// Account number the operation applies to
    ///
    /// Required for deposit, withdraw, and transfer (the source side).
    /// Absent for open, which mints a fresh number.
    pub account: Option<AccountNumber>,

    /// Target account number for transfers
    pub target: Option<AccountNumber>,

    /// Account holder name (open only)
    pub holder: Option<String>,

    /// Account type label (open only)
    pub account_type: Option<String>,

    /// Amount for deposit, withdraw, and transfer
    pub amount: Option<Decimal>,
}
