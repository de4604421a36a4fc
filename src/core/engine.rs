//! Operation processing engine
//!
//! This module provides the BankEngine that applies parsed operation
//! records to a [`Ledger`], optionally running the input through the
//! validation rules first.
//!
//! Validation is a property of the caller, not of the ledger: the engine
//! can be constructed with validation off, in which case only the ledger's
//! own guard conditions (positive amounts, sufficient funds) apply.

use crate::core::ledger::Ledger;
use crate::core::validation;
use crate::types::{BankError, OpType, OperationRecord};
use rust_decimal::Decimal;

/// Applies operation records to a ledger
///
/// Routes each record to the matching ledger operation. When validation is
/// enabled, the relevant validator rules run first and a failing rule
/// rejects the operation with [`BankError::ValidationFailed`] before the
/// ledger is touched.
pub struct BankEngine {
    ledger: Ledger,
    validate: bool,
}

impl BankEngine {
    /// Create a new BankEngine with an empty ledger
    ///
    /// # Arguments
    ///
    /// * `validate` - Whether to run validator rules before each operation
    pub fn new(validate: bool) -> Self {
        BankEngine {
            ledger: Ledger::new(),
            validate,
        }
    }

    /// The ledger owned by this engine
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Process a single operation record
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field is missing for the operation
    /// - Validation is enabled and a rule rejects the input
    /// - The ledger operation fails (unknown account, insufficient funds,
    ///   rejected amount)
    ///
    /// All errors are recoverable; the ledger is left unchanged by a failed
    /// operation and the caller may continue with the next record.
    pub fn process(&mut self, record: OperationRecord) -> Result<(), BankError> {
        match record.op {
            OpType::Open => self.process_open(record),
            OpType::Deposit => self.process_deposit(record),
            OpType::Withdraw => self.process_withdraw(record),
            OpType::Transfer => self.process_transfer(record),
        }
    }

    fn process_open(&mut self, record: OperationRecord) -> Result<(), BankError> {
        let holder = record
            .holder
            .ok_or_else(|| BankError::missing_field("open", "holder"))?;
        let account_type = record
            .account_type
            .ok_or_else(|| BankError::missing_field("open", "type"))?;

        if self.validate {
            check(validation::validate_holder_name(&holder))?;
            check(validation::validate_account_type(&account_type))?;
        }

        self.ledger.create_account(holder, account_type);
        Ok(())
    }

    fn process_deposit(&mut self, record: OperationRecord) -> Result<(), BankError> {
        let (number, amount) = balance_op_fields("deposit", &record)?;

        if self.validate {
            check(validation::validate_account_number(number))?;
            check(validation::validate_amount(amount))?;
        }

        self.ledger.deposit(number, amount)
    }

    fn process_withdraw(&mut self, record: OperationRecord) -> Result<(), BankError> {
        let (number, amount) = balance_op_fields("withdraw", &record)?;

        if self.validate {
            check(validation::validate_account_number(number))?;
            check(validation::validate_amount(amount))?;
        }

        self.ledger.withdraw(number, amount)
    }

    fn process_transfer(&mut self, record: OperationRecord) -> Result<(), BankError> {
        let (source, amount) = balance_op_fields("transfer", &record)?;
        let target = record
            .target
            .as_deref()
            .ok_or_else(|| BankError::missing_field("transfer", "target"))?;

        if self.validate {
            check(validation::validate_transfer(source, target))?;
            check(validation::validate_amount(amount))?;
        }

        self.ledger.transfer(source, target, amount)
    }
}

/// Extract the account number and amount a balance operation requires
fn balance_op_fields<'a>(
    op: &str,
    record: &'a OperationRecord,
) -> Result<(&'a str, Decimal), BankError> {
    let number = record
        .account
        .as_deref()
        .ok_or_else(|| BankError::missing_field(op, "account"))?;
    let amount = record
        .amount
        .ok_or_else(|| BankError::missing_field(op, "amount"))?;

    Ok((number, amount))
}

/// Turn a failing validation verdict into an error
fn check(result: validation::ValidationResult) -> Result<(), BankError> {
    if result.is_valid() {
        Ok(())
    } else {
        Err(BankError::validation_failed(result.message()))
    }
}
