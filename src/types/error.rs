//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while applying banking
//! operations or processing operation scripts. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Script Errors**: Malformed CSV, unknown operations, missing fields
//! - **Operation Errors**: Insufficient funds, unknown accounts, rejected
//!   amounts, failed input validation
//! - **Arithmetic Errors**: Overflow, underflow in balance calculations

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
///
/// Each variant carries enough context to diagnose the failure. A failed
/// operation never leaves a partially mutated balance behind: the error is
/// produced before any state changes, or by a checked arithmetic step that
/// aborts the whole operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// File not found at the specified path
    ///
    /// Fatal: prevents script processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable: the malformed row is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown operation name in a script row
    ///
    /// Recoverable: the row is skipped.
    #[error("Invalid operation '{op}'")]
    InvalidOperation {
        /// The unrecognized operation string
        op: String,
    },

    /// A script row is missing a field its operation requires
    ///
    /// Recoverable: the row is skipped.
    #[error("{op} operation requires an '{field}' field")]
    MissingField {
        /// The operation name
        op: String,
        /// The missing field name
        field: String,
    },

    /// Amount rejected by an account operation (zero or negative)
    ///
    /// Recoverable: the balance is left unchanged.
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Insufficient funds for a withdrawal or transfer
    ///
    /// Recoverable: the debit is rejected and all balances are unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number of the debited account
        account: String,
        /// Current balance
        balance: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// No account exists with the given number
    ///
    /// Lookup is exact and case-sensitive; recoverable.
    #[error("Account not found: {number}")]
    AccountNotFound {
        /// The account number that was looked up
        number: String,
    },

    /// Source and target of a transfer are the same account
    ///
    /// Recoverable: the transfer is rejected before any debit.
    #[error("Cannot transfer from account {number} to itself")]
    SameAccount {
        /// The account number used on both sides
        number: String,
    },

    /// Input rejected by a validator rule
    ///
    /// Recoverable: the operation is rejected before touching the ledger.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The validator's explanation
        message: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// Recoverable: the operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// Recoverable: the operation is rejected to keep the balance intact.
    #[error("Arithmetic underflow in {operation} for account {account}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Account number
        account: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankError
impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(number: &str) -> Self {
        BankError::AccountNotFound {
            number: number.to_string(),
        }
    }

    /// Create a SameAccount error
    pub fn same_account(number: &str) -> Self {
        BankError::SameAccount {
            number: number.to_string(),
        }
    }

    /// Create a ValidationFailed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        BankError::ValidationFailed {
            message: message.into(),
        }
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation(op: &str) -> Self {
        BankError::InvalidOperation { op: op.to_string() }
    }

    /// Create a MissingField error
    pub fn missing_field(op: &str, field: &str) -> Self {
        BankError::MissingField {
            op: op.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, account: &str) -> Self {
        BankError::ArithmeticUnderflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::file_not_found(
        BankError::FileNotFound { path: "ops.csv".to_string() },
        "File not found: ops.csv"
    )]
    #[case::io_error(
        BankError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        BankError::ParseError { line: Some(7), message: "Invalid field".to_string() },
        "CSV parse error at line 7: Invalid field"
    )]
    #[case::parse_error_without_line(
        BankError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_operation(
        BankError::InvalidOperation { op: "freeze".to_string() },
        "Invalid operation 'freeze'"
    )]
    #[case::missing_field(
        BankError::MissingField { op: "deposit".to_string(), field: "amount".to_string() },
        "deposit operation requires an 'amount' field"
    )]
    #[case::invalid_amount(
        BankError::InvalidAmount { amount: Decimal::new(-500, 2) },
        "Invalid amount: -5.00"
    )]
    #[case::insufficient_funds(
        BankError::InsufficientFunds {
            account: "ACC1001".to_string(),
            balance: Decimal::new(5000, 2),
            requested: Decimal::new(10000, 2),
        },
        "Insufficient funds in account ACC1001: balance 50.00, requested 100.00"
    )]
    #[case::account_not_found(
        BankError::AccountNotFound { number: "ACC9999".to_string() },
        "Account not found: ACC9999"
    )]
    #[case::same_account(
        BankError::SameAccount { number: "ACC1001".to_string() },
        "Cannot transfer from account ACC1001 to itself"
    )]
    #[case::validation_failed(
        BankError::ValidationFailed { message: "Amount cannot be negative!".to_string() },
        "Validation failed: Amount cannot be negative!"
    )]
    #[case::arithmetic_overflow(
        BankError::ArithmeticOverflow { operation: "deposit".to_string(), account: "ACC1001".to_string() },
        "Arithmetic overflow in deposit for account ACC1001"
    )]
    fn test_error_display(#[case] error: BankError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        BankError::insufficient_funds("ACC1001", Decimal::new(5000, 2), Decimal::new(10000, 2)),
        BankError::InsufficientFunds {
            account: "ACC1001".to_string(),
            balance: Decimal::new(5000, 2),
            requested: Decimal::new(10000, 2),
        }
    )]
    #[case::account_not_found(
        BankError::account_not_found("ACC9999"),
        BankError::AccountNotFound { number: "ACC9999".to_string() }
    )]
    #[case::same_account(
        BankError::same_account("ACC1001"),
        BankError::SameAccount { number: "ACC1001".to_string() }
    )]
    #[case::missing_field(
        BankError::missing_field("open", "holder"),
        BankError::MissingField { op: "open".to_string(), field: "holder".to_string() }
    )]
    fn test_helper_functions(#[case] result: BankError, #[case] expected: BankError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BankError = io_error.into();
        assert!(matches!(error, BankError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
