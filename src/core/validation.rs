//! Input validation rules
//!
//! Pure, stateless checks of caller-supplied input against format and range
//! rules. None of these functions touch the [`Ledger`]; callers decide
//! whether to consult them before invoking ledger or account operations,
//! and may skip them entirely.
//!
//! Each function checks its rules in order and stops at the first failure;
//! errors are not accumulated.
//!
//! [`Ledger`]: crate::core::Ledger

use rust_decimal::Decimal;

/// Largest amount accepted per transaction.
const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Outcome of a validation check
///
/// An immutable verdict: whether the input passed, plus a human-readable
/// explanation of the first rule that failed (or a confirmation message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    fn pass(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            message: message.into(),
        }
    }

    /// Whether the input passed all rules
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Human-readable explanation of the verdict
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validate an account holder name
///
/// Rules, in order: not empty or whitespace-only; at least 2 characters
/// after trimming; at most 50 characters after trimming; only letters,
/// spaces, hyphens, and apostrophes.
pub fn validate_holder_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return ValidationResult::fail("Account holder name cannot be empty!");
    }

    if trimmed.chars().count() < 2 {
        return ValidationResult::fail("Account holder name must be at least 2 characters long!");
    }

    if trimmed.chars().count() > 50 {
        return ValidationResult::fail("Account holder name cannot exceed 50 characters!");
    }

    let allowed =
        |c: char| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '-' || c == '\'';
    if !trimmed.chars().all(allowed) {
        return ValidationResult::fail(
            "Account holder name can only contain letters, spaces, hyphens, and apostrophes!",
        );
    }

    ValidationResult::pass("Valid name")
}

/// Validate an account type label
///
/// Accepts "savings", "checking", or "current", case-insensitively.
pub fn validate_account_type(account_type: &str) -> ValidationResult {
    let trimmed = account_type.trim();

    if trimmed.is_empty() {
        return ValidationResult::fail("Account type cannot be empty!");
    }

    let lowered = trimmed.to_lowercase();
    if lowered != "savings" && lowered != "checking" && lowered != "current" {
        return ValidationResult::fail(
            "Account type must be 'Savings', 'Checking', or 'Current'!",
        );
    }

    ValidationResult::pass("Valid account type")
}

/// Validate a monetary amount
///
/// Rules, in order: not negative; not zero; at most 1,000,000; at most two
/// decimal places (the amount must equal itself rounded to 2 decimals).
pub fn validate_amount(amount: Decimal) -> ValidationResult {
    if amount < Decimal::ZERO {
        return ValidationResult::fail("Amount cannot be negative!");
    }

    if amount.is_zero() {
        return ValidationResult::fail("Amount must be greater than zero!");
    }

    if amount > MAX_AMOUNT {
        return ValidationResult::fail("Amount cannot exceed $1,000,000 per transaction!");
    }

    if amount.round_dp(2) != amount {
        return ValidationResult::fail("Amount can have maximum 2 decimal places!");
    }

    ValidationResult::pass("Valid amount")
}

/// Validate an account number's format
///
/// Requires exactly `ACC` followed by four ASCII digits. Format only; the
/// number may or may not have been issued by a ledger.
pub fn validate_account_number(number: &str) -> ValidationResult {
    let trimmed = number.trim();

    if trimmed.is_empty() {
        return ValidationResult::fail("Account number cannot be empty!");
    }

    let digits = trimmed.strip_prefix("ACC");
    let well_formed = matches!(
        digits,
        Some(rest) if rest.len() == 4 && rest.bytes().all(|b| b.is_ascii_digit())
    );
    if !well_formed {
        return ValidationResult::fail(
            "Account number must be in format ACC#### (e.g., ACC1001)!",
        );
    }

    ValidationResult::pass("Valid account number")
}

/// Validate a pair of transfer account numbers
///
/// Checks the source format, then the target format, then rejects a
/// transfer where source and target are the same string.
pub fn validate_transfer(source: &str, target: &str) -> ValidationResult {
    let source_check = validate_account_number(source);
    if !source_check.is_valid() {
        return ValidationResult::fail(format!("Source account: {}", source_check.message()));
    }

    let target_check = validate_account_number(target);
    if !target_check.is_valid() {
        return ValidationResult::fail(format!("Target account: {}", target_check.message()));
    }

    if source == target {
        return ValidationResult::fail("Source and target accounts cannot be the same!");
    }

    ValidationResult::pass("Valid transfer accounts")
}
