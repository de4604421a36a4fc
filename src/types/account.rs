//! Account types for the bank ledger
//!
//! This module defines the Account structure and the balance operations
//! that are allowed to mutate it.

use crate::types::BankError;
use rust_decimal::Decimal;

/// Account number identifier
///
/// Account numbers are strings in the format `ACC` followed by a numeric
/// sequence (e.g. "ACC1001"). They are minted by the [`Ledger`] and never
/// reused.
///
/// [`Ledger`]: crate::core::Ledger
pub type AccountNumber = String;

/// A single bank account
///
/// Holds the account's identity (number, holder name, type label) and its
/// current balance. The balance is deliberately private: it can only change
/// through [`deposit`], [`withdraw`], and [`transfer`], each of which
/// preserves the invariant that the balance never goes negative.
///
/// [`deposit`]: Account::deposit
/// [`withdraw`]: Account::withdraw
/// [`transfer`]: Account::transfer
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique account number, immutable after creation
    number: AccountNumber,

    /// Name of the account holder
    holder_name: String,

    /// Account type label (e.g. "Savings", "Checking", "Current")
    ///
    /// Free-form at this layer; membership in the known set is a validator
    /// concern that callers may apply before opening an account.
    account_type: String,

    /// Current balance, always >= 0
    balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `number` - The account number assigned by the ledger
    /// * `holder_name` - Name of the account holder
    /// * `account_type` - Account type label
    pub fn new(
        number: impl Into<AccountNumber>,
        holder_name: impl Into<String>,
        account_type: impl Into<String>,
    ) -> Self {
        Account {
            number: number.into(),
            holder_name: holder_name.into(),
            account_type: account_type.into(),
            balance: Decimal::ZERO,
        }
    }

    /// The account number
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The account holder's name
    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// The account type label
    pub fn account_type(&self) -> &str {
        &self.account_type
    }

    /// The current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit funds into this account
    ///
    /// Adds the amount to the balance using checked arithmetic. Amounts that
    /// are zero or negative are rejected and the balance is left unchanged.
    /// No upper bound is enforced at this layer; the validator's per-deposit
    /// limit is a separate, optional check applied by callers.
    ///
    /// # Errors
    ///
    /// * [`BankError::InvalidAmount`] - The amount is zero or negative
    /// * [`BankError::ArithmeticOverflow`] - Adding the amount would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", &self.number))?;

        Ok(())
    }

    /// Withdraw funds from this account
    ///
    /// Subtracts the amount from the balance using checked arithmetic.
    /// Fails without touching the balance if the amount is zero or negative,
    /// or if it exceeds the current balance.
    ///
    /// # Errors
    ///
    /// * [`BankError::InvalidAmount`] - The amount is zero or negative
    /// * [`BankError::InsufficientFunds`] - The amount exceeds the balance
    /// * [`BankError::ArithmeticUnderflow`] - Subtracting would underflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        if amount > self.balance {
            return Err(BankError::insufficient_funds(
                &self.number,
                self.balance,
                amount,
            ));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_underflow("withdraw", &self.number))?;

        Ok(())
    }

    /// Transfer funds from this account into another
    ///
    /// Debit before credit: the withdrawal from this account happens first,
    /// and only if it succeeds is the target credited. A failed withdrawal
    /// performs no deposit, so a failed transfer leaves both balances exactly
    /// as they were. The deposit cannot fail for an amount the withdrawal
    /// just accepted.
    ///
    /// # Errors
    ///
    /// Returns the withdrawal's error if the debit fails; see [`withdraw`].
    ///
    /// [`withdraw`]: Account::withdraw
    pub fn transfer(&mut self, target: &mut Account, amount: Decimal) -> Result<(), BankError> {
        self.withdraw(amount)?;
        target.deposit(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn account() -> Account {
        Account::new("ACC1001", "Alice Smith", "Savings")
    }

    #[test]
    fn test_new_account_has_zero_balance() {
        let account = account();

        assert_eq!(account.number(), "ACC1001");
        assert_eq!(account.holder_name(), "Alice Smith");
        assert_eq!(account.account_type(), "Savings");
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut account = account();

        // Deposit 100.50
        let result = account.deposit(Decimal::new(10050, 2));
        assert!(result.is_ok());
        assert_eq!(account.balance(), Decimal::new(10050, 2));
    }

    #[test]
    fn test_deposit_multiple_times_accumulates() {
        let mut account = account();

        account.deposit(Decimal::new(10000, 2)).unwrap();
        account.deposit(Decimal::new(2550, 2)).unwrap();
        account.deposit(Decimal::new(50, 2)).unwrap();

        assert_eq!(account.balance(), Decimal::new(12600, 2));
    }

    #[test]
    fn test_deposit_zero_is_rejected() {
        let mut account = account();

        let result = account.deposit(Decimal::ZERO);

        assert!(matches!(
            result.unwrap_err(),
            BankError::InvalidAmount { .. }
        ));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_negative_is_rejected() {
        let mut account = account();
        account.deposit(Decimal::new(5000, 2)).unwrap();

        let result = account.deposit(Decimal::new(-100, 2));

        assert!(matches!(
            result.unwrap_err(),
            BankError::InvalidAmount { .. }
        ));
        // Balance unchanged
        assert_eq!(account.balance(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_deposit_has_no_upper_bound() {
        let mut account = account();

        // Above the validator's per-deposit limit; the account itself
        // accepts any positive amount.
        let result = account.deposit(Decimal::new(2_000_000, 0));

        assert!(result.is_ok());
        assert_eq!(account.balance(), Decimal::new(2_000_000, 0));
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut account = account();
        account.deposit(Decimal::new(10000, 2)).unwrap();

        let result = account.withdraw(Decimal::new(2550, 2));

        assert!(result.is_ok());
        assert_eq!(account.balance(), Decimal::new(7450, 2));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = account();
        account.deposit(Decimal::new(10000, 2)).unwrap();

        let result = account.withdraw(Decimal::new(10000, 2));

        assert!(result.is_ok());
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = account();
        account.deposit(Decimal::new(5000, 2)).unwrap();

        let result = account.withdraw(Decimal::new(10000, 2));

        assert!(matches!(
            result.unwrap_err(),
            BankError::InsufficientFunds { .. }
        ));
        // Balance unchanged
        assert_eq!(account.balance(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_withdraw_zero_is_rejected() {
        let mut account = account();
        account.deposit(Decimal::new(5000, 2)).unwrap();

        let result = account.withdraw(Decimal::ZERO);

        assert!(matches!(
            result.unwrap_err(),
            BankError::InvalidAmount { .. }
        ));
        assert_eq!(account.balance(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_withdraw_negative_is_rejected() {
        let mut account = account();
        account.deposit(Decimal::new(5000, 2)).unwrap();

        let result = account.withdraw(Decimal::new(-100, 2));

        assert!(matches!(
            result.unwrap_err(),
            BankError::InvalidAmount { .. }
        ));
        assert_eq!(account.balance(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_withdraw_from_empty_account() {
        let mut account = account();

        let result = account.withdraw(Decimal::new(100, 2));

        assert!(matches!(
            result.unwrap_err(),
            BankError::InsufficientFunds { .. }
        ));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut source = Account::new("ACC1001", "Alice Smith", "Savings");
        let mut target = Account::new("ACC1002", "Bob Jones", "Checking");
        source.deposit(Decimal::new(10000, 2)).unwrap();

        let result = source.transfer(&mut target, Decimal::new(4000, 2));

        assert!(result.is_ok());
        assert_eq!(source.balance(), Decimal::new(6000, 2));
        assert_eq!(target.balance(), Decimal::new(4000, 2));
    }

    #[test]
    fn test_transfer_insufficient_funds_leaves_both_unchanged() {
        let mut source = Account::new("ACC1001", "Alice Smith", "Savings");
        let mut target = Account::new("ACC1002", "Bob Jones", "Checking");
        source.deposit(Decimal::new(6000, 2)).unwrap();
        target.deposit(Decimal::new(4000, 2)).unwrap();

        let result = source.transfer(&mut target, Decimal::new(100000, 2));

        assert!(matches!(
            result.unwrap_err(),
            BankError::InsufficientFunds { .. }
        ));
        // No partial effect
        assert_eq!(source.balance(), Decimal::new(6000, 2));
        assert_eq!(target.balance(), Decimal::new(4000, 2));
    }

    #[test]
    fn test_transfer_invalid_amount_leaves_both_unchanged() {
        let mut source = Account::new("ACC1001", "Alice Smith", "Savings");
        let mut target = Account::new("ACC1002", "Bob Jones", "Checking");
        source.deposit(Decimal::new(6000, 2)).unwrap();

        let result = source.transfer(&mut target, Decimal::ZERO);

        assert!(matches!(
            result.unwrap_err(),
            BankError::InvalidAmount { .. }
        ));
        assert_eq!(source.balance(), Decimal::new(6000, 2));
        assert_eq!(target.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_balance_never_negative_after_mixed_operations() {
        let mut account = account();

        account.deposit(Decimal::new(10000, 2)).unwrap();
        let _ = account.withdraw(Decimal::new(20000, 2));
        account.withdraw(Decimal::new(2500, 2)).unwrap();
        let _ = account.deposit(Decimal::new(-500, 2));
        let _ = account.withdraw(Decimal::new(10000, 2));

        assert!(account.balance() >= Decimal::ZERO);
        assert_eq!(account.balance(), Decimal::new(7500, 2));
    }
}
