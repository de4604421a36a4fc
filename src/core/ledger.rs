//! Ledger module
//!
//! This module provides the `Ledger` struct which owns all accounts and
//! mints account numbers.
//!
//! The Ledger is responsible for:
//! - Creating accounts with fresh, sequential account numbers
//! - Looking accounts up by exact number
//! - Providing sorted account listings for output
//! - Routing deposit/withdraw/transfer operations to accounts by number

use crate::types::{Account, AccountNumber, BankError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Account numbers start one past this seed, so the first account is ACC1001.
const ACCOUNT_COUNTER_SEED: u32 = 1000;

/// Owns all accounts and the account-number issuance counter
///
/// The Ledger maintains an in-memory map of account numbers to accounts.
/// Numbers are minted from a monotonically increasing counter and are never
/// reused; accounts are never removed. One Ledger instance is expected per
/// process, explicitly constructed and passed to whatever drives it.
pub struct Ledger {
    /// Map of account numbers to accounts
    accounts: HashMap<AccountNumber, Account>,

    /// Counter used to mint the next account number, only ever increases
    account_counter: u32,
}

impl Ledger {
    /// Create a new Ledger with no accounts
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
            account_counter: ACCOUNT_COUNTER_SEED,
        }
    }

    /// Create a new account and return its freshly minted number
    ///
    /// Increments the counter, synthesizes the number as `ACC` followed by
    /// the counter value, and inserts a zero-balance account. No duplicate
    /// check is needed since the number is always freshly minted. Holder
    /// name and account type are stored as given; validating them is the
    /// caller's responsibility (see [`validation`]).
    ///
    /// [`validation`]: crate::core::validation
    ///
    /// # Arguments
    ///
    /// * `holder_name` - Name of the account holder
    /// * `account_type` - Account type label
    ///
    /// # Returns
    ///
    /// The new account's number (e.g. "ACC1001" for the first account)
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        account_type: impl Into<String>,
    ) -> AccountNumber {
        self.account_counter += 1;
        let number = format!("ACC{}", self.account_counter);

        let account = Account::new(number.clone(), holder_name, account_type);
        self.accounts.insert(number.clone(), account);

        number
    }

    /// Look up an account by exact number
    ///
    /// Case-sensitive, exact-string match with no normalization.
    ///
    /// # Returns
    ///
    /// `Some(&Account)` if the number has been issued, `None` otherwise
    pub fn find_account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// Look up an account by exact number for mutation
    pub fn find_account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Get all accounts sorted by account number
    ///
    /// Callers need no particular order; sorting keeps output deterministic.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.number().cmp(b.number()));
        accounts
    }

    /// Number of accounts held by the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Deposit funds into the account with the given number
    ///
    /// # Errors
    ///
    /// * [`BankError::AccountNotFound`] - No account has this number
    /// * Any error from [`Account::deposit`]
    pub fn deposit(&mut self, number: &str, amount: Decimal) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        account.deposit(amount)
    }

    /// Withdraw funds from the account with the given number
    ///
    /// # Errors
    ///
    /// * [`BankError::AccountNotFound`] - No account has this number
    /// * Any error from [`Account::withdraw`]
    pub fn withdraw(&mut self, number: &str, amount: Decimal) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        account.withdraw(amount)
    }

    /// Transfer funds between two accounts identified by number
    ///
    /// Resolves both accounts, then debits the source before crediting the
    /// target. A failed debit leaves both balances unchanged.
    ///
    /// # Errors
    ///
    /// * [`BankError::SameAccount`] - Source and target are the same number
    /// * [`BankError::AccountNotFound`] - Either account is missing
    /// * Any error from [`Account::transfer`]
    pub fn transfer(
        &mut self,
        source: &str,
        target: &str,
        amount: Decimal,
    ) -> Result<(), BankError> {
        // get_disjoint_mut panics on overlapping keys, so this check must
        // come first; it is also a rule in its own right.
        if source == target {
            return Err(BankError::same_account(source));
        }

        let [source_account, target_account] = self.accounts.get_disjoint_mut([source, target]);

        let source_account = source_account.ok_or_else(|| BankError::account_not_found(source))?;
        let target_account = target_account.ok_or_else(|| BankError::account_not_found(target))?;

        source_account.transfer(target_account, amount)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
