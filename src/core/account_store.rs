//! Account storage module
//!
//! This module provides the `AccountStore` struct which owns every account
//! created during the session.
//!
//! The AccountStore is responsible for:
//! - Assigning sequential account numbers starting at 1
//! - Enforcing the maximum number of accounts
//! - Looking accounts up by number, optionally checking the password

use crate::types::{Account, AccountNumber, BankError};

/// Maximum number of accounts when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 100;

/// Owns all accounts in creation order
///
/// Accounts are never removed, so the position of an account in the store
/// is always `account_number - 1`.
#[derive(Debug)]
pub struct AccountStore {
    accounts: Vec<Account>,
    capacity: usize,
}

impl AccountStore {
    /// Create an empty store that accepts at most `capacity` accounts
    ///
    /// The capacity is only a limit checked by `create`; storage grows as
    /// accounts are added.
    pub fn with_capacity(capacity: usize) -> Self {
        AccountStore {
            accounts: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Create a new account with a zero balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store already holds `capacity` accounts
    /// - The name is empty or only whitespace
    pub fn create(&mut self, name: &str, password: &str) -> Result<&Account, BankError> {
        if self.is_full() {
            return Err(BankError::capacity_exceeded(self.capacity));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(BankError::EmptyName);
        }

        let account_number = self.next_account_number()?;
        self.accounts.push(Account::new(
            account_number,
            name.to_string(),
            password.to_string(),
        ));

        tracing::info!(account = account_number, "account created");

        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    /// Look up an account by number
    pub fn find_by_number(&self, account_number: AccountNumber) -> Result<&Account, BankError> {
        self.index_of(account_number)
            .map(|index| &self.accounts[index])
            .ok_or_else(|| BankError::account_not_found(account_number))
    }

    /// Look up an account by number for a balance update
    pub fn find_by_number_mut(
        &mut self,
        account_number: AccountNumber,
    ) -> Result<&mut Account, BankError> {
        match self.index_of(account_number) {
            Some(index) => Ok(&mut self.accounts[index]),
            None => Err(BankError::account_not_found(account_number)),
        }
    }

    /// Look up an account whose number and password both match
    ///
    /// An unknown number and a wrong password are reported the same way.
    pub fn find_by_number_and_password(
        &self,
        account_number: AccountNumber,
        password: &str,
    ) -> Result<&Account, BankError> {
        self.find_by_number(account_number)
            .ok()
            .filter(|account| account.password_matches(password))
            .ok_or(BankError::InvalidCredentials)
    }

    /// All accounts in account-number order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.accounts.len() >= self.capacity
    }

    fn next_account_number(&self) -> Result<AccountNumber, BankError> {
        AccountNumber::try_from(self.accounts.len() + 1)
            .map_err(|_| BankError::capacity_exceeded(self.capacity))
    }

    fn index_of(&self, account_number: AccountNumber) -> Option<usize> {
        let index = usize::try_from(account_number.checked_sub(1)?).ok()?;
        self.accounts
            .get(index)
            .filter(|account| account.account_number == account_number)
            .map(|_| index)
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
