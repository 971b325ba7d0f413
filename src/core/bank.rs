//! Transaction operations
//!
//! This module provides the `Bank` that coordinates the `AccountStore` and the
//! `Session` to carry out everything the console user can do.
//!
//! The bank enforces business rules such as:
//! - Money operations require a logged-in account
//! - Amounts must be strictly positive
//! - Balances never go negative
//! - A transfer updates both balances or neither

use crate::core::account_store::{AccountStore, DEFAULT_CAPACITY};
use crate::core::session::Session;
use crate::types::{Account, AccountNumber, AccountSummary, BankError};
use rust_decimal::Decimal;

/// Configuration for the bank
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankConfig {
    /// Maximum number of accounts the store accepts
    pub capacity: usize,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl BankConfig {
    /// Create a new BankConfig, falling back to the default for a zero capacity
    pub fn new(capacity: usize) -> Self {
        let default = Self::default();

        let capacity = if capacity == 0 {
            tracing::warn!(
                "Invalid capacity ({}), using default ({})",
                capacity,
                default.capacity
            );
            default.capacity
        } else {
            capacity
        };

        Self { capacity }
    }
}

/// Account and transaction operations for a single console session
///
/// Owns the account store and the session. Deposit, withdraw, transfer and
/// balance queries act on the logged-in account and fail with
/// `BankError::Unauthenticated` when nobody is logged in.
#[derive(Debug)]
pub struct Bank {
    store: AccountStore,
    session: Session,
}

impl Bank {
    /// Create an empty bank with nobody logged in
    pub fn new(config: BankConfig) -> Self {
        Bank {
            store: AccountStore::with_capacity(config.capacity),
            session: Session::new(),
        }
    }

    /// Open a new account with a zero balance
    ///
    /// Does not log the new account in.
    pub fn create_account(&mut self, name: &str, password: &str) -> Result<&Account, BankError> {
        self.store.create(name, password).inspect_err(|e| {
            tracing::warn!(error = %e, "account creation rejected");
        })
    }

    /// Log in to an account, replacing any current login
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` unless both the number and the password
    /// match an existing account.
    pub fn login(
        &mut self,
        account_number: AccountNumber,
        password: &str,
    ) -> Result<&Account, BankError> {
        let account = self
            .store
            .find_by_number_and_password(account_number, password)
            .inspect_err(|_| {
                tracing::warn!(account = account_number, "login failed");
            })?;

        self.session.login(account.account_number);
        tracing::info!(account = account_number, "logged in");

        Ok(account)
    }

    /// Log out, returning the account that was logged in
    pub fn logout(&mut self) -> Option<AccountNumber> {
        let previous = self.session.logout();
        if let Some(account) = previous {
            tracing::info!(account, "logged out");
        }
        previous
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The logged-in account
    pub fn current_account(&self) -> Result<&Account, BankError> {
        let account_number = self.session.current()?;
        self.store.find_by_number(account_number)
    }

    /// Deposit into the logged-in account
    ///
    /// # Returns
    ///
    /// The new balance of the logged-in account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nobody is logged in
    /// - The amount is zero or negative
    /// - Adding the amount would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let account_number = self.session.current()?;
        validate_amount(amount, "deposit")?;

        // Update account (rejected on overflow)
        let account = self.store.find_by_number_mut(account_number)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", account_number))?;

        tracing::info!(account = account_number, %amount, "deposit");
        Ok(account.balance)
    }

    /// Withdraw from the logged-in account
    ///
    /// # Returns
    ///
    /// The new balance of the logged-in account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nobody is logged in
    /// - The amount is zero or negative
    /// - The amount exceeds the current balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let account_number = self.session.current()?;
        validate_amount(amount, "withdrawal")?;

        // Update account (will fail if insufficient funds)
        let account = self.store.find_by_number_mut(account_number)?;
        account.balance = debit(account.balance, amount, account_number)?;

        tracing::info!(account = account_number, %amount, "withdrawal");
        Ok(account.balance)
    }

    /// Transfer from the logged-in account to another account
    ///
    /// Every check runs before either balance is touched, so a rejected
    /// transfer leaves both accounts unchanged. Transferring to the
    /// logged-in account itself succeeds without changing the balance.
    ///
    /// # Returns
    ///
    /// The new balance of the logged-in account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Nobody is logged in
    /// - No account has the target number
    /// - The amount is zero or negative
    /// - The amount exceeds the current balance
    /// - Crediting the target would overflow
    pub fn transfer(&mut self, target: AccountNumber, amount: Decimal) -> Result<Decimal, BankError> {
        let source = self.session.current()?;

        // Check the recipient before the amount
        let target_balance = self
            .store
            .find_by_number(target)
            .map(|account| account.balance)
            .map_err(|_| {
                tracing::warn!(account = source, target, "transfer recipient not found");
                BankError::recipient_not_found(target)
            })?;
        validate_amount(amount, "transfer")?;

        // Compute both new balances before writing either
        let source_balance = self.store.find_by_number(source)?.balance;
        let new_source_balance = debit(source_balance, amount, source)?;

        if source == target {
            tracing::info!(account = source, %amount, "transfer to self");
            return Ok(source_balance);
        }

        let new_target_balance = target_balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("transfer", target))?;

        // Update balances
        self.store.find_by_number_mut(source)?.balance = new_source_balance;
        self.store.find_by_number_mut(target)?.balance = new_target_balance;

        tracing::info!(account = source, target, %amount, "transfer");
        Ok(new_source_balance)
    }

    /// Number, name and balance of the logged-in account
    pub fn balance(&self) -> Result<AccountSummary, BankError> {
        self.current_account().map(Account::summary)
    }

    /// Look up any account by number
    pub fn find_account(&self, account_number: AccountNumber) -> Result<&Account, BankError> {
        self.store.find_by_number(account_number)
    }

    /// Summaries of every account in account-number order
    pub fn summaries(&self) -> Vec<AccountSummary> {
        self.store.accounts().iter().map(Account::summary).collect()
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}

fn validate_amount(amount: Decimal, operation: &str) -> Result<(), BankError> {
    if amount <= Decimal::ZERO {
        tracing::warn!(%amount, operation, "rejected non-positive amount");
        return Err(BankError::invalid_amount(amount));
    }
    Ok(())
}

fn debit(balance: Decimal, amount: Decimal, account: AccountNumber) -> Result<Decimal, BankError> {
    if amount > balance {
        tracing::warn!(account, %balance, %amount, "insufficient funds");
        return Err(BankError::insufficient_funds(account, balance, amount));
    }
    Ok(balance - amount)
}
