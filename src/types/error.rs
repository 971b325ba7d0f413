//! Error types for the bank console
//!
//! This module defines all error types that can occur while operating on
//! accounts. Messages are written to be shown directly to the console user.
//!
//! # Error Categories
//!
//! - **Store Errors**: capacity reached, unknown account, empty name
//! - **Session Errors**: bad credentials, no active login
//! - **Transaction Errors**: invalid amount, insufficient funds, unknown recipient
//! - **Arithmetic Errors**: overflow in balance calculations
//! - **I/O Errors**: failures reading input or writing output

use super::account::{format_amount, AccountNumber};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank console
///
/// Every variant except `Io` is recovered by the shell: the message is
/// printed and the menu shown again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// The store already holds its maximum number of accounts
    #[error("Cannot create more accounts. Limit of {capacity} reached.")]
    CapacityExceeded {
        /// Configured store capacity
        capacity: usize,
    },

    /// An account was created with an empty name
    #[error("Account name must not be empty.")]
    EmptyName,

    /// No account has the given number
    #[error("Account {account} not found.")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// Account number and password did not both match
    #[error("Invalid account number or password.")]
    InvalidCredentials,

    /// An operation that needs a logged-in account was attempted without one
    #[error("No account is logged in.")]
    Unauthenticated,

    /// Amount was zero or negative
    #[error("Invalid amount {amount}: must be greater than zero.")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal or transfer larger than the current balance
    #[error(
        "Insufficient balance in account {account}: balance {}, requested {}.",
        format_amount(.balance),
        format_amount(.requested)
    )]
    InsufficientFunds {
        /// Account being debited
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Transfer target does not exist
    ///
    /// Holds the number exactly as entered, which may be negative.
    #[error("Recipient account {account} not found.")]
    RecipientNotFound {
        /// The requested recipient
        account: i64,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected and the balances are left untouched.
    #[error("Arithmetic overflow in {operation} for account {account}.")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance would overflow
        account: AccountNumber,
    },

    /// I/O error while talking to the terminal or writing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create a CapacityExceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        BankError::CapacityExceeded { capacity }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a RecipientNotFound error
    pub fn recipient_not_found(account: impl Into<i64>) -> Self {
        BankError::RecipientNotFound {
            account: account.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Whether the shell can report this error and carry on
    ///
    /// Everything except `Io` is a user-level failure; `Io` ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BankError::Io { .. })
    }
}
