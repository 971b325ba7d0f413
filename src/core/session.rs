//! Session tracking
//!
//! Holds the account number of the logged-in account, if any. Only one
//! account can be logged in at a time.

use crate::types::{AccountNumber, BankError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    current: Option<AccountNumber>,
}

impl Session {
    /// Create a session with nobody logged in
    pub fn new() -> Self {
        Session { current: None }
    }

    /// Bind the session to an account, replacing any previous login
    pub fn login(&mut self, account_number: AccountNumber) {
        if let Some(previous) = self.current.replace(account_number) {
            tracing::debug!(previous, account = account_number, "session replaced");
        }
    }

    /// Clear the session, returning the account that was logged in
    pub fn logout(&mut self) -> Option<AccountNumber> {
        self.current.take()
    }

    /// The logged-in account
    pub fn current(&self) -> Result<AccountNumber, BankError> {
        self.current.ok_or(BankError::Unauthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
