//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types and identifiers
//! - `error`: Error types for the bank console

pub mod account;
pub mod error;

pub use account::{format_amount, Account, AccountNumber, AccountSummary};
pub use error::BankError;
