//! Core business logic module
//!
//! This module contains the account and transaction components:
//! - `account_store` - Account creation, numbering and lookup
//! - `session` - Tracks the logged-in account
//! - `bank` - Transaction operations over the store and session

pub mod account_store;
pub mod bank;
pub mod session;

pub use account_store::{AccountStore, DEFAULT_CAPACITY};
pub use bank::{Bank, BankConfig};
pub use session::Session;
