//! Bank Console Library
//! # Overview
//!
//! This library provides a single-session, in-memory bank account console:
//! create accounts, log in, deposit, withdraw, transfer and view balances.
//! Nothing is persisted between runs.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountSummary, BankError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Account creation, numbering and lookup
//!   - [`core::session`] - The logged-in account
//!   - [`core::bank`] - Deposit, withdraw, transfer and balance queries
//! - [`io`] - Validated terminal input and CSV summary output
//! - [`shell`] - The interactive menu loop
//!
//! # Operations
//!
//! - **Create**: open an account with a zero balance and the next account number
//! - **Login / Logout**: bind or clear the single session
//! - **Deposit**: add a positive amount to the logged-in account
//! - **Withdraw**: remove a positive amount no larger than the balance
//! - **Transfer**: move funds to another account, all or nothing
//! - **Balance**: report number, name and balance of the logged-in account

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use crate::core::{AccountStore, Bank, BankConfig, Session};
pub use io::write_accounts_csv;
pub use shell::Shell;
pub use types::{Account, AccountNumber, AccountSummary, BankError};
