//! I/O module
//!
//! Handles terminal input and CSV output.
//!
//! # Components
//!
//! - `prompt` - Re-prompting readers for integers, amounts, text and confirmations
//! - `csv_format` - CSV serialization of the account summary

pub mod csv_format;
pub mod prompt;

pub use csv_format::{write_accounts_csv, SummaryRecord};
pub use prompt::Prompter;
