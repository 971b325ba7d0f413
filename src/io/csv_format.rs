//! CSV format handling for the account summary
//!
//! Writes one row per account with columns: account, name, balance.
//! Passwords are never written.

use crate::types::{format_amount, AccountNumber, AccountSummary, BankError};
use serde::Serialize;
use std::io::Write;

/// CSV row for one account
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SummaryRecord {
    pub account: AccountNumber,
    pub name: String,
    /// Balance rounded half away from zero to two decimal places
    pub balance: String,
}

impl From<&AccountSummary> for SummaryRecord {
    fn from(summary: &AccountSummary) -> Self {
        SummaryRecord {
            account: summary.account_number,
            name: summary.name.clone(),
            balance: format_amount(&summary.balance),
        }
    }
}

/// Write account summaries in CSV format
///
/// The header row is always written, even when there are no accounts.
/// Rows are sorted by account number for deterministic output.
///
/// # Errors
///
/// Returns `BankError::Io` if writing to `output` fails.
pub fn write_accounts_csv(
    summaries: &[AccountSummary],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["account", "name", "balance"])?;

    let mut sorted: Vec<&AccountSummary> = summaries.iter().collect();
    sorted.sort_by_key(|summary| summary.account_number);

    for summary in sorted {
        writer.serialize(SummaryRecord::from(summary))?;
    }

    writer.flush()?;

    Ok(())
}
