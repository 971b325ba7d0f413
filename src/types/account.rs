//! Account-related types for the bank console
//!
//! This module defines the Account structure held by the store and the
//! read-only summary handed out to callers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Account identifier
///
/// Assigned sequentially starting at 1. Never reused within a session.
pub type AccountNumber = u32;

/// A single bank account
///
/// Only the balance changes after creation, and only through the
/// transaction operations on [`crate::core::Bank`].
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Sequential account number, immutable once assigned
    pub account_number: AccountNumber,

    /// Account holder name (never empty)
    pub name: String,

    /// Plain-text password compared by equality at login
    pub password: String,

    /// Current balance, never negative
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(account_number: AccountNumber, name: String, password: String) -> Self {
        Account {
            account_number,
            name,
            password,
            balance: Decimal::ZERO,
        }
    }

    /// Check a password against the stored one
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }

    /// Read-only view of this account without its password
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            account_number: self.account_number,
            name: self.name.clone(),
            balance: self.balance,
        }
    }
}

/// Render an amount with two decimal places, rounding half away from zero
pub fn format_amount(amount: &Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Balance statement for one account
///
/// Returned by the balance query and used for the CSV summary export.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub account_number: AccountNumber,
    pub name: String,
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_account_starts_empty() {
        let account = Account::new(7, "Alice".to_string(), "secret".to_string());

        assert_eq!(account.account_number, 7);
        assert_eq!(account.name, "Alice");
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn test_password_matches_is_exact() {
        let account = Account::new(1, "Alice".to_string(), "secret".to_string());

        assert!(account.password_matches("secret"));
        assert!(!account.password_matches("Secret"));
        assert!(!account.password_matches("secret "));
        assert!(!account.password_matches(""));
    }

    #[test]
    fn test_summary_copies_public_fields() {
        let mut account = Account::new(3, "Bob".to_string(), "pw".to_string());
        account.balance = Decimal::new(1250, 2);

        let summary = account.summary();

        assert_eq!(
            summary,
            AccountSummary {
                account_number: 3,
                name: "Bob".to_string(),
                balance: Decimal::new(1250, 2),
            }
        );
    }

    #[rstest]
    #[case::whole(Decimal::new(100, 0), "100.00")]
    #[case::zero(Decimal::ZERO, "0.00")]
    #[case::exact_cents(Decimal::new(1234, 2), "12.34")]
    #[case::rounds_half_up(Decimal::new(1555, 3), "1.56")]
    #[case::rounds_half_up_even_digit(Decimal::new(1545, 3), "1.55")]
    #[case::rounds_down(Decimal::new(1554, 3), "1.55")]
    #[case::half_cent(Decimal::new(5, 3), "0.01")]
    #[case::tenth_of_cent(Decimal::new(1, 3), "0.00")]
    #[case::negative(Decimal::new(-1555, 3), "-1.56")]
    fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(&amount), expected);
    }
}
