use crate::core::BankConfig;
use clap::Parser;

/// Interactive in-memory bank account console
#[derive(Parser, Debug)]
#[command(name = "bank-console")]
#[command(about = "Interactive in-memory bank account console", long_about = None)]
pub struct CliArgs {
    /// Maximum number of accounts that can be created
    #[arg(
        long = "capacity",
        value_name = "COUNT",
        help = "Maximum number of accounts (default: 100)"
    )]
    pub capacity: Option<usize>,

    /// Print a CSV summary of all accounts when the session ends
    #[arg(
        long = "summary",
        help = "Write an account,name,balance CSV to stdout after exiting"
    )]
    pub summary: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Tracing filter for stderr logs, e.g. 'info' or 'bank_console=debug'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// Falls back to the default capacity when none is given. A zero
    /// capacity is replaced by the default with a warning.
    pub fn to_bank_config(&self) -> BankConfig {
        match self.capacity {
            Some(capacity) => BankConfig::new(capacity),
            None => BankConfig::default(),
        }
    }
}
