//! Bank Console CLI
//!
//! Interactive, in-memory account management from the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --capacity 10
//! cargo run -- --summary > session.txt
//! RUST_LOG=bank_console=debug cargo run
//! ```
//!
//! Menus and prompts go to stdout; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (terminal I/O failure)

use bank_console::cli;
use bank_console::{write_accounts_csv, Bank, Shell};
use std::io::{self, Write};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Logs go to stderr so they never mix with the menus on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let bank = Bank::new(args.to_bank_config());
    tracing::info!(capacity = bank.store().capacity(), "bank ready");

    // Run the interactive session until exit or end of input
    let stdin = io::stdin();
    let mut shell = Shell::new(bank, stdin.lock(), io::stdout());
    if let Err(e) = shell.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Optional CSV summary of every account, after the session ends
    if args.summary {
        let (bank, mut output) = shell.into_parts();
        let result = write_accounts_csv(&bank.summaries(), &mut output)
            .and_then(|()| output.flush().map_err(Into::into));
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
