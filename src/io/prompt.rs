//! Line-oriented input with validation
//!
//! `Prompter` writes a prompt, reads one line and re-prompts until the line
//! parses. Every reader returns `None` once the input is exhausted so the
//! caller can end the session cleanly.

use crate::types::BankError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Message shown when a numeric prompt receives something else
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

/// Reads validated values from `input`, writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writer for everything that is not a prompt
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `message` and read one line with the line ending removed
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, message: &str) -> Result<Option<String>, BankError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Re-prompt until a non-blank line is entered
    ///
    /// The returned text is trimmed.
    pub fn read_text(&mut self, message: &str) -> Result<Option<String>, BankError> {
        loop {
            match self.read_line(message)? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => return Ok(Some(line.trim().to_string())),
            }
        }
    }

    /// Re-prompt until a whole integer is entered
    pub fn read_integer(&mut self, message: &str) -> Result<Option<i64>, BankError> {
        self.read_parsed(message)
    }

    /// Re-prompt until a decimal amount is entered
    ///
    /// The sign is not checked here; the bank rejects non-positive amounts.
    pub fn read_amount(&mut self, message: &str) -> Result<Option<Decimal>, BankError> {
        self.read_parsed(message)
    }

    /// Ask a yes/no question where only `1` means yes
    ///
    /// Any other number means no. Returns `None` at end of input.
    pub fn confirm(&mut self, message: &str) -> Result<Option<bool>, BankError> {
        Ok(self.read_integer(message)?.map(|answer| answer == 1))
    }

    fn read_parsed<T: FromStr>(&mut self, message: &str) -> Result<Option<T>, BankError> {
        loop {
            let Some(line) = self.read_line(message)? else {
                return Ok(None);
            };

            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(input = %line.trim(), "rejected non-numeric input");
                    writeln!(self.output, "{}", INVALID_NUMBER)?;
                }
            }
        }
    }
}
