//! Interactive console shell
//!
//! The shell shows the menu for the current session state, reads the user's
//! choice and dispatches to the [`Bank`]. Domain errors are printed and the
//! menu is shown again; only I/O errors end `run` with an error.
//!
//! After most operations the user is asked whether to return to the menu.
//! Any answer other than `1` ends the session, as does end of input.

pub mod menu;

use crate::core::Bank;
use crate::io::Prompter;
use crate::types::{format_amount, AccountNumber, BankError};
use menu::{GuestAction, MemberAction};
use std::io::{BufRead, Write};

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const CONFIRM_PROMPT: &str = "Do you want to return to the main menu? (1 for Yes, 0 for No): ";
pub const EXIT_MESSAGE: &str = "Exiting the system. Thank you!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Menu loop over a bank, reading from `R` and writing to `W`
pub struct Shell<R, W> {
    bank: Bank,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(bank: Bank, input: R, output: W) -> Self {
        Shell {
            bank,
            prompter: Prompter::new(input, output),
        }
    }

    /// Give back the bank and the output writer once the session is over
    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.prompter.into_output())
    }

    /// Run the menu loop until the user exits or input runs out
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), BankError> {
        tracing::debug!("session started");

        loop {
            let authenticated = self.bank.is_authenticated();
            menu::render(self.prompter.output(), authenticated)?;

            // Menu numbers depend on whether someone is logged in
            let flow = match self.prompter.read_integer(CHOICE_PROMPT)? {
                None => Flow::EndOfInput,
                Some(choice) if authenticated => match MemberAction::from_choice(choice) {
                    Some(action) => self.member_action(action)?,
                    None => self.invalid_choice(choice)?,
                },
                Some(choice) => match GuestAction::from_choice(choice) {
                    Some(action) => self.guest_action(action)?,
                    None => self.invalid_choice(choice)?,
                },
            };

            match flow {
                Flow::Continue => continue,
                Flow::EndOfInput => {
                    // Finish the dangling prompt line
                    writeln!(self.prompter.output())?;
                    break;
                }
                Flow::Exit => break,
            }
        }

        writeln!(self.prompter.output(), "{}", EXIT_MESSAGE)?;
        self.prompter.output().flush()?;
        tracing::debug!("session ended");
        Ok(())
    }

    fn guest_action(&mut self, action: GuestAction) -> Result<Flow, BankError> {
        tracing::debug!(?action, "menu selection");
        match action {
            GuestAction::CreateAccount => self.create_account(),
            GuestAction::Login => self.login(),
            GuestAction::Exit => Ok(Flow::Exit),
        }
    }

    fn member_action(&mut self, action: MemberAction) -> Result<Flow, BankError> {
        tracing::debug!(?action, "menu selection");
        match action {
            MemberAction::Deposit => self.deposit(),
            MemberAction::Withdraw => self.withdraw(),
            MemberAction::Transfer => self.transfer(),
            MemberAction::DisplayDetails => self.display_details(),
            MemberAction::Logout => self.logout(),
        }
    }

    fn invalid_choice(&mut self, choice: i64) -> Result<Flow, BankError> {
        tracing::debug!(choice, "unknown menu choice");
        writeln!(self.prompter.output(), "Invalid choice! Please try again.")?;
        Ok(Flow::Continue)
    }

    fn create_account(&mut self) -> Result<Flow, BankError> {
        // Check capacity before asking for a name
        if self.bank.store().is_full() {
            let capacity = self.bank.store().capacity();
            self.report(BankError::capacity_exceeded(capacity))?;
            return Ok(Flow::Continue);
        }

        let Some(name) = self.prompter.read_text("Enter name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(password) = self.prompter.read_text("Set a password: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let created = self
            .bank
            .create_account(&name, &password)
            .map(|account| account.summary());

        match created {
            Ok(summary) => {
                let output = self.prompter.output();
                writeln!(output)?;
                writeln!(output, "Account created successfully!")?;
                writeln!(output, "Account Number: {}", summary.account_number)?;
                writeln!(output, "Name: {}", summary.name)?;
            }
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        }

        self.return_to_menu()
    }

    fn login(&mut self) -> Result<Flow, BankError> {
        let Some(entered) = self.prompter.read_integer("Enter account number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(password) = self.prompter.read_text("Enter password: ")? else {
            return Ok(Flow::EndOfInput);
        };

        // Numbers outside the account range fail like any other bad credential
        let logged_in = match AccountNumber::try_from(entered) {
            Ok(account_number) => self
                .bank
                .login(account_number, &password)
                .map(|account| account.name.clone()),
            Err(_) => Err(BankError::InvalidCredentials),
        };

        match logged_in {
            Ok(name) => {
                writeln!(
                    self.prompter.output(),
                    "Login successful! Welcome, {}.",
                    name
                )?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                self.report(e)?;
                self.return_to_menu()
            }
        }
    }

    fn logout(&mut self) -> Result<Flow, BankError> {
        self.bank.logout();
        writeln!(
            self.prompter.output(),
            "Logged out successfully. See you next time!"
        )?;
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<Flow, BankError> {
        let Some(amount) = self.prompter.read_amount("Enter amount to deposit: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.bank.deposit(amount) {
            Ok(balance) => writeln!(
                self.prompter.output(),
                "Deposit successful! New balance: {}",
                format_amount(&balance)
            )?,
            Err(e) => self.report(e)?,
        }

        self.return_to_menu()
    }

    fn withdraw(&mut self) -> Result<Flow, BankError> {
        let Some(amount) = self.prompter.read_amount("Enter amount to withdraw: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.bank.withdraw(amount) {
            Ok(balance) => writeln!(
                self.prompter.output(),
                "Withdrawal successful! New balance: {}",
                format_amount(&balance)
            )?,
            Err(e) => self.report(e)?,
        }

        self.return_to_menu()
    }

    fn transfer(&mut self) -> Result<Flow, BankError> {
        let Some(entered) = self
            .prompter
            .read_integer("Enter account number to transfer to: ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        // Unknown recipients go straight back to the menu
        let recipient = AccountNumber::try_from(entered)
            .ok()
            .filter(|number| self.bank.find_account(*number).is_ok());
        let Some(target) = recipient else {
            self.report(BankError::recipient_not_found(entered))?;
            return Ok(Flow::Continue);
        };

        let Some(amount) = self.prompter.read_amount("Enter amount to transfer: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.bank.transfer(target, amount) {
            Ok(balance) => writeln!(
                self.prompter.output(),
                "Transfer successful! Your new balance: {}",
                format_amount(&balance)
            )?,
            Err(e) => self.report(e)?,
        }

        self.return_to_menu()
    }

    fn display_details(&mut self) -> Result<Flow, BankError> {
        match self.bank.balance() {
            Ok(summary) => {
                let output = self.prompter.output();
                writeln!(output)?;
                writeln!(output, "=== Account Details ===")?;
                writeln!(output, "Account Number: {}", summary.account_number)?;
                writeln!(output, "Name: {}", summary.name)?;
                writeln!(output, "Balance: {}", format_amount(&summary.balance))?;
            }
            Err(e) => self.report(e)?,
        }

        self.return_to_menu()
    }

    fn return_to_menu(&mut self) -> Result<Flow, BankError> {
        Ok(match self.prompter.confirm(CONFIRM_PROMPT)? {
            Some(true) => Flow::Continue,
            Some(false) => Flow::Exit,
            None => Flow::EndOfInput,
        })
    }

    /// Print a user-level failure and carry on, or hand back a fatal one
    fn report(&mut self, error: BankError) -> Result<(), BankError> {
        if !error.is_recoverable() {
            return Err(error);
        }

        tracing::debug!(%error, "operation rejected");
        writeln!(self.prompter.output(), "{}", error)?;
        Ok(())
    }
}
