//! Menu definitions
//!
//! Two menus exist: one for a logged-out user and one for a logged-in user.
//! Each maps the number typed by the user onto an action.

use std::io::Write;

pub const TITLE: &str = "=== Banking Management System ===";

/// Actions available when nobody is logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestAction {
    CreateAccount,
    Login,
    Exit,
}

impl GuestAction {
    pub const ALL: [GuestAction; 3] = [
        GuestAction::CreateAccount,
        GuestAction::Login,
        GuestAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GuestAction::CreateAccount => "Create Account",
            GuestAction::Login => "Login to Account",
            GuestAction::Exit => "Exit",
        }
    }

    pub fn from_choice(choice: i64) -> Option<Self> {
        choice_index(choice, Self::ALL.len()).map(|index| Self::ALL[index])
    }
}

/// Actions available to a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    Deposit,
    Withdraw,
    Transfer,
    DisplayDetails,
    Logout,
}

impl MemberAction {
    pub const ALL: [MemberAction; 5] = [
        MemberAction::Deposit,
        MemberAction::Withdraw,
        MemberAction::Transfer,
        MemberAction::DisplayDetails,
        MemberAction::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MemberAction::Deposit => "Deposit Money",
            MemberAction::Withdraw => "Withdraw Money",
            MemberAction::Transfer => "Transfer Money",
            MemberAction::DisplayDetails => "Display Account Details",
            MemberAction::Logout => "Logout",
        }
    }

    pub fn from_choice(choice: i64) -> Option<Self> {
        choice_index(choice, Self::ALL.len()).map(|index| Self::ALL[index])
    }
}

/// Write the menu for the current session state
pub fn render(output: &mut dyn Write, authenticated: bool) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", TITLE)?;

    let labels: Vec<&str> = if authenticated {
        MemberAction::ALL.iter().map(|action| action.label()).collect()
    } else {
        GuestAction::ALL.iter().map(|action| action.label()).collect()
    };

    for (index, label) in labels.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, label)?;
    }

    Ok(())
}

// Menu entries are numbered from 1.
fn choice_index(choice: i64, len: usize) -> Option<usize> {
    let index = usize::try_from(choice.checked_sub(1)?).ok()?;
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(GuestAction::CreateAccount))]
    #[case(2, Some(GuestAction::Login))]
    #[case(3, Some(GuestAction::Exit))]
    #[case(0, None)]
    #[case(4, None)]
    #[case(-1, None)]
    #[case(i64::MIN, None)]
    fn test_guest_choice(#[case] choice: i64, #[case] expected: Option<GuestAction>) {
        assert_eq!(GuestAction::from_choice(choice), expected);
    }

    #[rstest]
    #[case(1, Some(MemberAction::Deposit))]
    #[case(2, Some(MemberAction::Withdraw))]
    #[case(3, Some(MemberAction::Transfer))]
    #[case(4, Some(MemberAction::DisplayDetails))]
    #[case(5, Some(MemberAction::Logout))]
    #[case(6, None)]
    #[case(0, None)]
    fn test_member_choice(#[case] choice: i64, #[case] expected: Option<MemberAction>) {
        assert_eq!(MemberAction::from_choice(choice), expected);
    }

    #[test]
    fn test_render_guest_menu() {
        let mut output = Vec::new();
        render(&mut output, false).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\n=== Banking Management System ===\n1. Create Account\n2. Login to Account\n3. Exit\n"
        );
    }

    #[test]
    fn test_render_member_menu() {
        let mut output = Vec::new();
        render(&mut output, true).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\n=== Banking Management System ===\n1. Deposit Money\n2. Withdraw Money\n\
             3. Transfer Money\n4. Display Account Details\n5. Logout\n"
        );
    }
}
