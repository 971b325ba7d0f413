//! End-to-end integration tests
//!
//! These tests replay scripted console sessions through the shell. Each test:
//! 1. Reads input.txt from a fixture directory as the user's keystrokes
//! 2. Runs the shell against a fresh bank
//! 3. Captures everything written to the terminal
//! 4. Compares the captured transcript with expected.txt
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The full create / login / deposit / withdraw / transfer / logout flow
//! - Non-numeric input and unknown menu choices
//! - Rejected operations (bad credentials, unknown recipient, bad amounts)
//! - Input ending in the middle of a session

#[cfg(test)]
mod tests {
    use bank_console::{write_accounts_csv, Bank, BankConfig, Shell};
    use rstest::rstest;
    use std::fs;
    use std::io::{Cursor, Write};
    use std::path::Path;
    use tempfile::NamedTempFile;

    /// Run a session fixture and return the resulting bank
    ///
    /// Panics if the fixture files are missing or the transcript differs
    /// from expected.txt.
    fn run_session_fixture(fixture_name: &str) -> Bank {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.txt", fixture_dir);
        let expected_path = format!("{}/expected.txt", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let input = fs::read(&input_path)
            .unwrap_or_else(|e| panic!("Failed to read input file {}: {}", input_path, e));

        let temp_output = NamedTempFile::new().expect("Failed to create temp file");
        let mut shell = Shell::new(
            Bank::new(BankConfig::default()),
            Cursor::new(input),
            temp_output.reopen().expect("Failed to reopen temp file"),
        );

        shell
            .run()
            .unwrap_or_else(|e| panic!("Session failed: {}", e));

        let (bank, mut output) = shell.into_parts();
        output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nTranscript mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );

        bank
    }

    #[rstest]
    #[case("happy_path")]
    #[case("invalid_input")]
    #[case("rejected_operations")]
    #[case("end_of_input")]
    fn test_fixtures(#[case] fixture: &str) {
        run_session_fixture(fixture);
    }

    #[rstest]
    #[case::happy_path("happy_path", "account,name,balance\n1,Alice,50.00\n2,Bob,50.00\n")]
    #[case::invalid_input("invalid_input", "account,name,balance\n")]
    #[case::rejected_operations(
        "rejected_operations",
        "account,name,balance\n1,Alice,20.00\n2,Bob,0.00\n"
    )]
    #[case::end_of_input("end_of_input", "account,name,balance\n1,Carol,0.00\n")]
    fn test_summary_after_session(#[case] fixture: &str, #[case] expected_summary: &str) {
        let bank = run_session_fixture(fixture);

        let mut summary = Vec::new();
        write_accounts_csv(&bank.summaries(), &mut summary).expect("Failed to write summary");

        assert_eq!(String::from_utf8(summary).unwrap(), expected_summary);
    }
}
