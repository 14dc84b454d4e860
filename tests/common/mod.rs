// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::io::Cursor;

use chrono::NaiveDate;
use money_tracker::cli::Shell;

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Fixed "today" used by scripted sessions
pub fn fixed_today() -> NaiveDate {
    parse_date("2024-03-15")
}

/// Run a scripted session to completion and return the shell with its transcript.
pub fn run_session(script: &str) -> anyhow::Result<(Shell<Cursor<Vec<u8>>, Vec<u8>>, String)> {
    let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
        .with_clock(fixed_today);
    shell.run()?;
    let transcript = String::from_utf8(shell.output().clone())?;
    Ok((shell, transcript))
}
