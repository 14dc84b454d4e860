use chrono::{Datelike, NaiveDate};

use crate::domain::{Cents, parse_cents};

use super::InputError;

/// Entries of the main menu, numbered as they are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    MonthlySummary,
    History,
    Exit,
}

impl MenuChoice {
    /// Anything other than 1-5 (including non-numbers) is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::AddIncome),
            2 => Some(MenuChoice::AddExpense),
            3 => Some(MenuChoice::MonthlySummary),
            4 => Some(MenuChoice::History),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parse a `YYYY-MM-DD` date. Blank input means `today`.
/// Only the zero-padded form is accepted: `2024-1-5` is rejected.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }
    if input.len() != 10 {
        return Err(InputError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(input.to_string()))
}

/// Parse `MM/YYYY` into `(month, year)`. Blank input means the month of `today`.
///
/// The month is not range-checked: `13/2024` or `-1/2024` is accepted and later matches
/// no transactions.
pub fn parse_month_year(input: &str, today: NaiveDate) -> Result<(i32, i32), InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok((today.month() as i32, today.year()));
    }

    let invalid = || InputError::InvalidMonthYear(input.to_string());
    let (month, year) = input.split_once('/').ok_or_else(invalid)?;
    let month = month.trim().parse::<i32>().map_err(|_| invalid())?;
    let year = year.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok((month, year))
}

pub fn parse_amount(input: &str) -> Result<Cents, InputError> {
    parse_cents(input).map_err(|source| InputError::InvalidAmount {
        input: input.trim().to_string(),
        source,
    })
}
