use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::domain::{Ledger, MonthlySummary, Transaction, TransactionKind, format_dollars};

use super::input::{MenuChoice, parse_amount, parse_date, parse_month_year};
use super::InputError;

const BANNER: &str = "=== Monthly Money Tracker ===";

/// Interactive menu session. Owns the ledger for as long as the session runs;
/// everything entered is dropped with it.
pub struct Shell<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
    clock: Box<dyn Fn() -> NaiveDate>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session reading from `input` and writing to `output`,
    /// with "today" taken from the local system clock.
    pub fn new(input: R, output: W) -> Self {
        Self {
            ledger: Ledger::new(),
            input,
            output,
            clock: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the clock used for blank date and month prompts.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, ending session");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::AddIncome) => self.add_transaction(TransactionKind::Income)?,
                Some(MenuChoice::AddExpense) => self.add_transaction(TransactionKind::Expense)?,
                Some(MenuChoice::MonthlySummary) => self.show_monthly_summary()?,
                Some(MenuChoice::History) => {
                    self.show_history()?;
                    ControlFlow::Continue(())
                }
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program. Goodbye!")?;
                    self.output.flush()?;
                    return Ok(());
                }
                None => {
                    tracing::debug!(choice = line.trim(), "invalid menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                tracing::debug!("input closed mid-prompt, ending session");
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Add Income")?;
        writeln!(self.output, "2. Add Expense")?;
        writeln!(self.output, "3. View Monthly Summary")?;
        writeln!(self.output, "4. View Transaction History")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> Result<ControlFlow<()>> {
        let today = (self.clock)();

        let Some(date) = self.prompt_until("Enter date (YYYY-MM-DD, today if blank): ", |s| {
            parse_date(s, today)
        })?
        else {
            return Ok(ControlFlow::Break(()));
        };

        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let Some(amount_cents) = self.prompt_until("Enter amount: ", parse_amount)? else {
            return Ok(ControlFlow::Break(()));
        };

        self.ledger.append(Transaction::new(date, kind, description, amount_cents));
        writeln!(self.output, "{} added successfully!", kind)?;
        Ok(ControlFlow::Continue(()))
    }

    fn show_monthly_summary(&mut self) -> Result<ControlFlow<()>> {
        let today = (self.clock)();

        let Some((month, year)) = self.prompt_until(
            "Enter month and year (MM/YYYY, current if blank): ",
            |s| parse_month_year(s, today),
        )?
        else {
            return Ok(ControlFlow::Break(()));
        };

        let summary = self.ledger.monthly_summary(month, year);
        self.print_summary(&summary)?;
        Ok(ControlFlow::Continue(()))
    }

    fn print_summary(&mut self, summary: &MonthlySummary) -> Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "=== Monthly Summary for {}/{} ===",
            summary.month, summary.year
        )?;
        writeln!(
            self.output,
            "Total Income: {}",
            format_dollars(summary.total_income)
        )?;
        writeln!(
            self.output,
            "Total Expenses: {}",
            format_dollars(summary.total_expenses)
        )?;
        writeln!(self.output, "Net: {}", format_dollars(summary.net))?;
        Ok(())
    }

    fn show_history(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Transaction History ===")?;
        writeln!(self.output, "Date       | Type    | Description         | Amount")?;
        writeln!(self.output, "{}", "-".repeat(50))?;
        for transaction in self.ledger.history() {
            writeln!(self.output, "{}", transaction)?;
        }
        Ok(())
    }

    /// Print `message` and read one line. `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Keep prompting until `parse` accepts the answer, reporting each rejection.
    fn prompt_until<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(error = %err, "rejected input");
                    writeln!(self.output, "Error: {}", err)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
