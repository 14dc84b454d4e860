use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Cents, format_dollars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, refunds, gifts)
    Income,
    /// Money going out (groceries, bills, fuel)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply in history tables
        f.pad(self.as_str())
    }
}

/// A single recorded income or expense.
/// Transactions are immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar day the money moved, supplied by the user
    pub date: NaiveDate,
    pub kind: TransactionKind,
    /// Free-text label, may be empty
    pub description: String,
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        description: impl Into<String>,
        amount_cents: Cents,
    ) -> Self {
        Self {
            date,
            kind,
            description: description.into(),
            amount_cents,
        }
    }

    pub fn income(date: NaiveDate, description: impl Into<String>, amount_cents: Cents) -> Self {
        Self::new(date, TransactionKind::Income, description, amount_cents)
    }

    pub fn expense(date: NaiveDate, description: impl Into<String>, amount_cents: Cents) -> Self {
        Self::new(date, TransactionKind::Expense, description, amount_cents)
    }

    /// True if the transaction falls in the given calendar month. Day is ignored.
    /// Months outside 1..=12 never match.
    pub fn is_in_month(&self, month: i32, year: i32) -> bool {
        u32::try_from(month).is_ok_and(|m| m == self.date.month()) && self.date.year() == year
    }
}

/// One row of the history table: `date | KIND | description | $amount`.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:<7} | {:<20} | {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.description,
            format_dollars(self.amount_cents)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_transaction() {
        let tx = Transaction::income(date(2024, 1, 5), "Salary", 150000);

        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.description, "Salary");
        assert_eq!(tx.amount_cents, 150000);
        assert_eq!(tx.date, date(2024, 1, 5));
    }

    #[test]
    fn test_is_in_month_ignores_day() {
        let tx = Transaction::expense(date(2024, 1, 31), "Rent", 90000);

        assert!(tx.is_in_month(1, 2024));
        assert!(!tx.is_in_month(2, 2024));
        assert!(!tx.is_in_month(1, 2023));
        assert!(!tx.is_in_month(13, 2024));
        assert!(!tx.is_in_month(0, 2024));
        assert!(!tx.is_in_month(-1, 2024));
    }

    #[test]
    fn test_kind_display_respects_padding() {
        assert_eq!(format!("[{:<7}]", TransactionKind::Income), "[INCOME ]");
        assert_eq!(format!("[{:<7}]", TransactionKind::Expense), "[EXPENSE]");
        assert_eq!(TransactionKind::Expense.to_string(), "EXPENSE");
    }

    #[test]
    fn test_history_row_format() {
        let tx = Transaction::expense(date(2024, 1, 10), "Groceries", 20050);
        assert_eq!(
            tx.to_string(),
            "2024-01-10 | EXPENSE | Groceries            | $200.50"
        );

        let tx = Transaction::income(date(2024, 3, 1), "", 10000);
        assert_eq!(
            tx.to_string(),
            "2024-03-01 | INCOME  |                      | $100.00"
        );
    }

    #[test]
    fn test_long_description_is_not_truncated() {
        let tx = Transaction::income(date(2024, 3, 1), "Quarterly consulting invoice", 1);
        assert_eq!(
            tx.to_string(),
            "2024-03-01 | INCOME  | Quarterly consulting invoice | $0.01"
        );
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, "\"income\"");

        let tx = Transaction::expense(date(2024, 2, 1), "Gas", 5000);
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
