use serde::{Deserialize, Serialize};

use super::{Cents, Transaction, TransactionKind};

/// Income/expense totals for one calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub month: i32,
    pub year: i32,
    pub total_income: Cents,
    pub total_expenses: Cents,
    /// Always `total_income - total_expenses`
    pub net: Cents,
}

/// Append-only, in-memory record of every transaction entered in a session.
/// Order is insertion order, which need not match date order.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction to the end of the ledger. No validation happens here.
    pub fn append(&mut self, transaction: Transaction) {
        tracing::debug!(
            kind = %transaction.kind,
            date = %transaction.date,
            amount_cents = transaction.amount_cents,
            "appending transaction"
        );
        self.transactions.push(transaction);
    }

    /// Compute totals for transactions dated in the given month and year.
    /// Months outside 1..=12 simply match nothing. Totals saturate at the
    /// `Cents` range instead of overflowing.
    pub fn monthly_summary(&self, month: i32, year: i32) -> MonthlySummary {
        let (total_income, total_expenses) = self
            .transactions
            .iter()
            .filter(|t| t.is_in_month(month, year))
            .fold((0, 0), |(income, expenses): (Cents, Cents), t| match t.kind {
                TransactionKind::Income => (income.saturating_add(t.amount_cents), expenses),
                TransactionKind::Expense => (income, expenses.saturating_add(t.amount_cents)),
            });

        tracing::trace!(month, year, total_income, total_expenses, "monthly summary");

        MonthlySummary {
            month,
            year,
            total_income,
            total_expenses,
            net: total_income.saturating_sub(total_expenses),
        }
    }

    /// All transactions in the order they were appended.
    pub fn history(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
