//! Expense ledger
//!
//! Append-only, in-memory collection of recorded expenses. Entries are
//! immutable once created; there is no update-in-place, and correcting a
//! mistake is expressed as clear-and-re-enter. The ledger lives for the
//! session only and is never persisted.

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Expense;

/// Ordered, append-only collection of expenses
#[derive(Debug, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new expense against the given category label
    ///
    /// The label is copied into the record as a frozen snapshot. Amounts
    /// that are not positive are rejected with `InvalidAmount` and leave the
    /// ledger untouched.
    pub fn add(&mut self, category: &str, amount: i64) -> KakeiboResult<Expense> {
        if amount <= 0 {
            return Err(KakeiboError::invalid_amount(amount.to_string()));
        }

        let expense = Expense::new(category, amount);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Empty the ledger entirely and irreversibly
    ///
    /// Any confirmation step belongs to the caller.
    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    /// Read-only view of all expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> i64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}
