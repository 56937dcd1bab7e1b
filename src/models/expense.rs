//! Expense model
//!
//! An expense is one immutable recorded spend event. The `category` field is
//! a snapshot of the category label at entry time, not a reference into the
//! category store, so later renames never rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, generated at creation
    pub id: ExpenseId,

    /// Label of the category active when the amount was entered (frozen copy)
    pub category: String,

    /// Amount in whole currency units, always positive
    pub amount: i64,

    /// When the expense was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record
    ///
    /// Amount validation lives in the ledger; this constructor assumes a
    /// positive amount.
    pub(crate) fn new(category: impl Into<String>, amount: i64) -> Self {
        Self {
            id: ExpenseId::new(),
            category: category.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.amount)
    }
}
