//! Amount-entry session state
//!
//! A small state machine mediating between category selection and the ledger.
//! At most one amount-capture context exists at any instant: selecting a new
//! category while one is pending is rejected until the pending entry is
//! confirmed or cancelled.

use crate::error::{KakeiboError, KakeiboResult};
use crate::models::Expense;

use super::ledger::ExpenseLedger;

/// Current amount-entry state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No category chosen
    #[default]
    Idle,
    /// A category has been chosen and an amount is pending
    AwaitingAmount {
        /// Label of the selected category
        category: String,
    },
}

/// Tracks the category currently being amount-entered
#[derive(Debug, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    /// Create a controller in the `Idle` state
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state
    pub fn state(&self) -> &Selection {
        &self.state
    }

    /// Label of the pending category, if an amount capture is open
    pub fn pending_category(&self) -> Option<&str> {
        match &self.state {
            Selection::AwaitingAmount { category } => Some(category),
            Selection::Idle => None,
        }
    }

    /// Open an amount-capture context for the given category label
    ///
    /// Rejected with `EntryPending` while another capture is open; the
    /// existing one must be confirmed or cancelled first.
    pub fn select(&mut self, category: &str) -> KakeiboResult<()> {
        match &self.state {
            Selection::Idle => {
                self.state = Selection::AwaitingAmount {
                    category: category.to_string(),
                };
                Ok(())
            }
            Selection::AwaitingAmount { category } => {
                Err(KakeiboError::EntryPending(category.clone()))
            }
        }
    }

    /// Confirm the pending amount, recording it in the ledger
    ///
    /// On success the state returns to `Idle` and the created expense is
    /// returned. An invalid amount leaves the capture open so the caller can
    /// re-prompt; confirming with nothing selected is `NoSelection`.
    pub fn confirm(&mut self, ledger: &mut ExpenseLedger, amount: i64) -> KakeiboResult<Expense> {
        let category = match &self.state {
            Selection::AwaitingAmount { category } => category.clone(),
            Selection::Idle => return Err(KakeiboError::NoSelection),
        };

        let expense = ledger.add(&category, amount)?;
        self.state = Selection::Idle;
        Ok(expense)
    }

    /// Abandon the pending capture without touching the ledger
    pub fn cancel(&mut self) {
        self.state = Selection::Idle;
    }
}
