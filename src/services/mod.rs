//! Business logic layer
//!
//! - `category`: the category store and the persisted/default merge rule
//! - `ledger`: the append-only expense ledger
//! - `session`: the amount-entry state machine composing the two

pub mod category;
pub mod ledger;
pub mod session;

pub use category::CategoryStore;
pub use ledger::ExpenseLedger;
pub use session::{Selection, SelectionController};
