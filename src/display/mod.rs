//! Terminal output formatting

pub mod category;
pub mod ledger;

pub use category::format_category_menu;
pub use ledger::{format_amount, format_ledger_table};
