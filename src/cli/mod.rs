//! CLI command handlers

pub mod category;
pub mod entry;

pub use category::{handle_category_command, CategoryCommands};
pub use entry::run_entry_session;
