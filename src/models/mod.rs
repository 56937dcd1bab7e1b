//! Core data models for kakeibo
//!
//! - `category`: spending categories and the built-in default set
//! - `expense`: immutable recorded spend events
//! - `ids`: strongly-typed ID wrapper

pub mod category;
pub mod expense;
pub mod ids;

pub use category::{default_categories, Category, MAX_CATEGORIES};
pub use expense::Expense;
pub use ids::ExpenseId;
