//! kakeibo - terminal expense-entry panel
//!
//! This library provides the core functionality for kakeibo: a fixed panel of
//! spending categories, each selectable to record an amount, with a
//! spreadsheet-ready datasheet export of the session's ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, expenses)
//! - `storage`: JSON file storage layer for the category blob
//! - `services`: Business logic (category store, ledger, entry session state)
//! - `export`: Tab-separated datasheet export
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! Categories are durable: the list is persisted on every mutation and
//! reconciled with the built-in default set on load. The expense ledger is
//! in-memory and session-scoped by design.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{KakeiboError, KakeiboResult};
