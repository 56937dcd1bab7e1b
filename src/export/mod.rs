//! Export functionality
//!
//! Derives external representations of the ledger; currently the
//! tab-separated datasheet format.

pub mod tsv;

pub use tsv::to_tabular_text;
