//! Category blob repository
//!
//! Persists the full category list as a JSON array of `{id, label}` objects,
//! the single source of truth for subsequent loads. A blob that is missing,
//! malformed, or an empty array reads back as "no prior state" rather than an
//! error; corruption must never block category editing.

use std::path::PathBuf;

use crate::error::KakeiboError;
use crate::models::Category;

use super::file_io::{read_json, write_json_atomic};

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
}

impl CategoryRepository {
    /// Create a repository backed by the given blob path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing blob
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted category list, if any
    ///
    /// Returns `None` when the blob is absent, fails to parse, or holds an
    /// empty array. A parse failure is logged and then discarded so the
    /// caller falls back to the defaults.
    pub fn load_persisted(&self) -> Option<Vec<Category>> {
        match read_json::<Vec<Category>, _>(&self.path) {
            Ok(Some(categories)) if !categories.is_empty() => Some(categories),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Discarding unreadable category blob: {}", e);
                None
            }
        }
    }

    /// Save the full category list as the new source of truth
    pub fn save(&self, categories: &[Category]) -> Result<(), KakeiboError> {
        write_json_atomic(&self.path, &categories)
    }
}
