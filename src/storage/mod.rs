//! Storage layer for kakeibo
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Only categories are persisted; the expense ledger lives in
//! memory for the duration of a session.

pub mod categories;
pub mod file_io;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::KakeiboPaths;
use crate::error::KakeiboError;

/// Main storage coordinator
pub struct Storage {
    paths: KakeiboPaths,
    pub categories: CategoryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: KakeiboPaths) -> Result<Self, KakeiboError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &KakeiboPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("kakeibo");
        let paths = KakeiboPaths::with_base_dir(base.clone());

        let storage = Storage::new(paths).unwrap();
        assert!(base.exists());
        assert_eq!(
            storage.categories.path(),
            &storage.paths().categories_file()
        );
    }
}
