//! Category store
//!
//! Owns the canonical ordered category list for a session. On load it
//! reconciles whatever was persisted with the built-in default set, then
//! writes the result back as the new source of truth. Every successful
//! mutation persists best-effort: the in-memory list stays authoritative even
//! when the backing store keeps failing, so editing never blocks on I/O.

use crate::models::{default_categories, Category, MAX_CATEGORIES};
use crate::storage::CategoryRepository;

/// Reconcile persisted categories with the built-in defaults
///
/// Persisted entries come first in their stored order, so user renames and
/// reorderings survive reload. Defaults whose id is not already present are
/// appended after them, which makes categories shipped in an update visible
/// without overwriting customizations. The result is truncated to
/// [`MAX_CATEGORIES`] entries, even if the persisted data alone exceeded the
/// cap.
pub fn merge(persisted: Vec<Category>, defaults: &[Category]) -> Vec<Category> {
    let mut merged = persisted;
    let missing: Vec<Category> = defaults
        .iter()
        .filter(|d| merged.iter().all(|c| c.id != d.id))
        .cloned()
        .collect();
    merged.extend(missing);
    merged.truncate(MAX_CATEGORIES);
    merged
}

/// Session-scoped owner of the category list
pub struct CategoryStore<'a> {
    repo: &'a CategoryRepository,
    categories: Vec<Category>,
}

impl<'a> CategoryStore<'a> {
    /// Load the category list from the repository
    ///
    /// Missing, corrupt, or empty persisted state falls back to the 18
    /// defaults; existing state is merged with the defaults. The resolved
    /// list is persisted immediately as the new source of truth.
    pub fn load(repo: &'a CategoryRepository) -> Self {
        let categories = match repo.load_persisted() {
            Some(persisted) => merge(persisted, &default_categories()),
            None => default_categories(),
        };

        let store = Self { repo, categories };
        store.persist();
        store
    }

    /// The current ordered category list
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by its stable id
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Replace the label of the category matching `id`
    ///
    /// Order and all other entries are untouched. An absent id is a silent
    /// no-op. Returns whether a label actually changed; on change the full
    /// list is persisted.
    pub fn rename(&mut self, id: &str, new_label: &str) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.label = new_label.to_string();
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Write the full current list as the new source of truth, best-effort
    ///
    /// A failing store must never block category editing, so write errors
    /// are logged and swallowed; the in-memory list remains authoritative
    /// for the session.
    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.categories) {
            log::warn!("Failed to persist categories: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenseCategories.json");
        (temp_dir, CategoryRepository::new(path))
    }

    fn cats(ids: &[&str]) -> Vec<Category> {
        ids.iter().copied().map(Category::new).collect()
    }

    #[test]
    fn test_merge_respects_cap() {
        // Persisted data over the cap is truncated too
        let oversized: Vec<Category> =
            (0..30).map(|i| Category::new(format!("cat-{}", i))).collect();
        let merged = merge(oversized, &default_categories());
        assert_eq!(merged.len(), MAX_CATEGORIES);

        let merged = merge(Vec::new(), &default_categories());
        assert!(merged.len() <= MAX_CATEGORIES);
    }

    #[test]
    fn test_merge_persisted_first_order_preserved() {
        let persisted = cats(&["家賃", "食費"]);
        let merged = merge(persisted, &default_categories());

        assert_eq!(merged[0].id, "家賃");
        assert_eq!(merged[1].id, "食費");
        // Appended defaults keep their own relative order
        assert_eq!(merged[2].id, "交通費");
        assert_eq!(merged[3].id, "通信費");
    }

    #[test]
    fn test_merge_no_duplicate_ids() {
        let persisted = cats(&["食費", "交通費", "custom"]);
        let merged = merge(persisted, &default_categories());

        let ids: HashSet<_> = merged.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), merged.len());
    }

    #[test]
    fn test_merge_appends_exactly_the_missing_defaults() {
        // Partial overlap: two persisted ids are defaults, one is custom
        let persisted = cats(&["家賃", "custom", "食費"]);
        let merged = merge(persisted, &default_categories());
        assert_eq!(merged.len(), MAX_CATEGORIES);

        // Everything persisted survives, then the defaults minus the
        // overlap, in default order, up to the cap
        let appended: Vec<String> = merged[3..].iter().map(|c| c.id.clone()).collect();
        let missing: Vec<String> = default_categories()
            .into_iter()
            .filter(|c| c.id != "家賃" && c.id != "食費")
            .map(|c| c.id)
            .collect();
        assert_eq!(appended, missing[..appended.len()]);
    }

    #[test]
    fn test_merge_idempotent() {
        let persisted = cats(&["家賃", "custom"]);
        let defaults = default_categories();

        let once = merge(persisted, &defaults);
        let twice = merge(once.clone(), &defaults);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_keeps_renamed_labels() {
        let mut persisted = cats(&["食費"]);
        persisted[0].label = "ごはん".to_string();

        let merged = merge(persisted, &default_categories());
        assert_eq!(merged[0].id, "食費");
        assert_eq!(merged[0].label, "ごはん");
        // The default 食費 was not appended again
        assert_eq!(merged.iter().filter(|c| c.id == "食費").count(), 1);
    }

    #[test]
    fn test_bootstrap_returns_defaults_and_persists() {
        let (_temp_dir, repo) = test_repo();
        let blob_path = repo.path().clone();

        let store = CategoryStore::load(&repo);
        assert_eq!(store.categories(), default_categories().as_slice());

        // The bootstrap set was written back as the source of truth
        let written: Vec<Category> =
            serde_json::from_str(&fs::read_to_string(blob_path).unwrap()).unwrap();
        assert_eq!(written, default_categories());
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_defaults() {
        let (_temp_dir, repo) = test_repo();
        fs::write(repo.path(), "{not json").unwrap();

        let store = CategoryStore::load(&repo);
        assert_eq!(store.categories(), default_categories().as_slice());
    }

    #[test]
    fn test_rename_changes_only_matching_label() {
        let (_temp_dir, repo) = test_repo();
        let mut store = CategoryStore::load(&repo);

        assert!(store.rename("食費", "ごはん"));

        assert_eq!(store.get("食費").unwrap().label, "ごはん");
        assert_eq!(store.get("交通費").unwrap().label, "交通費");
        // Order untouched
        assert_eq!(store.categories()[0].id, "食費");
    }

    #[test]
    fn test_rename_unknown_id_is_noop() {
        let (_temp_dir, repo) = test_repo();
        let mut store = CategoryStore::load(&repo);

        let before = store.categories().to_vec();
        assert!(!store.rename("nonexistent", "x"));
        assert_eq!(store.categories(), before.as_slice());
    }

    #[test]
    fn test_rename_survives_reload() {
        let (_temp_dir, repo) = test_repo();

        let mut store = CategoryStore::load(&repo);
        store.rename("食費", "ごはん");
        drop(store);

        let store = CategoryStore::load(&repo);
        assert_eq!(store.get("食費").unwrap().label, "ごはん");
        assert_eq!(store.categories().len(), MAX_CATEGORIES);
    }

    #[test]
    fn test_editing_continues_when_store_is_broken() {
        // Point the repository at a path whose parent is a file, so every
        // write fails
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let repo = CategoryRepository::new(blocker.join("expenseCategories.json"));

        let mut store = CategoryStore::load(&repo);
        assert!(store.rename("食費", "ごはん"));
        assert_eq!(store.get("食費").unwrap().label, "ごはん");
    }
}
