//! Category model and the built-in default set
//!
//! A category is a named bucket expenses are filed under. Its `id` is an
//! opaque stable key fixed at creation; only the `label` may change, so a
//! rename never disturbs the identity used by the persisted blob.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The store never holds more than this many categories.
///
/// Matches the size of the default set; there is no structural reason for the
/// exact value.
pub const MAX_CATEGORIES: usize = 18;

/// A spending category on the entry panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque stable key, unique within the store, never reassigned
    pub id: String,

    /// Human-readable display text, mutable via rename
    pub label: String,
}

impl Category {
    /// Create a new category with identical id and label text
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let label = id.clone();
        Self { id, label }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Id/label text of the 18 built-in household categories, in display order
const DEFAULT_CATEGORY_IDS: [&str; MAX_CATEGORIES] = [
    "食費",
    "交通費",
    "通信費",
    "水道光熱費",
    "家賃",
    "日用品",
    "交際費",
    "趣味・娯楽",
    "教育・教養",
    "医療費",
    "保険",
    "その他",
    "美容・衣類",
    "家具・家電",
    "税金・社会保険",
    "ペット関連",
    "慶弔費",
    "旅行",
];

/// The built-in default category set, used when no persisted state exists
/// and as the merge source for newly shipped categories
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORY_IDS.iter().copied().map(Category::new).collect()
}
