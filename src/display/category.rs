//! Category display formatting
//!
//! Formats the category panel for terminal output.

use crate::models::Category;

/// Format the category list as a numbered menu
///
/// Numbers are 1-based so they match what the entry session expects. When a
/// category has been renamed, the stable id is shown alongside the label.
pub fn format_category_menu(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let mut output = String::new();
    for (i, category) in categories.iter().enumerate() {
        if category.label == category.id {
            output.push_str(&format!("{:>3}. {}\n", i + 1, category.label));
        } else {
            output.push_str(&format!("{:>3}. {} [{}]\n", i + 1, category.label, category.id));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    #[test]
    fn test_menu_numbers_from_one() {
        let menu = format_category_menu(&default_categories());
        assert!(menu.starts_with("  1. 食費\n"));
        assert!(menu.contains(" 18. 旅行\n"));
    }

    #[test]
    fn test_renamed_category_shows_id() {
        let mut categories = default_categories();
        categories[0].label = "ごはん".to_string();

        let menu = format_category_menu(&categories);
        assert!(menu.contains("  1. ごはん [食費]"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_category_menu(&[]), "No categories found.");
    }
}
