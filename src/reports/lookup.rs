//! Category lookup by ID
//!
//! Transactions reference categories weakly, so every lookup is optional.

use std::collections::HashMap;

use crate::models::{Category, CategoryId};

/// Name shown for a category that no longer exists
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// Neutral gray used for a category that no longer exists
pub const UNKNOWN_CATEGORY_COLOR: &str = "#888888";

/// Borrowed index over a category list
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<CategoryId, &'a Category>,
}

impl<'a> CategoryIndex<'a> {
    /// Index `categories`; on duplicate IDs the first entry wins
    pub fn new(categories: &'a [Category]) -> Self {
        let mut by_id = HashMap::with_capacity(categories.len());
        for category in categories {
            by_id.entry(category.id).or_insert(category);
        }
        Self { by_id }
    }

    pub fn resolve(&self, id: CategoryId) -> Option<&'a Category> {
        self.by_id.get(&id).copied()
    }

    /// Category name, or "Unknown" for a dangling reference
    pub fn name_of(&self, id: CategoryId) -> &'a str {
        self.resolve(id)
            .map_or(UNKNOWN_CATEGORY_NAME, |category| category.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind;

    #[test]
    fn test_resolve_and_fallback() {
        let categories = vec![Category::new("Rent", CategoryKind::Expense, "home", "#ef4444")];
        let index = CategoryIndex::new(&categories);

        assert_eq!(index.resolve(categories[0].id).map(|c| c.name.as_str()), Some("Rent"));
        assert_eq!(index.name_of(categories[0].id), "Rent");

        let missing = CategoryId::new();
        assert!(index.resolve(missing).is_none());
        assert_eq!(index.name_of(missing), UNKNOWN_CATEGORY_NAME);
    }
}
