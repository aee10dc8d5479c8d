//! First-run setup
//!
//! Seeds a starter category set into an empty dataset.

use crate::error::FinanceResult;
use crate::models::{Category, CategoryKind};

use super::Storage;

/// Starter categories: name, type, icon key, color
const DEFAULT_CATEGORIES: &[(&str, CategoryKind, &str, &str)] = &[
    ("Salary", CategoryKind::Income, "briefcase", "#10b981"),
    ("Investments", CategoryKind::Income, "trending-up", "#3b82f6"),
    ("Gifts", CategoryKind::Both, "gift", "#ec4899"),
    ("Groceries", CategoryKind::Expense, "shopping-cart", "#22c55e"),
    ("Dining Out", CategoryKind::Expense, "utensils", "#f97316"),
    ("Housing", CategoryKind::Expense, "home", "#ef4444"),
    ("Transportation", CategoryKind::Expense, "car", "#eab308"),
    ("Utilities", CategoryKind::Expense, "zap", "#8b5cf6"),
    ("Health", CategoryKind::Expense, "heart", "#f43f5e"),
    ("Entertainment", CategoryKind::Expense, "film", "#06b6d4"),
];

/// Seed the starter categories if the dataset has none
///
/// Returns the number of categories created.
pub fn initialize_defaults(storage: &Storage) -> FinanceResult<usize> {
    if !storage.categories()?.is_empty() {
        return Ok(0);
    }

    for (name, kind, icon, color) in DEFAULT_CATEGORIES {
        storage.insert_category(Category::new(*name, *kind, *icon, *color))?;
    }
    storage.save()?;

    tracing::info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Icon, TransactionType};

    #[test]
    fn test_seeds_once() {
        let storage = Storage::in_memory();
        assert_eq!(initialize_defaults(&storage).unwrap(), DEFAULT_CATEGORIES.len());
        assert_eq!(initialize_defaults(&storage).unwrap(), 0);

        let categories = storage.categories().unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert!(categories.iter().all(|c| c.validate().is_ok()));
        assert!(categories.iter().all(|c| c.icon != Icon::Unknown));
        assert!(categories.iter().any(|c| c.accepts(TransactionType::Income)));
    }

    #[test]
    fn test_existing_categories_are_left_alone() {
        let storage = Storage::in_memory();
        storage
            .insert_category(Category::new("Mine", CategoryKind::Both, "wallet", "#000000"))
            .unwrap();
        assert_eq!(initialize_defaults(&storage).unwrap(), 0);
        assert_eq!(storage.categories().unwrap().len(), 1);
    }
}
