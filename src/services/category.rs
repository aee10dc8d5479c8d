//! Category service
//!
//! Creation, lookup and guarded deletion of categories.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, CategoryKind, Icon, TransactionType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new category
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub kind: CategoryKind,
    pub icon: Icon,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            icon: Icon::default(),
            color: "#6366f1".to_string(),
        }
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a category
    pub fn create(&self, input: NewCategory) -> FinanceResult<Category> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("Category name cannot be empty".into()));
        }

        if self.storage.get_category_by_name(name)?.is_some() {
            return Err(FinanceError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(name, input.kind, input.icon, input.color.trim());
        category
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.insert_category(category.clone())?;
        self.storage.save()?;

        tracing::info!(id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> FinanceResult<Option<Category>> {
        self.storage.get_category(id)
    }

    /// Find a category by name, full ID or short ID
    ///
    /// Names win over IDs. A short ID shared by several categories is
    /// rejected with [`FinanceError::Ambiguous`].
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Category>> {
        if let Some(category) = self.storage.get_category_by_name(identifier)? {
            return Ok(Some(category));
        }

        let mut matches: Vec<Category> = self
            .storage
            .categories()?
            .into_iter()
            .filter(|c| c.id.matches(identifier))
            .collect();

        if matches.len() > 1 {
            return Err(FinanceError::Ambiguous {
                entity_type: "Category",
                identifier: identifier.trim().to_string(),
                count: matches.len(),
            });
        }
        Ok(matches.pop())
    }

    /// All categories in creation order
    pub fn list(&self) -> FinanceResult<Vec<Category>> {
        self.storage.categories()
    }

    /// Categories that can be assigned to a transaction of `kind`
    pub fn list_for(&self, kind: TransactionType) -> FinanceResult<Vec<Category>> {
        Ok(self
            .storage
            .categories()?
            .into_iter()
            .filter(|c| c.accepts(kind))
            .collect())
    }

    /// Delete a category that no transaction references
    ///
    /// A category in use is rejected with [`FinanceError::CategoryInUse`]
    /// and nothing is changed.
    pub fn delete(&self, id: CategoryId) -> FinanceResult<Category> {
        let category = self
            .storage
            .get_category(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;

        let count = self.storage.count_transactions_in_category(id)?;
        if count > 0 {
            tracing::warn!(id = %id, name = %category.name, count, "refused to delete category in use");
            return Err(FinanceError::CategoryInUse {
                name: category.name,
                count,
            });
        }

        self.storage.remove_category(id)?;
        self.storage.save()?;

        tracing::info!(id = %id, name = %category.name, "deleted category");
        Ok(category)
    }
}
