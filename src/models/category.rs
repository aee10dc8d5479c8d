//! Category model
//!
//! Categories label transactions and carry the display metadata (icon and
//! color) used by breakdowns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::icon::Icon;
use super::ids::CategoryId;
use super::transaction::TransactionType;

/// Which transaction types may use a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    Both,
}

impl CategoryKind {
    /// Check whether a transaction of `kind` may reference this category
    pub fn accepts(&self, kind: TransactionType) -> bool {
        match self {
            Self::Both => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Both => write!(f, "both"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown category type '{}'", other)),
        }
    }
}

/// A user-defined category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(default)]
    pub icon: Icon,

    /// Display color token, usually a hex string
    pub color: String,

    #[serde(rename = "type")]
    pub kind: CategoryKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a new category with a fresh ID
    pub fn new(
        name: impl Into<String>,
        kind: CategoryKind,
        icon: impl Into<Icon>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            kind,
            created_at: Some(Utc::now()),
        }
    }

    pub fn accepts(&self, kind: TransactionType) -> bool {
        self.kind.accepts(kind)
    }

    /// Validate user-entered fields
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        if name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(name.chars().count()));
        }
        if self.color.trim().is_empty() {
            return Err(CategoryValidationError::EmptyColor);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long ({0} chars, max 50)")]
    NameTooLong(usize),
    #[error("Category color cannot be empty")]
    EmptyColor,
}
