//! Core data models for the finance tracker
//!
//! Transactions and categories are plain value records. They are created by
//! the services layer, never edited in place, and read by the reports.

pub mod category;
pub mod date;
pub mod icon;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryKind, CategoryValidationError};
pub use date::TransactionDate;
pub use icon::{Icon, PLACEHOLDER_GLYPH};
pub use ids::{CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
