//! Service layer for the finance tracker
//!
//! The service layer provides the mutations on top of the storage layer:
//! input validation, reference checks and persistence after each change.

pub mod category;
pub mod transaction;

pub use category::{CategoryService, NewCategory};
pub use transaction::{NewTransaction, TransactionService};
pub use crate::storage::init::initialize_defaults;
