//! Transaction service
//!
//! Validated creation, lookup and deletion of transactions.

use chrono::Utc;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryId, Money, Transaction, TransactionDate, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub description: String,
    pub date: TransactionDate,
    pub category_id: CategoryId,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and persist a new transaction
    pub fn create(&self, input: NewTransaction) -> FinanceResult<Transaction> {
        if !input.amount.is_positive() {
            return Err(FinanceError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        let description = input.description.trim();
        if description.is_empty() {
            return Err(FinanceError::Validation("Description cannot be empty".into()));
        }

        if input.date.timestamp().is_none() {
            return Err(FinanceError::Validation(format!(
                "Invalid date '{}'",
                input.date
            )));
        }

        let category = self
            .storage
            .get_category(input.category_id)?
            .ok_or_else(|| FinanceError::category_not_found(input.category_id.to_string()))?;

        if !category.accepts(input.kind) {
            return Err(FinanceError::Validation(format!(
                "Category '{}' is for {} transactions, not {}",
                category.name,
                category.kind,
                input.kind
            )));
        }

        let mut txn = Transaction::new(
            input.kind,
            input.amount,
            description,
            input.date,
            input.category_id,
        );
        txn.created_at = Some(Utc::now());

        self.storage.insert_transaction(txn.clone())?;
        self.storage.save()?;

        tracing::info!(id = %txn.id, amount = %txn.amount, kind = %txn.kind, "created transaction");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.get_transaction(id)
    }

    /// Find a transaction by full or short ID
    ///
    /// A short ID shared by several transactions is rejected with
    /// [`FinanceError::Ambiguous`].
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        let mut matches: Vec<Transaction> = self
            .storage
            .transactions()?
            .into_iter()
            .filter(|t| t.id.matches(identifier))
            .collect();

        if matches.len() > 1 {
            return Err(FinanceError::Ambiguous {
                entity_type: "Transaction",
                identifier: identifier.trim().to_string(),
                count: matches.len(),
            });
        }
        Ok(matches.pop())
    }

    /// All transactions in insertion order
    pub fn list(&self) -> FinanceResult<Vec<Transaction>> {
        self.storage.transactions()
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .remove_transaction(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
        self.storage.save()?;

        tracing::info!(id = %id, "deleted transaction");
        Ok(txn)
    }
}
