//! JSON export
//!
//! Exports a transaction list with totals and schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use super::{export_rows, ExportRow};
use crate::error::FinanceResult;
use crate::models::{Category, Money, Transaction, TransactionType};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// JSON export document
#[derive(Debug, Clone, Serialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expenses: Money,

    pub transactions: Vec<ExportRow>,
}

impl TransactionExport {
    pub fn new(transactions: &[Transaction], categories: &[Category]) -> Self {
        let total = |kind: TransactionType| -> Money {
            transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            total_income: total(TransactionType::Income),
            total_expenses: total(TransactionType::Expense),
            transactions: export_rows(transactions, categories),
        }
    }
}

/// Export transactions as pretty-printed JSON
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    categories: &[Category],
    mut writer: W,
) -> FinanceResult<()> {
    let export = TransactionExport::new(transactions, categories);
    serde_json::to_writer_pretty(&mut writer, &export)?;
    writeln!(writer)?;
    tracing::debug!(rows = export.transaction_count, "exported transactions as JSON");
    Ok(())
}
