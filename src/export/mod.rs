//! Export module for the finance tracker
//!
//! Writes a (usually filtered) transaction list in one of two formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: rows plus totals and export metadata

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_transactions_json, TransactionExport, EXPORT_SCHEMA_VERSION};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Transaction};
use crate::reports::CategoryIndex;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown export format '{}'", other)),
        }
    }
}

/// One exported transaction with its category resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub category: String,
    /// Unsigned amount, two decimals
    pub amount: String,
}

/// Flatten transactions into export rows, keeping their order
pub fn export_rows(transactions: &[Transaction], categories: &[Category]) -> Vec<ExportRow> {
    let index = CategoryIndex::new(categories);
    transactions
        .iter()
        .map(|txn| ExportRow {
            id: txn.id.to_string(),
            date: txn.date.raw().to_string(),
            kind: txn.kind.to_string(),
            description: txn.description.clone(),
            category: index.name_of(txn.category_id).to_string(),
            amount: txn.amount.to_string(),
        })
        .collect()
}
