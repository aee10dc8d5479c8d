//! CSV export
//!
//! Writes transactions as spreadsheet-compatible rows through the `csv`
//! crate, which takes care of quoting.

use std::io::Write;

use super::export_rows;
use crate::error::FinanceResult;
use crate::models::{Category, Transaction};

/// Export transactions to CSV, one row per transaction with a header row
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    categories: &[Category],
    writer: W,
) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in export_rows(transactions, categories) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    tracing::debug!(rows = transactions.len(), "exported transactions as CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKind, Money, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_export_transactions_csv() {
        let food = Category::new("Food, Drink", CategoryKind::Expense, "utensils", "#f97316");
        let transactions = vec![Transaction::new(
            TransactionType::Expense,
            Money::from_cents(1250),
            "Pizza \"large\"",
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            food.id,
        )];

        let mut output = Vec::new();
        export_transactions_csv(&transactions, &[food], &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        let mut lines = csv_string.lines();

        assert_eq!(lines.next(), Some("id,date,type,description,category,amount"));
        let row = lines.next().unwrap();
        assert!(row.contains("2024-03-09,expense,\"Pizza \"\"large\"\"\",\"Food, Drink\",12.50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_export_writes_nothing() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &[], &mut output).unwrap();
        assert!(output.is_empty());
    }
}
