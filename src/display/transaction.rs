//! Transaction display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::truncate;
use crate::config::Settings;
use crate::models::{Category, Transaction, PLACEHOLDER_GLYPH};
use crate::reports::{CategoryIndex, UNKNOWN_CATEGORY_NAME};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, amounts signed by type
pub fn format_transaction_table(
    transactions: &[Transaction],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let index = CategoryIndex::new(categories);
    let rows = transactions.iter().map(|txn| {
        let category = match index.resolve(txn.category_id) {
            Some(category) => format!("{} {}", category.icon.glyph(), category.name),
            None => format!("{} {}", PLACEHOLDER_GLYPH, UNKNOWN_CATEGORY_NAME),
        };
        let sign = if txn.is_income() { "+" } else { "-" };
        TransactionRow {
            id: txn.id.short(),
            date: txn.date.format_day(&settings.date_format),
            description: truncate(&txn.description, 32),
            category,
            amount: format!("{}{}", sign, txn.amount.format_with_symbol(&settings.currency_symbol)),
        }
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, CategoryKind, Money, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_format_transaction_table() {
        let food = Category::new("Food", CategoryKind::Expense, "utensils", "#f97316");
        let transactions = vec![
            Transaction::new(
                TransactionType::Expense,
                Money::from_cents(5000),
                "Test Store",
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                food.id,
            ),
            Transaction::new(
                TransactionType::Income,
                Money::from_units(20),
                "Refund",
                NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(),
                CategoryId::new(),
            ),
        ];

        let output = format_transaction_table(&transactions, &[food], &Settings::default());
        assert!(output.contains("Mar 15, 2024"));
        assert!(output.contains("Test Store"));
        assert!(output.contains("-$50.00"));
        assert!(output.contains("+$20.00"));
        assert!(output.contains("Unknown"));
    }

    #[test]
    fn test_empty_table() {
        let output = format_transaction_table(&[], &[], &Settings::default());
        assert_eq!(output, "No transactions found.\n");
    }
}
