//! Per-category totals for one transaction type
//!
//! Used for the income and expense breakdown charts. Slices are ranked by
//! value, largest first, with the category ID as a tiebreak so the order is
//! reproducible.

use std::collections::HashMap;

use serde::Serialize;

use super::lookup::{CategoryIndex, UNKNOWN_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME};
use crate::models::{Category, CategoryId, Icon, Money, Transaction, TransactionType};

/// One category's share of the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub category_id: CategoryId,
    pub name: String,
    pub value: Money,
    pub color: String,
    pub icon: Icon,
    pub transaction_count: usize,
}

impl CategorySlice {
    /// Share of `total` as a percentage
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.value.cents() as f64 / total.cents() as f64 * 100.0
        }
    }
}

/// Group transactions of `kind` by category and rank the totals
pub fn aggregate_by_category(
    transactions: &[Transaction],
    categories: &[Category],
    kind: TransactionType,
) -> Vec<CategorySlice> {
    let mut totals: HashMap<CategoryId, (Money, usize)> = HashMap::new();
    for txn in transactions.iter().filter(|txn| txn.kind == kind) {
        let entry = totals.entry(txn.category_id).or_default();
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let index = CategoryIndex::new(categories);
    let mut slices: Vec<CategorySlice> = totals
        .into_iter()
        .map(|(category_id, (value, transaction_count))| match index.resolve(category_id) {
            Some(category) => CategorySlice {
                category_id,
                name: category.name.clone(),
                value,
                color: category.color.clone(),
                icon: category.icon.clone(),
                transaction_count,
            },
            None => CategorySlice {
                category_id,
                name: UNKNOWN_CATEGORY_NAME.to_string(),
                value,
                color: UNKNOWN_CATEGORY_COLOR.to_string(),
                icon: Icon::Unknown,
                transaction_count,
            },
        })
        .collect();

    slices.sort_by(|a, b| {
        b.value
            .cmp(&a.value)
            .then_with(|| a.category_id.cmp(&b.category_id))
    });
    slices
}

/// Sum of all slice values
pub fn breakdown_total(slices: &[CategorySlice]) -> Money {
    slices.iter().map(|slice| slice.value).sum()
}
