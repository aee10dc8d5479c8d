//! Search, type and date filtering for the transaction list

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::date_range::{date_in_range, resolve, DateFilter};
use super::lookup::CategoryIndex;
use crate::models::{Category, Transaction, TransactionType};

/// Restrict by transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionType::Income,
            Self::Expense => kind == TransactionType::Expense,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(Self::All),
            other => other
                .parse::<TransactionType>()
                .map(Self::from)
                .map_err(|_| format!("unknown transaction type '{}'", s.trim())),
        }
    }
}

/// The three filter controls of the transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Case-insensitive substring; empty matches everything
    pub search_term: String,
    pub type_filter: TypeFilter,
    pub date_filter: DateFilter,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn of_type(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn during(mut self, date_filter: DateFilter) -> Self {
        self.date_filter = date_filter;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.type_filter == TypeFilter::All
            && self.date_filter == DateFilter::All
    }
}

/// Apply `filter` and order the survivors newest first
///
/// A transaction matches the search when its description or its category's
/// name contains the term, ignoring case. Whitespace in the term is matched
/// literally. Transactions with an unreadable date sort after all others.
pub fn filter_transactions(
    transactions: &[Transaction],
    categories: &[Category],
    filter: &TransactionFilter,
    now: NaiveDateTime,
) -> Vec<Transaction> {
    let index = CategoryIndex::new(categories);
    let range = resolve(filter.date_filter, now);
    let needle = filter.search_term.to_lowercase();

    let mut matched: Vec<Transaction> = transactions
        .iter()
        .filter(|txn| filter.type_filter.matches(txn.kind))
        .filter(|txn| date_in_range(&txn.date, range.as_ref()))
        .filter(|txn| {
            needle.is_empty()
                || txn.description.to_lowercase().contains(&needle)
                || index
                    .resolve(txn.category_id)
                    .is_some_and(|category| category.name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    sort_newest_first(&mut matched);
    matched
}

/// The `limit` most recent transactions
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sort_newest_first(&mut sorted);
    sorted.truncate(limit);
    sorted
}

/// Stable sort, descending by timestamp, unreadable dates last
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| match (a.timestamp(), b.timestamp()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, CategoryKind, Money, TransactionDate};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn txn(kind: TransactionType, description: &str, date: &str, category_id: CategoryId) -> Transaction {
        Transaction::new(
            kind,
            Money::from_units(10),
            description,
            TransactionDate::from_raw(date),
            category_id,
        )
    }

    fn fixture() -> (Vec<Category>, Vec<Transaction>) {
        let categories = vec![
            Category::new("Groceries", CategoryKind::Expense, "shopping-cart", "#22c55e"),
            Category::new("Salary", CategoryKind::Income, "briefcase", "#10b981"),
        ];
        let transactions = vec![
            txn(TransactionType::Expense, "Weekly shop", "2024-03-10", categories[0].id),
            txn(TransactionType::Expense, "Bus fare", "2024-03-14", CategoryId::new()),
            txn(TransactionType::Income, "March pay", "2024-03-01", categories[1].id),
            txn(TransactionType::Expense, "Organic GROCERIES run", "2024-02-20", CategoryId::new()),
        ];
        (categories, transactions)
    }

    fn descriptions(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_sorted() {
        let (categories, transactions) = fixture();
        let result = filter_transactions(&transactions, &categories, &TransactionFilter::new(), now());
        assert_eq!(
            descriptions(&result),
            vec!["Bus fare", "Weekly shop", "March pay", "Organic GROCERIES run"]
        );
    }

    #[test]
    fn test_search_matches_description_or_category_name() {
        let (categories, transactions) = fixture();
        let filter = TransactionFilter::new().search("groceries");
        let result = filter_transactions(&transactions, &categories, &filter, now());
        assert_eq!(descriptions(&result), vec!["Weekly shop", "Organic GROCERIES run"]);
    }

    #[test]
    fn test_search_with_date_and_type() {
        let (categories, transactions) = fixture();
        let filter = TransactionFilter::new()
            .search("GROCERIES")
            .of_type(TypeFilter::Expense)
            .during(DateFilter::ThisMonth);
        let result = filter_transactions(&transactions, &categories, &filter, now());
        assert_eq!(descriptions(&result), vec!["Weekly shop"]);

        let income = TransactionFilter::new().of_type(TypeFilter::Income);
        let result = filter_transactions(&transactions, &categories, &income, now());
        assert_eq!(descriptions(&result), vec!["March pay"]);
    }

    #[test]
    fn test_search_whitespace_is_literal() {
        let id = CategoryId::new();
        let transactions = vec![
            txn(TransactionType::Expense, "Weekly shop", "2024-03-10", id),
            txn(TransactionType::Expense, "Rent", "2024-03-01", id),
        ];

        let trailing = TransactionFilter::new().search("shop ");
        assert!(filter_transactions(&transactions, &[], &trailing, now()).is_empty());
        assert!(!trailing.is_empty());

        let blank = TransactionFilter::new().search(" ");
        let result = filter_transactions(&transactions, &[], &blank, now());
        assert_eq!(descriptions(&result), vec!["Weekly shop"]);
    }

    #[test]
    fn test_unknown_category_is_not_searchable_by_name() {
        let (categories, transactions) = fixture();
        let filter = TransactionFilter::new().search("unknown");
        assert!(filter_transactions(&transactions, &categories, &filter, now()).is_empty());
    }

    #[test]
    fn test_unreadable_dates_sort_last() {
        let id = CategoryId::new();
        let transactions = vec![
            txn(TransactionType::Expense, "broken", "someday", id),
            txn(TransactionType::Expense, "old", "2020-01-01", id),
            txn(TransactionType::Expense, "new", "2024-03-01T08:00:00", id),
        ];
        let result = filter_transactions(&transactions, &[], &TransactionFilter::new(), now());
        assert_eq!(descriptions(&result), vec!["new", "old", "broken"]);

        let bounded = TransactionFilter::new().during(DateFilter::ThisYear);
        let result = filter_transactions(&transactions, &[], &bounded, now());
        assert_eq!(descriptions(&result), vec!["new"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let (categories, transactions) = fixture();
        let filter = TransactionFilter::new()
            .search("s")
            .of_type(TypeFilter::Expense)
            .during(DateFilter::ThisYear);
        let once = filter_transactions(&transactions, &categories, &filter, now());
        let twice = filter_transactions(&once, &categories, &filter, now());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recent_transactions() {
        let (_, transactions) = fixture();
        let recent = recent_transactions(&transactions, 2);
        assert_eq!(descriptions(&recent), vec!["Bus fare", "Weekly shop"]);
        assert!(recent_transactions(&transactions, 0).is_empty());
        assert_eq!(recent_transactions(&transactions, 10).len(), 4);
    }

    #[test]
    fn test_parse_type_filter() {
        assert_eq!("all".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert_eq!("Income".parse::<TypeFilter>(), Ok(TypeFilter::Income));
        assert_eq!("expense".parse::<TypeFilter>(), Ok(TypeFilter::Expense));
        assert!("transfer".parse::<TypeFilter>().is_err());
    }
}
