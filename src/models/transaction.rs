//! Transaction model
//!
//! A transaction is an immutable record of money coming in or going out.
//! The amount is always positive; its sign comes from the transaction type.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::date::TransactionDate;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Apply this type's sign to a positive amount
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "expenses" | "out" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,

    /// Positive amount; see [`Transaction::signed_amount`]
    pub amount: Money,

    pub description: String,

    /// When the transaction happened
    pub date: TransactionDate,

    /// Weak reference: the category may have been removed since
    pub category_id: CategoryId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        date: impl Into<TransactionDate>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            description: description.into(),
            date: date.into(),
            category_id,
            kind,
            created_at: Some(Utc::now()),
        }
    }

    /// Amount with the sign implied by the type
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    /// Interpreted timestamp, `None` when the stored date is unreadable
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.date.timestamp()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { "+" } else { "-" };
        write!(f, "{} {} {}{}", self.date, self.description, sign, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let cat = CategoryId::new();
        let income = Transaction::new(
            TransactionType::Income,
            Money::from_units(100),
            "Salary",
            march(1),
            cat,
        );
        let expense = Transaction::new(
            TransactionType::Expense,
            Money::from_units(40),
            "Groceries",
            march(2),
            cat,
        );

        assert_eq!(income.signed_amount().cents(), 10000);
        assert_eq!(expense.signed_amount().cents(), -4000);
        assert!(income.is_income());
        assert!(expense.is_expense());
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expenses".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(1250),
            "Coffee",
            march(5),
            CategoryId::new(),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["date"], "2024-03-05");
        assert!(value.get("categoryId").is_some());

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            TransactionType::Expense,
            Money::from_cents(5000),
            "Test Store",
            march(15),
            CategoryId::new(),
        );
        assert_eq!(txn.to_string(), "2024-03-15 Test Store -50.00");
    }
}
