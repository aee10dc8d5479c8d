//! Monthly income/expense summary

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use crate::models::{Money, Transaction, TransactionType};

/// Sign of a balance; zero counts as positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    pub fn of(balance: Money) -> Self {
        if balance.is_negative() {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub income: Money,
    pub expenses: Money,
    /// `income - expenses`
    pub balance: Money,
    pub trend: Trend,
    /// Number of transactions that fell in the month
    pub transaction_count: usize,
}

/// Summarize the transactions dated in `year`/`month`
///
/// Transactions whose date cannot be interpreted are left out.
pub fn summarize(transactions: &[Transaction], year: i32, month: u32) -> MonthlySummary {
    let mut income = Money::zero();
    let mut expenses = Money::zero();
    let mut transaction_count = 0;

    let in_month = transactions.iter().filter(|txn| {
        txn.date
            .day()
            .is_some_and(|day| day.year() == year && day.month() == month)
    });

    for txn in in_month {
        match txn.kind {
            TransactionType::Income => income += txn.amount,
            TransactionType::Expense => expenses += txn.amount,
        }
        transaction_count += 1;
    }

    let balance = income - expenses;
    MonthlySummary {
        year,
        month,
        income,
        expenses,
        balance,
        trend: Trend::of(balance),
        transaction_count,
    }
}

/// Summarize the calendar month containing `now`
pub fn summarize_current(transactions: &[Transaction], now: NaiveDateTime) -> MonthlySummary {
    summarize(transactions, now.year(), now.month())
}
