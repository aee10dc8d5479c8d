//! Day-by-day running balance across a calendar month
//!
//! The series is seeded with the carry-forward balance (the net of every
//! transaction before the month) and then walks the month one day at a time.
//!
//! `balance` is floored at zero for charting: a negative running balance is
//! drawn as zero. This is a display choice, not an accounting value. Use
//! `true_balance` wherever the signed figure matters.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::date_range::{month_bounds, start_of_day};
use crate::models::{Money, Transaction, TransactionType};

/// One day of the monthly series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    /// Axis label such as `Mar 05`
    pub label: String,
    pub income: Money,
    pub expense: Money,
    /// Running balance floored at zero
    pub balance: Money,
    /// Signed running balance
    pub true_balance: Money,
}

/// Net signed sum of all transactions strictly before `first_day`
pub fn carry_forward_balance(transactions: &[Transaction], first_day: NaiveDate) -> Money {
    let cutoff = start_of_day(first_day);
    transactions
        .iter()
        .filter(|txn| txn.timestamp().is_some_and(|ts| ts < cutoff))
        .map(Transaction::signed_amount)
        .sum()
}

/// Build the series for `year`/`month`, one entry per calendar day
///
/// An invalid month yields an empty series.
pub fn build_monthly_series(transactions: &[Transaction], year: i32, month: u32) -> Vec<DailyBalance> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };

    let mut per_day: HashMap<NaiveDate, (Money, Money)> = HashMap::new();
    for txn in transactions {
        let Some(day) = txn.date.day() else {
            continue;
        };
        if day < first || day > last {
            continue;
        }
        let totals = per_day.entry(day).or_default();
        match txn.kind {
            TransactionType::Income => totals.0 += txn.amount,
            TransactionType::Expense => totals.1 += txn.amount,
        }
    }

    let mut running = carry_forward_balance(transactions, first);

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|day| {
            let (income, expense) = per_day.get(&day).copied().unwrap_or_default();
            running += income;
            running -= expense;
            DailyBalance {
                date: day,
                label: day.format("%b %d").to_string(),
                income,
                expense,
                balance: running.floor_zero(),
                true_balance: running,
            }
        })
        .collect()
}
