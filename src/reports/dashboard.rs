//! Dashboard report
//!
//! Bundles everything the overview screen shows for the month containing
//! `now`: the summary cards, the running-balance series, both category
//! breakdowns and the most recent transactions.

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;

use super::balance_series::{build_monthly_series, DailyBalance};
use super::category_breakdown::{aggregate_by_category, CategorySlice};
use super::lookup::CategoryIndex;
use super::summary::{summarize, MonthlySummary};
use super::transaction_filter::recent_transactions;
use crate::models::{Category, Transaction, TransactionType};

/// Snapshot of the overview for one month
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: MonthlySummary,
    pub series: Vec<DailyBalance>,
    pub income_breakdown: Vec<CategorySlice>,
    pub expense_breakdown: Vec<CategorySlice>,
    pub recent: Vec<RecentEntry>,
}

/// A recent transaction with its category resolved
#[derive(Debug, Clone, Serialize)]
pub struct RecentEntry {
    pub transaction: Transaction,
    pub category_name: String,
}

impl Dashboard {
    /// Build the dashboard for the month containing `now`
    ///
    /// Breakdowns cover every stored transaction, matching the overview
    /// charts. Summary and series are scoped to the month.
    pub fn generate(
        transactions: &[Transaction],
        categories: &[Category],
        now: NaiveDateTime,
        recent_limit: usize,
    ) -> Self {
        let (year, month) = (now.year(), now.month());
        let index = CategoryIndex::new(categories);

        let recent = recent_transactions(transactions, recent_limit)
            .into_iter()
            .map(|transaction| RecentEntry {
                category_name: index.name_of(transaction.category_id).to_string(),
                transaction,
            })
            .collect();

        Self {
            summary: summarize(transactions, year, month),
            series: build_monthly_series(transactions, year, month),
            income_breakdown: aggregate_by_category(transactions, categories, TransactionType::Income),
            expense_breakdown: aggregate_by_category(transactions, categories, TransactionType::Expense),
            recent,
        }
    }

    /// Month title such as `March 2024`
    pub fn title(&self) -> String {
        chrono::NaiveDate::from_ymd_opt(self.summary.year, self.summary.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.summary.year, self.summary.month))
    }
}
