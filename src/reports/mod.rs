//! Reports for the finance tracker
//!
//! Pure derivations over the stored transactions and categories: the
//! monthly summary, the running-balance series, category breakdowns, the
//! filtered transaction list and the dashboard that combines them.

pub mod balance_series;
pub mod category_breakdown;
pub mod dashboard;
pub mod date_range;
pub mod lookup;
pub mod summary;
pub mod transaction_filter;

pub use balance_series::{build_monthly_series, carry_forward_balance, DailyBalance};
pub use category_breakdown::{aggregate_by_category, breakdown_total, CategorySlice};
pub use dashboard::{Dashboard, RecentEntry};
pub use date_range::{date_in_range, in_range, month_bounds, resolve, DateFilter, DateRange};
pub use lookup::{CategoryIndex, UNKNOWN_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME};
pub use summary::{summarize, summarize_current, MonthlySummary, Trend};
pub use transaction_filter::{
    filter_transactions, recent_transactions, sort_newest_first, TransactionFilter, TypeFilter,
};
