//! Report CLI commands

use chrono::Datelike;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_breakdown, format_dashboard, format_series, format_summary};
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::reports::{aggregate_by_category, build_monthly_series, month_bounds, summarize, Dashboard};
use crate::storage::Storage;

/// Parse a `YYYY-MM` month argument
pub fn parse_month(value: &str) -> FinanceResult<(i32, u32)> {
    let invalid = || FinanceError::Validation(format!("Invalid month '{}', expected YYYY-MM", value));

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    month_bounds(year, month).ok_or_else(invalid)?;
    Ok((year, month))
}

fn resolve_month(month: Option<&str>, clock: &dyn Clock) -> FinanceResult<(i32, u32)> {
    match month {
        Some(value) => parse_month(value),
        None => {
            let today = clock.now().date();
            Ok((today.year(), today.month()))
        }
    }
}

/// Print the income/expense summary for a month
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    month: Option<&str>,
) -> FinanceResult<()> {
    let (year, month) = resolve_month(month, clock)?;
    let summary = summarize(&storage.transactions()?, year, month);
    print!("{}", format_summary(&summary, settings));
    Ok(())
}

/// Print the daily running balance for a month
pub fn handle_series_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    month: Option<&str>,
    all_days: bool,
) -> FinanceResult<()> {
    let (year, month) = resolve_month(month, clock)?;
    let series = build_monthly_series(&storage.transactions()?, year, month);
    println!("Running balance: {}-{:02}", year, month);
    print!("{}", format_series(&series, settings, all_days));
    Ok(())
}

/// Print per-category totals for one transaction type
pub fn handle_breakdown_command(
    storage: &Storage,
    settings: &Settings,
    kind: TransactionType,
) -> FinanceResult<()> {
    let data = storage.snapshot()?;
    let slices = aggregate_by_category(&data.transactions, &data.categories, kind);
    print!("{}", format_breakdown(&slices, kind, settings));
    Ok(())
}

/// Print the dashboard for the current month
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
) -> FinanceResult<()> {
    let data = storage.snapshot()?;
    let dashboard = Dashboard::generate(
        &data.transactions,
        &data.categories,
        clock.now(),
        settings.recent_limit,
    );
    print!("{}", format_dashboard(&dashboard, settings));
    Ok(())
}
