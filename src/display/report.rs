//! Report display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::truncate;
use crate::config::Settings;
use crate::models::TransactionType;
use crate::reports::{breakdown_total, CategorySlice, DailyBalance, Dashboard, MonthlySummary};

/// Format the monthly summary cards
pub fn format_summary(summary: &MonthlySummary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!(
        "Summary: {}-{:02} ({} transactions)\n",
        summary.year, summary.month, summary.transaction_count
    ));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:<16} {:>15}\n",
        "Income:",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16} {:>15}\n",
        "Expenses:",
        summary.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<16} {:>15} ({})\n",
        "Balance:",
        summary.balance.format_with_symbol(symbol),
        summary.trend
    ));
    output
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Day")]
    label: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format the daily series; days with no activity are skipped unless `all_days`
pub fn format_series(series: &[DailyBalance], settings: &Settings, all_days: bool) -> String {
    let symbol = settings.currency_symbol.as_str();
    let rows: Vec<SeriesRow> = series
        .iter()
        .filter(|day| all_days || !day.income.is_zero() || !day.expense.is_zero())
        .map(|day| SeriesRow {
            label: day.label.clone(),
            income: day.income.format_with_symbol(symbol),
            expense: day.expense.format_with_symbol(symbol),
            balance: day.true_balance.format_with_symbol(symbol),
        })
        .collect();

    if rows.is_empty() {
        return "No activity this month.\n".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    format!("{}\n", table)
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Txns")]
    count: usize,
    #[tabled(rename = "Amount")]
    value: String,
    #[tabled(rename = "%")]
    share: String,
}

/// Format a category breakdown with each slice's share of the total
pub fn format_breakdown(slices: &[CategorySlice], kind: TransactionType, settings: &Settings) -> String {
    if slices.is_empty() {
        return format!("No {} transactions found.\n", kind);
    }

    let symbol = settings.currency_symbol.as_str();
    let total = breakdown_total(slices);
    let rows = slices.iter().map(|slice| BreakdownRow {
        icon: slice.icon.glyph().to_string(),
        name: slice.name.clone(),
        count: slice.transaction_count,
        value: slice.value.format_with_symbol(symbol),
        share: format!("{:.1}", slice.percentage_of(total)),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
    format!("{}\nTotal: {}\n", table, total.format_with_symbol(symbol))
}

/// Format the dashboard overview
pub fn format_dashboard(dashboard: &Dashboard, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let summary = &dashboard.summary;
    let mut output = String::new();

    output.push_str(&format!("Dashboard: {}\n", dashboard.title()));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:<20} {:>15}\n",
        "Total Income:",
        summary.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {:>15}\n",
        "Total Expenses:",
        summary.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:<20} {:>15} ({})\n",
        "Balance:",
        summary.balance.format_with_symbol(symbol),
        summary.trend
    ));

    if let Some(last) = dashboard.series.last() {
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "Month-end balance:",
            last.true_balance.format_with_symbol(symbol)
        ));
    }

    write_slices(&mut output, "Income by Category", &dashboard.income_breakdown, symbol);
    write_slices(&mut output, "Expenses by Category", &dashboard.expense_breakdown, symbol);

    output.push_str("\nRecent Transactions\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if dashboard.recent.is_empty() {
        output.push_str("  No transactions yet\n");
    }
    for entry in &dashboard.recent {
        let txn = &entry.transaction;
        output.push_str(&format!(
            "  {:<14} {:<22} {:<12} {:>10}\n",
            txn.date.format_day(&settings.date_format),
            truncate(&txn.description, 22),
            truncate(&entry.category_name, 12),
            txn.signed_amount().format_with_symbol(symbol)
        ));
    }

    output
}

fn write_slices(output: &mut String, heading: &str, slices: &[CategorySlice], symbol: &str) {
    output.push_str(&format!("\n{}\n", heading));
    output.push_str(&"-".repeat(60));
    output.push('\n');
    if slices.is_empty() {
        output.push_str("  No data\n");
        return;
    }

    let total = breakdown_total(slices);
    for slice in slices {
        output.push_str(&format!(
            "  {} {:<30} {:>12} {:>7.1}%\n",
            slice.icon.glyph(),
            truncate(&slice.name, 30),
            slice.value.format_with_symbol(symbol),
            slice.percentage_of(total)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, CategoryKind, Money, Transaction};
    use crate::reports::{aggregate_by_category, build_monthly_series, summarize};
    use chrono::NaiveDate;

    fn sample() -> (Vec<Category>, Vec<Transaction>) {
        let salary = Category::new("Salary", CategoryKind::Income, "briefcase", "#10b981");
        let food = Category::new("Food", CategoryKind::Expense, "utensils", "#f97316");
        let transactions = vec![
            Transaction::new(
                TransactionType::Income,
                Money::from_units(100),
                "Pay",
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                salary.id,
            ),
            Transaction::new(
                TransactionType::Expense,
                Money::from_units(40),
                "Groceries at Store",
                NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                food.id,
            ),
        ];
        (vec![salary, food], transactions)
    }

    #[test]
    fn test_format_summary() {
        let (_, transactions) = sample();
        let output = format_summary(&summarize(&transactions, 2024, 3), &Settings::default());
        assert!(output.starts_with("Summary: 2024-03 (2 transactions)"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("$60.00 (positive)"));
    }

    #[test]
    fn test_format_series_skips_quiet_days() {
        let (_, transactions) = sample();
        let series = build_monthly_series(&transactions, 2024, 3);

        let output = format_series(&series, &Settings::default(), false);
        assert!(output.contains("Mar 01"));
        assert!(output.contains("Mar 02"));
        assert!(!output.contains("Mar 03"));

        let output = format_series(&series, &Settings::default(), true);
        assert!(output.contains("Mar 31"));

        let quiet = build_monthly_series(&[], 2024, 3);
        assert_eq!(format_series(&quiet, &Settings::default(), false), "No activity this month.\n");
    }

    #[test]
    fn test_format_breakdown() {
        let (categories, transactions) = sample();
        let slices = aggregate_by_category(&transactions, &categories, TransactionType::Expense);
        let output = format_breakdown(&slices, TransactionType::Expense, &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("100.0"));
        assert!(output.contains("Total: $40.00"));

        let output = format_breakdown(&[], TransactionType::Income, &Settings::default());
        assert_eq!(output, "No income transactions found.\n");
    }

    #[test]
    fn test_format_dashboard() {
        let (categories, mut transactions) = sample();
        transactions.push(Transaction::new(
            TransactionType::Expense,
            Money::from_units(5),
            "Mystery",
            NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            CategoryId::new(),
        ));
        let now = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let dashboard = Dashboard::generate(&transactions, &categories, now, 3);
        let output = format_dashboard(&dashboard, &Settings::default());

        assert!(output.starts_with("Dashboard: March 2024"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("Expenses by Category"));
        assert!(output.contains("Mystery"));
        assert!(output.contains("Mar 08, 2024"));
        assert!(output.contains("-$5.00"));
    }

    #[test]
    fn test_format_empty_dashboard() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let output = format_dashboard(&Dashboard::generate(&[], &[], now, 5), &Settings::default());
        assert!(output.contains("No transactions yet"));
        assert!(output.contains("No data"));
    }
}
