//! Display formatting for terminal output
//!
//! Tables are rendered with `tabled`; free-form reports build their own
//! strings.

pub mod category;
pub mod report;
pub mod transaction;

pub use category::format_category_table;
pub use report::{format_breakdown, format_dashboard, format_series, format_summary};
pub use transaction::format_transaction_table;

/// Truncate a string to `width` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer description", 8), "a longe…");
        assert_eq!(truncate("ünïcödé", 4), "ünï…");
    }
}
