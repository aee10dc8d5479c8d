//! Category display formatting

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Category, Transaction};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Txns")]
    usage: usize,
}

/// Format categories as a table with how many transactions use each
pub fn format_category_table(categories: &[Category], transactions: &[Transaction]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows = categories.iter().map(|category| CategoryRow {
        id: category.id.short(),
        icon: category.icon.glyph().to_string(),
        name: category.name.clone(),
        kind: category.kind.to_string(),
        color: category.color.clone(),
        usage: transactions
            .iter()
            .filter(|t| t.category_id == category.id)
            .count(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));
    format!("{}\n", table)
}
