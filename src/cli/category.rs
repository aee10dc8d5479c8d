//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_table;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{CategoryKind, TransactionType};
use crate::services::{CategoryService, NewCategory};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only categories usable for this type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Which transactions may use it: income, expense or both
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: CategoryKind,
        /// Icon key, e.g. "shopping-cart"
        #[arg(short, long, default_value = "wallet")]
        icon: String,
        /// Display color, e.g. "#22c55e"
        #[arg(short, long, default_value = "#6366f1")]
        color: String,
    },

    /// Delete a category that no transaction uses
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FinanceResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = match kind {
                Some(kind) => service.list_for(kind)?,
                None => service.list()?,
            };
            let transactions = storage.transactions()?;
            print!("{}", format_category_table(&categories, &transactions));
        }

        CategoryCommands::Add {
            name,
            kind,
            icon,
            color,
        } => {
            let category = service.create(NewCategory::new(name, kind).icon(icon.as_str()).color(color))?;
            println!("Created category: {} {}", category.icon.glyph(), category.name);
            println!("  ID:   {}", category.id);
            println!("  Type: {}", category.kind);
        }

        CategoryCommands::Delete { category } => {
            let found = service
                .find(&category)?
                .ok_or_else(|| FinanceError::category_not_found(category.clone()))?;
            let deleted = service.delete(found.id)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
