//! Transaction CLI commands

use clap::{Args, Subcommand};

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, TransactionDate, TransactionType};
use crate::reports::{filter_transactions, DateFilter, TransactionFilter, TypeFilter};
use crate::services::{CategoryService, NewTransaction, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// income or expense
        #[arg(value_name = "TYPE")]
        kind: TransactionType,
        /// Positive amount, e.g. "12.50"
        amount: String,
        /// What the transaction was for
        description: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short)
        id: String,
    },
}

/// Search, type and date filter flags shared by list and export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text to find in descriptions or category names
    #[arg(short, long)]
    pub search: Option<String>,
    /// all, income or expense
    #[arg(short = 't', long = "type", default_value = "all")]
    pub type_filter: TypeFilter,
    /// all, today, yesterday, this-week, this-month, last-month or this-year
    #[arg(long = "date", default_value = "all")]
    pub date_filter: DateFilter,
}

impl FilterArgs {
    pub fn to_filter(&self) -> TransactionFilter {
        TransactionFilter::new()
            .search(self.search.clone().unwrap_or_default())
            .of_type(self.type_filter)
            .during(self.date_filter)
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| FinanceError::Validation(e.to_string()))?;
            let category = CategoryService::new(storage)
                .find(&category)?
                .ok_or_else(|| FinanceError::category_not_found(category.clone()))?;
            let date = match date {
                Some(raw) => TransactionDate::from_raw(raw.trim()),
                None => TransactionDate::from_date(clock.now().date()),
            };

            let txn = service.create(NewTransaction {
                kind,
                amount,
                description,
                date,
                category_id: category.id,
            })?;

            println!("Recorded {}: {}", txn.kind, txn.description);
            println!("  ID:       {}", txn.id.short());
            println!("  Date:     {}", txn.date.format_day(&settings.date_format));
            println!("  Category: {} {}", category.icon.glyph(), category.name);
            println!(
                "  Amount:   {}",
                txn.signed_amount().format_with_symbol(&settings.currency_symbol)
            );
        }

        TransactionCommands::List { filter, limit } => {
            let data = storage.snapshot()?;
            let mut transactions =
                filter_transactions(&data.transactions, &data.categories, &filter.to_filter(), clock.now());
            let matched = transactions.len();
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            print!(
                "{}",
                format_transaction_table(&transactions, &data.categories, settings)
            );
            if transactions.len() < matched {
                println!("Showing {} of {} transactions", transactions.len(), matched);
            }
        }

        TransactionCommands::Delete { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(id.clone()))?;
            let deleted = service.delete(txn.id)?;
            println!("Deleted transaction: {}", deleted);
        }
    }

    Ok(())
}
