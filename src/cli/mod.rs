//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.

pub mod category;
pub mod export;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{
    handle_breakdown_command, handle_dashboard_command, handle_series_command,
    handle_summary_command, parse_month,
};
pub use transaction::{handle_transaction_command, FilterArgs, TransactionCommands};
