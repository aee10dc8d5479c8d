//! Finance Tracker - personal income and expense tracking
//!
//! This library records income and expense transactions against
//! user-defined categories and derives the views a finance dashboard needs:
//! monthly summaries, a day-by-day running balance, per-category breakdowns
//! and a searchable, filterable transaction list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, dates)
//! - `storage`: Persisted data blob behind a pluggable store
//! - `services`: Validated mutations (create, delete)
//! - `reports`: Pure derivations over a snapshot of the data
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers for the `finance` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{FinancePaths, Settings};
//! use finance_tracker::reports::summarize_current;
//! use finance_tracker::storage::Storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//! let summary = summarize_current(&storage.transactions()?, now);
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber, once
///
/// Logs go to stderr. `RUST_LOG` overrides the default of warnings only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finance_tracker=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
