//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use super::transaction::FilterArgs;
use crate::clock::Clock;
use crate::error::FinanceResult;
use crate::export::{export_transactions_csv, export_transactions_json, ExportFormat};
use crate::models::{Category, Transaction};
use crate::reports::filter_transactions;
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format: csv or json
    #[arg(short, long, default_value = "csv")]
    pub format: ExportFormat,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Export the filtered transaction list
pub fn handle_export_command(storage: &Storage, clock: &dyn Clock, args: ExportArgs) -> FinanceResult<()> {
    let data = storage.snapshot()?;
    let transactions = filter_transactions(
        &data.transactions,
        &data.categories,
        &args.filter.to_filter(),
        clock.now(),
    );

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_export(args.format, &transactions, &data.categories, &mut writer)?;
            writer.flush()?;
            eprintln!(
                "Exported {} transaction(s) to {}",
                transactions.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(args.format, &transactions, &data.categories, &mut handle)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    format: ExportFormat,
    transactions: &[Transaction],
    categories: &[Category],
    writer: W,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(transactions, categories, writer),
        ExportFormat::Json => export_transactions_json(transactions, categories, writer),
    }
}
