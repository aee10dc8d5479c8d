use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_breakdown_command, handle_category_command, handle_dashboard_command,
    handle_export_command, handle_series_command, handle_summary_command,
    handle_transaction_command, CategoryCommands, ExportArgs, TransactionCommands,
};
use finance_tracker::clock::SystemClock;
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::models::TransactionType;
use finance_tracker::services::initialize_defaults;
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "Record income and expense transactions against your own \
                  categories, then review monthly summaries, a running \
                  balance, category breakdowns and a searchable history."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the settings file and starter categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Txn(TransactionCommands),

    /// Income, expenses and balance for a month
    Summary {
        /// Month as YYYY-MM, defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Day-by-day running balance for a month
    Series {
        /// Month as YYYY-MM, defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Include days without transactions
        #[arg(long)]
        all_days: bool,
    },

    /// Totals per category for income or expenses
    Breakdown {
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
    },

    /// Overview of the current month
    Dashboard,

    /// Export transactions as CSV or JSON
    Export(ExportArgs),
}

fn main() -> Result<()> {
    finance_tracker::init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let clock = SystemClock;

    // Initialize storage
    let storage = Storage::open(&paths, &settings)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing finance tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let created = initialize_defaults(&storage)?;
            println!("Initialization complete!");
            if created > 0 {
                println!("Created {} starter categories.", created);
                println!("Run 'finance category list' to see them.");
            }
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Storage key:     {}", settings.storage_key);
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Txn(cmd)) => {
            handle_transaction_command(&storage, &settings, &clock, cmd)?;
        }
        Some(Commands::Summary { month }) => {
            handle_summary_command(&storage, &settings, &clock, month.as_deref())?;
        }
        Some(Commands::Series { month, all_days }) => {
            handle_series_command(&storage, &settings, &clock, month.as_deref(), all_days)?;
        }
        Some(Commands::Breakdown { kind }) => {
            handle_breakdown_command(&storage, &settings, kind)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings, &clock)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &clock, args)?;
        }
        None => {
            println!("Finance Tracker - income and expense tracking");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance init' to get started.");
        }
    }

    Ok(())
}
