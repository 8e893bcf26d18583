use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add, handle_budget_command, handle_clear, handle_distribution, handle_export_command,
    handle_history_command, handle_list, handle_summary, handle_total, AddArgs, BudgetCommands,
    ExportFormat,
};
use expense_cli::config::paths::{ExpensePaths, DATA_DIR_ENV};
use expense_cli::config::settings::Settings;
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "expense records your spending, keeps a budget per category, \
                  and tells you where the money went."
)]
struct Cli {
    /// Directory holding config.json, audit.log and data/
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses
    #[command(alias = "ls")]
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
        /// Show only the last N expenses
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show total spending
    Total,

    /// Show spending by category
    Summary,

    /// Show how spending splits across budgeted categories
    #[command(alias = "plot")]
    Distribution,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Delete all expenses and budgets
    Clear {
        /// Confirm the deletion
        #[arg(short, long)]
        force: bool,
    },

    /// Export expenses and budgets to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Create the data directory and write a default config.json
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut storage, &settings, args)?,
        Some(Commands::List { category, limit }) => {
            handle_list(&mut storage, &settings, category, limit)?
        }
        Some(Commands::Total) => handle_total(&storage, &settings)?,
        Some(Commands::Summary) => handle_summary(&storage, &settings)?,
        Some(Commands::Distribution) => handle_distribution(&storage, &settings)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut storage, &settings, cmd)?,
        Some(Commands::Clear { force }) => handle_clear(&mut storage, force)?,
        Some(Commands::Export { output, format }) => {
            handle_export_command(&storage, output, format)?
        }
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Init) => {
            println!("Initializing expense-cli at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            if paths.settings_file().exists() {
                println!("Keeping existing {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("expense-cli Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Budgets file:     {}", paths.budgets_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("expense - Terminal-based personal expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add 12.50 Food -m lunch' to record your first expense.");
        }
    }

    Ok(())
}
