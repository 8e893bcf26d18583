//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_status, format_budget_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set (or replace) the budget for a category
    Set {
        /// Category name
        category: String,
        /// Budget amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the budget table
    #[command(alias = "list")]
    Show,

    /// Show spending against each budget
    Status,

    /// Remove all budgets
    Clear {
        /// Confirm the deletion
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let limit =
                Money::parse(&amount).map_err(|_| ExpenseError::InvalidAmount(amount.clone()))?;

            let (category, previous) = BudgetService::new(storage).set_budget(&category, limit)?;

            match previous {
                Some(before) => println!(
                    "Budget for {} changed: {} -> {}",
                    category,
                    before.format_with_symbol(symbol),
                    limit.format_with_symbol(symbol)
                ),
                None => println!(
                    "Budget set for {}: {}",
                    category,
                    limit.format_with_symbol(symbol)
                ),
            }
        }

        BudgetCommands::Show => {
            println!("{}", format_budget_table(storage.budgets.all(), symbol));
        }

        BudgetCommands::Status => {
            let service = BudgetService::new(storage);
            print!("{}", format_budget_status(&service.status(), symbol));

            let over = service.over_budget();
            if !over.is_empty() {
                let names: Vec<&str> = over.iter().map(|s| s.category.as_str()).collect();
                println!("\n⚠️  Over budget: {}", names.join(", "));
            }
        }

        BudgetCommands::Clear { force } => {
            if !force {
                println!(
                    "This will remove all {} budget(s). Expenses are kept.",
                    storage.budgets.len()
                );
                println!();
                println!("To proceed, run again with --force flag:");
                println!("  expense budget clear --force");
                return Ok(());
            }

            let removed = BudgetService::new(storage).clear_budgets()?;
            println!("Budget data cleared ({} removed).", removed.len());
        }
    }

    Ok(())
}
