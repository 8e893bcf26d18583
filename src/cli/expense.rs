//! Expense CLI commands
//!
//! Recording expenses and the spending summaries built from them.

use crate::config::settings::Settings;
use crate::display::{
    format_budget_warning, format_category_summary, format_distribution, format_expense_list,
    format_total,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseDate;
use crate::services::{summary, ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Arguments for `expense add`
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Amount (e.g., "12", "12.50", "$12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category name
    pub category: String,
    /// Expense date (DD-MM-YYYY, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
}

/// Record a new expense
pub fn handle_add(storage: &mut Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let date = args.date.unwrap_or_else(|| ExpenseDate::today().to_string());
    let input = ExpenseInput {
        date: &date,
        amount: &args.amount,
        category: &args.category,
        description: &args.description,
    };

    let added = ExpenseService::new(storage).add_from_input(&input)?;
    let symbol = &settings.currency_symbol;

    println!("Added expense #{}: {}", added.position, added.expense);
    if let Some(exceeded) = &added.exceeded {
        println!("{}", format_budget_warning(exceeded, symbol));
    }
    println!("{}", format_total(summary::total(storage.expenses.all()), symbol));

    Ok(())
}

/// List recorded expenses
pub fn handle_list(
    storage: &mut Storage,
    settings: &Settings,
    category: Option<String>,
    limit: Option<usize>,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let mut rows = service.list(category.as_deref());

    // Show the most recent entries when limited
    if let Some(limit) = limit {
        let skip = rows.len().saturating_sub(limit);
        rows.drain(..skip);
    }

    print!("{}", format_expense_list(&rows, &settings.currency_symbol));
    Ok(())
}

pub fn handle_total(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let total = summary::total(storage.expenses.all());
    println!("{}", format_total(total, &settings.currency_symbol));
    Ok(())
}

pub fn handle_summary(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let totals = summary::by_category(storage.expenses.all());
    println!("{}", format_category_summary(&totals, &settings.currency_symbol));
    Ok(())
}

/// Show spending across the budgeted categories
pub fn handle_distribution(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    match summary::distribution(storage.expenses.all(), storage.budgets.all()) {
        Ok(distribution) => {
            print!("{}", format_distribution(&distribution, &settings.currency_symbol));
            Ok(())
        }
        Err(e @ (ExpenseError::NoBudgets | ExpenseError::NoSpending)) => {
            println!("{}.", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Delete every expense and budget, including the artifact files
pub fn handle_clear(storage: &mut Storage, force: bool) -> ExpenseResult<()> {
    if !force {
        println!(
            "This will permanently delete all {} expense(s) and {} budget(s).",
            storage.expenses.len(),
            storage.budgets.len()
        );
        println!("This action cannot be undone.");
        println!();
        println!("To proceed, run again with --force flag:");
        println!("  expense clear --force");
        return Ok(());
    }

    let cleared = storage.clear_all()?;
    println!(
        "All data has been cleared: {} expense(s), {} budget(s) removed.",
        cleared.expenses_removed, cleared.budgets_removed
    );
    Ok(())
}
