//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the service layer.

pub mod budget;
pub mod expense;
pub mod export;
pub mod history;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add, handle_clear, handle_distribution, handle_list, handle_summary, handle_total,
    AddArgs,
};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;
