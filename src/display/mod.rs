//! Display formatting for terminal output

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{format_budget_status, format_budget_table, format_budget_warning, format_distribution};
pub use expense::{format_category_summary, format_expense_list, format_expense_row, format_total};
