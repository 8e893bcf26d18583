//! Core data models for expense-cli
//!
//! Expenses, budget limits, and the value types they are built from.

pub mod budget;
pub mod date;
pub mod expense;
pub mod money;

pub use budget::{validate_limit, BudgetMap};
pub use date::{days_in_month, is_leap_year, is_valid_date, ExpenseDate};
pub use expense::{normalize_category, Expense};
pub use money::{Money, MoneyParseError};
