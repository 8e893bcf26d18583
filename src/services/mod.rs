//! Service layer for expense-cli
//!
//! Business logic on top of the storage layer: input validation, budget
//! checks and spending aggregation.

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::{check_budget, BudgetExceeded, BudgetService, BudgetStatus};
pub use expense::{parse_amount, AddedExpense, ExpenseInput, ExpenseService};
pub use summary::{by_category, distribution, spent_in_category, total, Distribution, DistributionSlice};
