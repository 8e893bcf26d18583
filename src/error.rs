//! Custom error types for expense-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense-cli operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Date text did not match DD-MM-YYYY or named a day that does not exist
    #[error("Invalid date '{0}': please enter a valid date in DD-MM-YYYY format")]
    InvalidDate(String),

    /// Amount text was not a usable number
    #[error("Invalid amount '{0}': please enter a valid number for the amount")]
    InvalidAmount(String),

    /// An expense or budget was submitted without a category
    #[error("Please enter a category")]
    EmptyCategory,

    /// The distribution needs at least one budget
    #[error("No budget data available to plot")]
    NoBudgets,

    /// The budgeted categories have no spending
    #[error("No spending data available to plot")]
    NoSpending,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense-cli operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
