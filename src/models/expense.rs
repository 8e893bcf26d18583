//! Expense model
//!
//! A single recorded spending event. Expenses have no id: their position in
//! the store is their identity, and they are never edited once recorded.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::ExpenseDate;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: ExpenseDate,
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a validated expense
    ///
    /// The category is trimmed and must not be empty; the amount must not be
    /// negative.
    pub fn new(
        date: ExpenseDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> ExpenseResult<Self> {
        let expense = Self {
            date,
            amount,
            category: normalize_category(&category.into())?,
            description: description.into(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Validate invariants on a loaded or constructed expense
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.category.trim().is_empty() {
            return Err(ExpenseError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(ExpenseError::InvalidAmount(self.amount.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// Trim a category label, rejecting empty input
pub fn normalize_category(raw: &str) -> ExpenseResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ExpenseError::EmptyCategory)
    } else {
        Ok(trimmed.to_string())
    }
}
