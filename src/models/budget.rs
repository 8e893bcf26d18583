//! Budget limits
//!
//! A budget is a per-category spending ceiling. The whole set is a flat map
//! from category label to limit; setting a category again replaces its limit.

use std::collections::BTreeMap;

use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Category label to spending limit
pub type BudgetMap = BTreeMap<String, Money>;

/// Check that a budget limit is usable
pub fn validate_limit(limit: Money) -> ExpenseResult<()> {
    if limit.is_positive() {
        Ok(())
    } else {
        Err(ExpenseError::InvalidAmount(format!(
            "{} (budget amount must be greater than zero)",
            limit
        )))
    }
}
