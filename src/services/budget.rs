//! Budget service
//!
//! Setting and clearing per-category limits, and the advisory check that
//! tells the caller when a new expense would take a category over its limit.

use crate::audit::{AuditEntry, EntityType};
use crate::error::ExpenseResult;
use crate::models::{normalize_category, validate_limit, BudgetMap, Expense, Money};
use crate::services::summary::spent_in_category;
use crate::storage::Storage;

/// Advisory result of a budget check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetExceeded {
    pub category: String,
    pub limit: Money,
    /// Spending recorded before the candidate expense
    pub spent: Money,
    pub attempted: Money,
    /// How far `spent + attempted` goes over `limit`
    pub excess: Money,
}

/// Check whether adding `amount` to `category` would exceed its budget
///
/// `expenses` must not yet contain the candidate expense. Categories with no
/// budget never exceed. The result is advisory only.
pub fn check_budget(
    expenses: &[Expense],
    budgets: &BudgetMap,
    category: &str,
    amount: Money,
) -> Option<BudgetExceeded> {
    let limit = *budgets.get(category)?;
    let spent = spent_in_category(expenses, category);
    let projected = spent + amount;

    (projected > limit).then(|| BudgetExceeded {
        category: category.to_string(),
        limit,
        spent,
        attempted: amount,
        excess: projected - limit,
    })
}

/// Per-category budget standing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
}

impl BudgetStatus {
    /// Limit minus spending; negative when over budget
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Set or overwrite the limit for a category, then save the budgets artifact
    ///
    /// Returns the stored (trimmed) category name and the previous limit.
    pub fn set_budget(
        &mut self,
        category: &str,
        limit: Money,
    ) -> ExpenseResult<(String, Option<Money>)> {
        let category = normalize_category(category)?;
        validate_limit(limit)?;

        let previous = self.storage.budgets.set(category.clone(), limit);
        self.storage.budgets.save()?;

        let summary = Some(format!("limit: {}", limit));
        let entry = match previous {
            Some(_) => AuditEntry::update(EntityType::Budget, &category, &limit, summary),
            None => AuditEntry::create(EntityType::Budget, &category, &limit, summary),
        };
        self.storage.log(&entry)?;

        Ok((category, previous))
    }

    /// Remove every budget and save the (now empty) budgets artifact
    pub fn clear_budgets(&mut self) -> ExpenseResult<BudgetMap> {
        let removed = self.storage.budgets.clear();
        self.storage.budgets.save()?;

        let entries: Vec<AuditEntry> = removed
            .iter()
            .map(|(category, limit)| AuditEntry::delete(EntityType::Budget, category, limit, None))
            .collect();
        self.storage.log_batch(&entries)?;

        Ok(removed)
    }

    /// Standing of every budgeted category
    pub fn status(&self) -> Vec<BudgetStatus> {
        let expenses = self.storage.expenses.all();
        self.storage
            .budgets
            .all()
            .iter()
            .map(|(category, limit)| BudgetStatus {
                category: category.clone(),
                limit: *limit,
                spent: spent_in_category(expenses, category),
            })
            .collect()
    }

    /// Categories whose spending is over their limit
    pub fn over_budget(&self) -> Vec<BudgetStatus> {
        self.status().into_iter().filter(|s| s.is_over()).collect()
    }
}
