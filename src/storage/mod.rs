//! Storage layer for expense-cli
//!
//! Two independent JSON artifacts, one for expenses and one for budgets, plus
//! the audit log that records every change made through [`Storage`].

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, remove_if_exists, write_json_atomic};

use serde_json::json;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseResult;

/// What [`Storage::clear_all`] removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearSummary {
    pub expenses_removed: usize,
    pub budgets_removed: usize,
    pub files_deleted: usize,
}

/// Main storage coordinator that owns both repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a storage coordinator; nothing is read until [`Storage::load_all`]
    pub fn new(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load both artifacts; absent files load as empty
    pub fn load_all(&mut self) -> ExpenseResult<()> {
        self.expenses.load()?;
        self.budgets.load()?;
        Ok(())
    }

    pub fn save_all(&self) -> ExpenseResult<()> {
        self.expenses.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Record an audit entry when auditing is enabled
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        match &self.audit {
            Some(logger) => logger.log(entry),
            None => Ok(()),
        }
    }

    pub fn log_batch(&self, entries: &[AuditEntry]) -> ExpenseResult<()> {
        match &self.audit {
            Some(logger) => logger.log_batch(entries),
            None => Ok(()),
        }
    }

    /// Empty both stores and delete both artifact files
    pub fn clear_all(&mut self) -> ExpenseResult<ClearSummary> {
        let expenses_removed = self.expenses.clear();
        let removed_budgets = self.budgets.clear();

        let mut files_deleted = 0;
        for path in [self.expenses.path(), self.budgets.path()] {
            if remove_if_exists(path)? {
                files_deleted += 1;
            }
        }

        let mut entries = Vec::with_capacity(removed_budgets.len() + 1);
        if expenses_removed > 0 {
            entries.push(AuditEntry::delete(
                EntityType::Expense,
                "*",
                &json!({ "count": expenses_removed }),
                Some(format!("cleared {} expense(s)", expenses_removed)),
            ));
        }
        for (category, limit) in &removed_budgets {
            entries.push(AuditEntry::delete(EntityType::Budget, category, limit, None));
        }
        self.log_batch(&entries)?;

        Ok(ClearSummary {
            expenses_removed,
            budgets_removed: removed_budgets.len(),
            files_deleted,
        })
    }
}
