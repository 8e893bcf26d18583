//! JSON export of expenses and budgets with schema versioning

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetMap, Expense, Money};
use crate::services::summary;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the application stores, plus a little metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub expenses: Vec<Expense>,
    pub budgets: BudgetMap,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub budget_count: usize,
    pub total_spending: Money,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl FullExport {
    pub fn from_storage(storage: &Storage) -> Self {
        let expenses = storage.expenses.all().to_vec();
        let budgets = storage.budgets.all().clone();

        let earliest_expense = expenses.iter().map(|e| e.date).min().map(|d| d.to_string());
        let latest_expense = expenses.iter().map(|e| e.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            budget_count: budgets.len(),
            total_spending: summary::total(&expenses),
            earliest_expense,
            latest_expense,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            budgets,
            metadata,
        }
    }
}

/// Export expenses and budgets as JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> ExpenseResult<()> {
    let export = FullExport::from_storage(storage);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| ExpenseError::Export(e.to_string()))
}
