//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (expenses and budgets)
    Json,
    /// YAML format (expenses and budgets, human-readable)
    Yaml,
}

/// Write an export of the current data to `output`
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
) -> ExpenseResult<()> {
    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(storage.expenses.all(), &mut writer)?,
        ExportFormat::Json => export_full_json(storage, &mut writer, true)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    println!(
        "Exported {} expense(s) and {} budget(s) to {}",
        storage.expenses.len(),
        storage.budgets.len(),
        output.display()
    );
    Ok(())
}
