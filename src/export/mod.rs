//! Export module for expense-cli
//!
//! - CSV: expenses only (spreadsheet-compatible)
//! - JSON: expenses and budgets, machine-readable
//! - YAML: expenses and budgets, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
