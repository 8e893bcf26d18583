//! Configuration module for expense-cli
//!
//! - Path resolution for the settings file, audit log and data artifacts
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
