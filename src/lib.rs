//! expense-cli - Terminal-based personal expense tracker
//!
//! Records expenses, keeps per-category budget limits, and summarizes
//! spending. All state is held in memory and persisted to two JSON files.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, dates, money, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Validation, budget checks and aggregation
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::{ExpensePaths, Settings};
//! use expense_cli::services::{ExpenseInput, ExpenseService};
//! use expense_cli::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let added = ExpenseService::new(&mut storage).add_from_input(&ExpenseInput {
//!     date: "29-02-2024",
//!     amount: "12.50",
//!     category: "Food",
//!     description: "lunch",
//! })?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
