//! Audit logging for expense-cli
//!
//! Every mutation made through [`crate::storage::Storage`] is recorded as one
//! line of JSON in an append-only log, with before/after values where they
//! exist. The log is the application's activity record and is shown by
//! `expense history`.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
