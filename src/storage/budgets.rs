//! Budget repository for JSON storage
//!
//! Persists the category → limit map to budgets.json as a flat JSON object.

use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{validate_limit, BudgetMap, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget limits
pub struct BudgetRepository {
    path: PathBuf,
    budgets: BudgetMap,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: BudgetMap::new(),
        }
    }

    /// Replace the in-memory map with the artifact's contents
    pub fn load(&mut self) -> ExpenseResult<()> {
        let budgets: BudgetMap = read_json(&self.path)?;

        for (category, limit) in &budgets {
            validate_limit(*limit).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Invalid budget for '{}' in {}: {}",
                    category,
                    self.path.display(),
                    e
                ))
            })?;
        }

        self.budgets = budgets;
        Ok(())
    }

    /// Rewrite the artifact from the in-memory map
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.budgets)
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.budgets.get(category).copied()
    }

    /// Set or overwrite a limit, returning the previous one
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Option<Money> {
        self.budgets.insert(category.into(), limit)
    }

    /// Remove every limit, returning what was removed
    pub fn clear(&mut self) -> BudgetMap {
        std::mem::take(&mut self.budgets)
    }

    pub fn all(&self) -> &BudgetMap {
        &self.budgets
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let (_temp_dir, mut repo) = create_test_repo();

        assert_eq!(repo.set("Food", Money::from_cents(10000)), None);
        assert_eq!(
            repo.set("Food", Money::from_cents(15000)),
            Some(Money::from_cents(10000))
        );
        assert_eq!(repo.get("Food"), Some(Money::from_cents(15000)));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.set("Food", Money::from_cents(10000));
        repo.set("Travel", Money::from_cents(25050));
        repo.save().unwrap();

        let mut reloaded = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.all(), repo.all());
    }

    #[test]
    fn test_load_reads_flat_object() {
        let (_temp_dir, mut repo) = create_test_repo();
        std::fs::write(repo.path(), r#"{"Food": 100, "Fun": 20.25}"#).unwrap();

        repo.load().unwrap();
        assert_eq!(repo.get("Food"), Some(Money::from_cents(10000)));
        assert_eq!(repo.get("Fun"), Some(Money::from_cents(2025)));
    }

    #[test]
    fn test_load_rejects_non_positive_limit() {
        let (_temp_dir, mut repo) = create_test_repo();
        std::fs::write(repo.path(), r#"{"Food": 0}"#).unwrap();

        assert!(repo.load().is_err());
    }

    #[test]
    fn test_clear_returns_removed() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.set("Food", Money::from_cents(10000));

        let removed = repo.clear();
        assert_eq!(removed.len(), 1);
        assert!(repo.is_empty());
    }
}
