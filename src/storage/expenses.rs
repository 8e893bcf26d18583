//! Expense repository for JSON storage
//!
//! Holds the ordered expense list in memory and persists it to expenses.json
//! as a bare JSON array.

use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the expense record store
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
        }
    }

    /// Replace the in-memory list with the artifact's contents
    pub fn load(&mut self) -> ExpenseResult<()> {
        let expenses: Vec<Expense> = read_json(&self.path)?;

        for (index, expense) in expenses.iter().enumerate() {
            expense.validate().map_err(|e| {
                ExpenseError::Storage(format!(
                    "Invalid expense #{} in {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ))
            })?;
        }

        self.expenses = expenses;
        Ok(())
    }

    /// Rewrite the artifact from the in-memory list
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.expenses)
    }

    /// Append an expense, returning its 1-based position
    pub fn push(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len()
    }

    /// Remove every expense, returning how many there were
    pub fn clear(&mut self) -> usize {
        let count = self.expenses.len();
        self.expenses.clear();
        count
    }

    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDate, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseDate::parse("01-05-2024").unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_empty_round_trip() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.load().unwrap();
        repo.save().unwrap();

        let mut reloaded = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        reloaded.load().unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_push_preserves_order_across_reload() {
        let (temp_dir, mut repo) = create_test_repo();

        assert_eq!(repo.push(expense(1000, "Food")), 1);
        assert_eq!(repo.push(expense(2050, "Rent")), 2);
        repo.save().unwrap();

        let mut reloaded = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.all(), repo.all());
        assert_eq!(reloaded.all()[1].category, "Rent");
    }

    #[test]
    fn test_load_reads_plain_array() {
        let (_temp_dir, mut repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"date": "29-02-2024", "amount": 12.5, "category": "Food", "description": "x"}]"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.all()[0].amount.cents(), 1250);
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        let (_temp_dir, mut repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"date": "01-01-2024", "amount": 3, "category": "", "description": ""}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.push(expense(100, "Food"));
        repo.push(expense(100, "Food"));

        assert_eq!(repo.clear(), 2);
        assert!(repo.is_empty());
    }
}
