//! Expense service
//!
//! Validates raw input, runs the advisory budget check, appends the expense
//! and saves the expenses artifact.

use crate::audit::{AuditEntry, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, Expense, ExpenseDate, Money};
use crate::services::budget::{check_budget, BudgetExceeded};
use crate::storage::Storage;

/// Parse an expense amount: numeric and not negative
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(input).map_err(|_| ExpenseError::InvalidAmount(input.to_string()))?;
    if amount.is_negative() {
        return Err(ExpenseError::InvalidAmount(input.to_string()));
    }
    Ok(amount)
}

/// Raw text fields for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput<'a> {
    pub date: &'a str,
    pub amount: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

impl ExpenseInput<'_> {
    /// Validate the fields in entry order: date, amount, then category
    pub fn parse(&self) -> ExpenseResult<Expense> {
        let date = ExpenseDate::parse(self.date)?;
        let amount = parse_amount(self.amount)?;
        let category = normalize_category(self.category)?;
        Expense::new(date, amount, category, self.description)
    }
}

/// Outcome of adding an expense
#[derive(Debug, Clone)]
pub struct AddedExpense {
    /// 1-based position in the store
    pub position: usize,
    pub expense: Expense,
    /// Set when the expense took its category over budget
    pub exceeded: Option<BudgetExceeded>,
}

/// Service for recording expenses
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate and record an expense from raw text fields
    pub fn add_from_input(&mut self, input: &ExpenseInput<'_>) -> ExpenseResult<AddedExpense> {
        let expense = input.parse()?;
        self.add(expense)
    }

    /// Record an already-built expense
    ///
    /// The budget check runs against spending recorded before this expense.
    /// An exceeded budget does not stop the expense from being stored.
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<AddedExpense> {
        expense.validate()?;

        let exceeded = check_budget(
            self.storage.expenses.all(),
            self.storage.budgets.all(),
            &expense.category,
            expense.amount,
        );

        let position = self.storage.expenses.push(expense.clone());
        self.storage.expenses.save()?;

        self.storage.log(&AuditEntry::create(
            EntityType::Expense,
            format!("#{}", position),
            &expense,
            Some(format!("{} {}", expense.category, expense.amount)),
        ))?;

        Ok(AddedExpense {
            position,
            expense,
            exceeded,
        })
    }

    /// Expenses, optionally restricted to one category, keeping store positions
    pub fn list(&self, category: Option<&str>) -> Vec<(usize, &Expense)> {
        self.storage
            .expenses
            .all()
            .iter()
            .enumerate()
            .map(|(i, e)| (i + 1, e))
            .filter(|(_, e)| category.map_or(true, |c| e.category == c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::services::BudgetService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input<'a>(amount: &'a str, category: &'a str) -> ExpenseInput<'a> {
        ExpenseInput {
            date: "15-06-2024",
            amount,
            category,
            description: "",
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("20.5").unwrap(), Money::from_cents(2050));
        assert!(matches!(parse_amount("abc"), Err(ExpenseError::InvalidAmount(_))));
        assert!(matches!(parse_amount("-3"), Err(ExpenseError::InvalidAmount(_))));
        assert!(matches!(
            parse_amount("50000000000000000"),
            Err(ExpenseError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_input_validation_order() {
        let bad_everything = ExpenseInput {
            date: "31-04-2024",
            amount: "abc",
            category: "",
            description: "",
        };
        assert!(matches!(bad_everything.parse(), Err(ExpenseError::InvalidDate(_))));

        let bad_amount_and_category = ExpenseInput {
            date: "30-04-2024",
            ..bad_everything
        };
        assert!(matches!(
            bad_amount_and_category.parse(),
            Err(ExpenseError::InvalidAmount(_))
        ));

        assert!(matches!(input("5", " ").parse(), Err(ExpenseError::EmptyCategory)));
    }

    #[test]
    fn test_add_without_budget_never_signals() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let added = service.add_from_input(&input("50", "Food")).unwrap();

        assert_eq!(added.position, 1);
        assert!(added.exceeded.is_none());
    }

    #[test]
    fn test_add_over_budget_is_advisory() {
        let (_temp_dir, mut storage) = create_test_storage();
        BudgetService::new(&mut storage)
            .set_budget("Food", Money::from_cents(10000))
            .unwrap();

        let mut service = ExpenseService::new(&mut storage);
        let first = service.add_from_input(&input("80", "Food")).unwrap();
        assert!(first.exceeded.is_none());

        let second = service.add_from_input(&input("30", "Food")).unwrap();
        let exceeded = second.exceeded.unwrap();
        assert_eq!(exceeded.excess, Money::from_cents(1000));
        assert_eq!(exceeded.spent, Money::from_cents(8000));

        assert_eq!(storage.expenses.len(), 2);
    }

    #[test]
    fn test_add_persists_and_audits() {
        let (temp_dir, mut storage) = create_test_storage();
        ExpenseService::new(&mut storage)
            .add_from_input(&input("12.5", "Food"))
            .unwrap();

        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths, &Settings::default()).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.expenses.len(), 1);
        assert_eq!(reloaded.expenses.all()[0].amount, Money::from_cents(1250));

        let entries = reloaded.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, "#1");
    }

    #[test]
    fn test_invalid_input_stores_nothing() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        assert!(service.add_from_input(&input("ten", "Food")).is_err());
        assert!(service.add_from_input(&input("10", "")).is_err());

        assert!(storage.expenses.is_empty());
        assert!(!storage.paths().expenses_file().exists());
    }

    #[test]
    fn test_list_filters_by_category_keeping_positions() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.add_from_input(&input("1", "Food")).unwrap();
        service.add_from_input(&input("2", "Rent")).unwrap();
        service.add_from_input(&input("3", "Food")).unwrap();

        let food: Vec<usize> = service.list(Some("Food")).iter().map(|(i, _)| *i).collect();
        assert_eq!(food, vec![1, 3]);
        assert_eq!(service.list(None).len(), 3);
    }
}
