//! Spending aggregation
//!
//! Pure functions over the expense list. Nothing is cached; every call
//! recomputes from the records it is given.

use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetMap, Expense, Money};

/// Sum of every expense amount
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Summed amount per category
pub fn by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Summed amount for a single category
pub fn spent_in_category(expenses: &[Expense], category: &str) -> Money {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.amount)
        .sum()
}

/// One budgeted category's share of spending
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub category: String,
    pub spent: Money,
    /// Share of [`Distribution::total`], 0-100
    pub percentage: f64,
}

/// Spending split across the budgeted categories
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub slices: Vec<DistributionSlice>,
    pub total: Money,
}

/// Spending distribution over the categories that have a budget
///
/// Categories without a budget are not part of the distribution. Fails with
/// [`ExpenseError::NoBudgets`] when there are no budgets and with
/// [`ExpenseError::NoSpending`] when the budgeted categories have no spending.
pub fn distribution(expenses: &[Expense], budgets: &BudgetMap) -> ExpenseResult<Distribution> {
    if budgets.is_empty() {
        return Err(ExpenseError::NoBudgets);
    }

    let spent = by_category(expenses);
    let amounts: Vec<(String, Money)> = budgets
        .keys()
        .map(|category| {
            let amount = spent.get(category).copied().unwrap_or_default();
            (category.clone(), amount)
        })
        .collect();

    let total: Money = amounts.iter().map(|(_, amount)| *amount).sum();
    if total.is_zero() {
        return Err(ExpenseError::NoSpending);
    }

    let slices = amounts
        .into_iter()
        .map(|(category, spent)| DistributionSlice {
            percentage: spent.cents() as f64 / total.cents() as f64 * 100.0,
            category,
            spent,
        })
        .collect();

    Ok(Distribution { slices, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDate;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            ExpenseDate::parse("10-10-2024").unwrap(),
            Money::from_cents(cents),
            category,
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_total_sums_amounts() {
        let expenses = vec![expense(1000, "Food"), expense(2050, "Rent")];
        assert_eq!(total(&expenses), Money::from_cents(3050));
    }

    #[test]
    fn test_total_of_largest_amounts_does_not_overflow() {
        let largest = crate::services::parse_amount("1000000000000").unwrap();
        let expenses = vec![
            expense(largest.cents(), "Food"),
            expense(largest.cents(), "Food"),
        ];

        assert_eq!(total(&expenses).cents(), 2 * Money::MAX_CENTS);
        assert_eq!(by_category(&expenses)["Food"].cents(), 2 * Money::MAX_CENTS);
    }

    #[test]
    fn test_by_category() {
        let expenses = vec![
            expense(1000, "Food"),
            expense(500, "Travel"),
            expense(250, "Food"),
        ];

        let totals = by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Food"], Money::from_cents(1250));
        assert_eq!(totals["Travel"], Money::from_cents(500));
        assert!(by_category(&[]).is_empty());
    }

    #[test]
    fn test_spent_in_category_is_case_sensitive() {
        let expenses = vec![expense(1000, "Food"), expense(700, "food")];
        assert_eq!(spent_in_category(&expenses, "Food"), Money::from_cents(1000));
        assert_eq!(spent_in_category(&expenses, "Rent"), Money::zero());
    }

    #[test]
    fn test_distribution_requires_budgets() {
        let expenses = vec![expense(1000, "Food")];
        let err = distribution(&expenses, &BudgetMap::new()).unwrap_err();
        assert!(matches!(err, ExpenseError::NoBudgets));
    }

    #[test]
    fn test_distribution_requires_budgeted_spending() {
        let expenses = vec![expense(1000, "Food")];
        let mut budgets = BudgetMap::new();
        budgets.insert("Rent".to_string(), Money::from_cents(50000));

        let err = distribution(&expenses, &budgets).unwrap_err();
        assert!(matches!(err, ExpenseError::NoSpending));
    }

    #[test]
    fn test_distribution_only_counts_budgeted_categories() {
        let expenses = vec![
            expense(3000, "Food"),
            expense(1000, "Fun"),
            expense(9900, "Unbudgeted"),
        ];
        let mut budgets = BudgetMap::new();
        budgets.insert("Food".to_string(), Money::from_cents(10000));
        budgets.insert("Fun".to_string(), Money::from_cents(5000));
        budgets.insert("Rent".to_string(), Money::from_cents(90000));

        let dist = distribution(&expenses, &budgets).unwrap();

        assert_eq!(dist.total, Money::from_cents(4000));
        assert_eq!(dist.slices.len(), 3);
        assert_eq!(dist.slices[0].category, "Food");
        assert!((dist.slices[0].percentage - 75.0).abs() < 1e-9);
        assert!((dist.slices[1].percentage - 25.0).abs() < 1e-9);
        assert_eq!(dist.slices[2].spent, Money::zero());
    }
}
