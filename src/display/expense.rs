//! Expense and spending summary formatting

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

use super::report::truncate;

/// Format one expense as a numbered listing row
pub fn format_expense_row(position: usize, expense: &Expense, symbol: &str) -> String {
    format!(
        "{:>4}  {}  {:16} {:>12}  {}",
        position,
        expense.date,
        truncate(&expense.category, 16),
        expense.amount.format_with_symbol(symbol),
        expense.description
    )
    .trim_end()
    .to_string()
}

/// Format a numbered expense listing
pub fn format_expense_list(expenses: &[(usize, &Expense)], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = format!(
        "{:>4}  {:10}  {:16} {:>12}  {}\n",
        "#", "Date", "Category", "Amount", "Description"
    );
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for (position, expense) in expenses {
        output.push_str(&format_expense_row(*position, expense, symbol));
        output.push('\n');
    }

    output
}

pub fn format_total(total: Money, symbol: &str) -> String {
    format!("Total Spending: {}", total.format_with_symbol(symbol))
}

/// Format per-category spending, one `category: amount` line each
pub fn format_category_summary(totals: &BTreeMap<String, Money>, symbol: &str) -> String {
    if totals.is_empty() {
        return "No spending data available".to_string();
    }

    let lines: Vec<String> = totals
        .iter()
        .map(|(category, amount)| format!("{}: {}", category, amount.format_with_symbol(symbol)))
        .collect();

    format!("Spending by Category:\n{}", lines.join("\n"))
}
