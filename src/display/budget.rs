//! Budget table, budget status and distribution formatting

use crate::models::BudgetMap;
use crate::services::{BudgetExceeded, BudgetStatus, Distribution};

use super::report::{format_bar, format_percentage, separator, truncate};

const BAR_WIDTH: usize = 30;

/// Format the budget table, one `category: limit` line each
pub fn format_budget_table(budgets: &BudgetMap, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budget data available.".to_string();
    }

    budgets
        .iter()
        .map(|(category, limit)| format!("{}: {}", category, limit.format_with_symbol(symbol)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format limit, spending and remaining amount per budget
pub fn format_budget_status(status: &[BudgetStatus], symbol: &str) -> String {
    if status.is_empty() {
        return "No budget data available.\n".to_string();
    }

    let mut output = format!(
        "{:20} {:>12} {:>12} {:>12}\n",
        "Category", "Budget", "Spent", "Remaining"
    );
    output.push_str(&separator(59));
    output.push('\n');

    for row in status {
        let marker = if row.is_over() { "  ⚠ over budget" } else { "" };
        output.push_str(&format!(
            "{:20} {:>12} {:>12} {:>12}{}\n",
            truncate(&row.category, 20),
            row.limit.format_with_symbol(symbol),
            row.spent.format_with_symbol(symbol),
            row.remaining().format_with_symbol(symbol),
            marker
        ));
    }

    output
}

/// Warning shown when an expense takes a category over its budget
pub fn format_budget_warning(exceeded: &BudgetExceeded, symbol: &str) -> String {
    format!(
        "⚠️  Budget exceeded for {} by {} (budget {}, spent {} before this expense)",
        exceeded.category,
        exceeded.excess.format_with_symbol(symbol),
        exceeded.limit.format_with_symbol(symbol),
        exceeded.spent.format_with_symbol(symbol)
    )
}

/// Render the spending distribution as a text bar chart
pub fn format_distribution(distribution: &Distribution, symbol: &str) -> String {
    let mut output = String::from("Spending Distribution\n");
    output.push_str(&separator(72));
    output.push('\n');

    for slice in &distribution.slices {
        output.push_str(&format!(
            "{:16} {} {:>6} {:>12}\n",
            truncate(&slice.category, 16),
            format_bar(slice.percentage, 100.0, BAR_WIDTH),
            format_percentage(slice.percentage),
            slice.spent.format_with_symbol(symbol)
        ));
    }

    output.push_str(&separator(72));
    output.push('\n');
    output.push_str(&format!(
        "{:16} {:>51}\n",
        "Total",
        distribution.total.format_with_symbol(symbol)
    ));

    output
}
