//! CSV export of the expense list

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Write every expense as one CSV row, in store order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let to_export_err = |e: csv::Error| ExpenseError::Export(e.to_string());

    csv_writer
        .write_record(["Date", "Category", "Amount", "Description"])
        .map_err(to_export_err)?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.date.to_string(),
                expense.category.clone(),
                format!("{:.2}", expense.amount.as_f64()),
                expense.description.clone(),
            ])
            .map_err(to_export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
