//! Expense list display
//!
//! Renders a filtered view as a table with the same columns the CSV export
//! uses, followed by the total of the shown rows. The S.No column holds the
//! record's store number so it can be passed to `edit` and `delete`.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::services::ExpenseView;

use super::format_date;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "S.No")]
    serial: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a view as a table with a total line
pub fn format_expense_table(view: &ExpenseView<'_>, symbol: &str, date_format: &str) -> String {
    if view.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = view.rows.iter().map(|row| {
        let expense = &row.entry.expense;
        ExpenseRow {
            serial: row.index + 1,
            date: format_date(expense.date, date_format),
            category: expense.category.clone(),
            description: expense.description.clone(),
            amount: expense.amount.format_with_symbol(symbol),
        }
    });

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()))
        .to_string();

    format!(
        "{}\nTotal Expense: {}\n",
        table,
        view.total.format_with_symbol(symbol)
    )
}

/// Format a single expense for confirmations
pub fn format_expense_details(no: usize, expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense #{}\n", no));
    output.push_str(&format!("  Date:        {}\n", expense.date_string()));
    output.push_str(&format!("  Category:    {}\n", expense.category));
    output.push_str(&format!("  Description: {}\n", expense.description));
    output.push_str(&format!(
        "  Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseEntry, Money};
    use crate::services::{query, ExpenseFilter};
    use chrono::NaiveDate;

    fn entries() -> Vec<ExpenseEntry> {
        vec![ExpenseEntry::new(
            Expense::new(
                Money::from_cents(10050),
                "food",
                "lunch",
                NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            )
            .unwrap(),
        )]
    }

    #[test]
    fn test_table_has_columns_and_total() {
        let entries = entries();
        let view = query(&entries, &ExpenseFilter::new());
        let text = format_expense_table(&view, "₹", "%Y-%m-%d");

        for heading in ["S.No", "Date", "Category", "Description", "Amount"] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains("2024-03-05"));
        assert!(text.contains("₹100.50"));
        assert!(text.contains("Total Expense: ₹100.50"));
    }

    #[test]
    fn test_empty_view() {
        let entries: Vec<ExpenseEntry> = Vec::new();
        let view = query(&entries, &ExpenseFilter::new());
        assert_eq!(format_expense_table(&view, "₹", "%Y-%m-%d"), "No expenses found.\n");
    }

    #[test]
    fn test_details() {
        let entries = entries();
        let text = format_expense_details(1, &entries[0].expense, "$");
        assert!(text.starts_with("Expense #1\n"));
        assert!(text.contains("Category:    Food"));
        assert!(text.contains("$100.50"));
    }
}
