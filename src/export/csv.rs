//! CSV export
//!
//! Writes the rows of an expense view with the columns shown in the list:
//! `S.No,Date,Category,Description,Amount`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseView;

const HEADER: [&str; 5] = ["S.No", "Date", "Category", "Description", "Amount"];

/// Write the view to `writer`, returning the number of data rows
pub fn export_expenses_csv<W: Write>(view: &ExpenseView<'_>, writer: W) -> ExpenseResult<usize> {
    if view.is_empty() {
        return Err(ExpenseError::Export("No expenses to export".into()));
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for row in &view.rows {
        let expense = &row.entry.expense;
        wtr.write_record([
            row.serial.to_string(),
            expense.date_string(),
            expense.category.clone(),
            expense.description.clone(),
            expense.amount.to_string(),
        ])?;
    }

    wtr.flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(view.len())
}

/// Write the view to a new file at `path`
///
/// Nothing is created when the view is empty.
pub fn export_to_file(view: &ExpenseView<'_>, path: &Path) -> ExpenseResult<usize> {
    if view.is_empty() {
        return Err(ExpenseError::Export("No expenses to export".into()));
    }

    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let count = export_expenses_csv(view, file)?;
    tracing::info!(path = %path.display(), rows = count, "exported expenses");

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseEntry, Money};
    use crate::services::{query, ExpenseFilter, SortColumn, SortOrder};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn entries() -> Vec<ExpenseEntry> {
        vec![
            ExpenseEntry::new(
                Expense::new(
                    Money::from_cents(10000),
                    "food",
                    "lunch",
                    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                )
                .unwrap(),
            ),
            ExpenseEntry::new(
                Expense::new(
                    Money::from_cents(2550),
                    "travel",
                    "bus ride",
                    NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
                )
                .unwrap(),
            ),
        ]
    }

    #[test]
    fn test_export_store_order() {
        let entries = entries();
        let view = query(&entries, &ExpenseFilter::new());
        let mut buf = Vec::new();

        let count = export_expenses_csv(&view, &mut buf).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "S.No,Date,Category,Description,Amount\n\
             1,2024-03-05,Food,lunch,100.00\n\
             2,2024-03-02,Travel,bus ride,25.50\n"
        );
    }

    #[test]
    fn test_export_follows_display_order() {
        let entries = entries();
        let view = query(
            &entries,
            &ExpenseFilter::new().sort(SortColumn::Date, SortOrder::Ascending),
        );
        let mut buf = Vec::new();
        export_expenses_csv(&view, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let second_line = text.lines().nth(1).unwrap();
        assert_eq!(second_line, "1,2024-03-02,Travel,bus ride,25.50");
    }

    #[test]
    fn test_export_empty_is_error() {
        let entries: Vec<ExpenseEntry> = Vec::new();
        let view = query(&entries, &ExpenseFilter::new());
        let mut buf = Vec::new();

        let err = export_expenses_csv(&view, &mut buf).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");
        let entries = entries();

        let view = query(&entries, &ExpenseFilter::new());
        assert_eq!(export_to_file(&view, &path).unwrap(), 2);
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("S.No,"));

        let empty: Vec<ExpenseEntry> = Vec::new();
        let missing = temp_dir.path().join("none.csv");
        assert!(export_to_file(&query(&empty, &ExpenseFilter::new()), &missing).is_err());
        assert!(!missing.exists());
    }
}
