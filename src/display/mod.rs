//! Display formatting for terminal output
//!
//! Everything here returns a `String`; printing is left to the CLI.

pub mod chart;
pub mod expense;
pub mod summary;

pub use chart::{format_category_chart, format_trend_chart};
pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_budget_list, format_budget_status, format_summary_table};

use std::fmt::Write;

use chrono::NaiveDate;

/// Format a date with a user-supplied strftime pattern
///
/// A pattern that cannot be rendered for a plain date falls back to
/// `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2024-03-05");
        assert_eq!(format_date(date, "%d/%m/%Y"), "05/03/2024");
        assert_eq!(format_date(date, "%H:%M"), "2024-03-05");
    }
}
