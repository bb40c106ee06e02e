//! CLI command handlers
//!
//! Argument definitions for clap and the handlers that turn them into
//! intents or report calls and print the result.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, AddArgs, DeleteArgs, EditArgs, ListArgs,
};
pub use export::{handle_export, ExportArgs};
pub use report::{handle_chart_command, handle_config, handle_history, handle_summary, ChartCommands};

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::MonthKey;
use crate::services::{BudgetAlert, ExpenseFilter, SortColumn, SortOrder};

/// `--month` / `--year` selection; missing parts default to today
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct MonthArgs {
    /// Month number (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Four-digit year
    #[arg(short, long)]
    pub year: Option<i32>,
}

impl MonthArgs {
    /// Whether either part was given
    pub fn is_set(&self) -> bool {
        self.month.is_some() || self.year.is_some()
    }

    /// Resolve against the current month
    pub fn resolve(&self) -> ExpenseResult<MonthKey> {
        let current = MonthKey::current();
        MonthKey::new(
            self.year.unwrap_or(current.year()),
            self.month.unwrap_or(current.month()),
        )
        .map_err(|e| ExpenseError::Validation(e.to_string()))
    }
}

/// Column names accepted by `--sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    /// Store order
    Sno,
    Date,
    Category,
    Description,
    Amount,
}

impl From<SortField> for SortColumn {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Sno => SortColumn::Serial,
            SortField::Date => SortColumn::Date,
            SortField::Category => SortColumn::Category,
            SortField::Description => SortColumn::Description,
            SortField::Amount => SortColumn::Amount,
        }
    }
}

/// Search and sort options shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Case-insensitive text matched against category, description and date
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

impl ViewArgs {
    /// Add search and sort to a filter
    pub fn apply(&self, mut filter: ExpenseFilter) -> ExpenseFilter {
        if let Some(text) = &self.search {
            filter = filter.search(text.clone());
        }
        if let Some(field) = self.sort {
            let order = if self.desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            filter = filter.sort(field.into(), order);
        }
        filter
    }
}

/// Convert a 1-based record number into a store position
pub fn position(no: usize) -> ExpenseResult<usize> {
    no.checked_sub(1)
        .ok_or_else(|| ExpenseError::Validation("Expense numbers start at 1".into()))
}

/// Print an over-budget warning
pub fn print_alert(alert: &BudgetAlert, symbol: &str) {
    println!();
    println!("Warning: {}", alert.message(symbol));
}
