//! Monthly trend report
//!
//! One bar per month with expenses, oldest first.

use crate::models::{Expense, Money, MonthKey};
use crate::storage::Storage;

use super::aggregate::all_monthly_totals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendBar {
    pub month: MonthKey,
    pub total: Money,
}

/// Totals for every month, for bar charts
#[derive(Debug, Clone, Default)]
pub struct MonthlyTrendReport {
    pub bars: Vec<TrendBar>,
}

impl MonthlyTrendReport {
    pub fn generate(storage: &Storage) -> Self {
        Self::from_expenses(storage.expenses.records())
    }

    pub fn from_expenses<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let bars = all_monthly_totals(expenses)
            .into_iter()
            .map(|(month, total)| TrendBar { month, total })
            .collect();
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Height of the tallest bar
    pub fn max_total(&self) -> Money {
        self.bars.iter().map(|b| b.total).max().unwrap_or_default()
    }
}
