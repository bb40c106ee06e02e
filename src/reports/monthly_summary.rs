//! Monthly summary report
//!
//! One row per month that has expenses, oldest first, with the budget set
//! for that month (zero when there is none).

use crate::models::{Expense, Money, MonthKey};
use crate::services::budget::is_over_budget;
use crate::storage::{BudgetMap, Storage};

use super::aggregate::all_monthly_totals;

/// A single month in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummaryRow {
    /// 1-based position in the summary
    pub serial: usize,
    pub month: MonthKey,
    pub total: Money,
    /// Budget for the month, `None` when unset
    pub budget: Option<Money>,
    pub over_budget: bool,
}

impl MonthlySummaryRow {
    /// Budget shown in the summary, zero when unset
    pub fn budget_or_zero(&self) -> Money {
        self.budget.unwrap_or_default()
    }
}

/// Totals per month with their budgets
#[derive(Debug, Clone, Default)]
pub struct MonthlySummaryReport {
    pub rows: Vec<MonthlySummaryRow>,
    pub grand_total: Money,
}

impl MonthlySummaryReport {
    /// Generate the summary from the loaded storage
    pub fn generate(storage: &Storage) -> Self {
        Self::from_parts(storage.expenses.records(), storage.budget.all())
    }

    /// Generate the summary from records and a budget map
    ///
    /// Months that only have a budget are not listed.
    pub fn from_parts<'a, I>(expenses: I, budgets: &BudgetMap) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let totals = all_monthly_totals(expenses);

        let rows: Vec<MonthlySummaryRow> = totals
            .into_iter()
            .enumerate()
            .map(|(i, (month, total))| MonthlySummaryRow {
                serial: i + 1,
                month,
                total,
                budget: budgets.get(&month).copied(),
                over_budget: is_over_budget(budgets, month, total),
            })
            .collect();

        let grand_total = rows.iter().map(|r| r.total).sum();

        Self { rows, grand_total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// English month name for 1..=12
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}
