//! Summary and budget tables

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Money;
use crate::reports::{month_name, MonthlySummaryReport};
use crate::services::BudgetStatus;
use crate::storage::BudgetMap;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "S.No")]
    serial: usize,
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

/// Monthly summary as a table; months over budget are marked with `!`
pub fn format_summary_table(report: &MonthlySummaryReport, symbol: &str) -> String {
    if report.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows = report.rows.iter().map(|row| SummaryRow {
        serial: row.serial,
        month: month_name(row.month.month()),
        year: row.month.year(),
        total: if row.over_budget {
            format!("{} !", row.total.format_with_symbol(symbol))
        } else {
            row.total.format_with_symbol(symbol)
        },
        budget: row.budget_or_zero().format_with_symbol(symbol),
    });

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();

    format!(
        "{}\nAll months: {}\n",
        table,
        report.grand_total.format_with_symbol(symbol)
    )
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

/// Every month that has a budget, oldest first
pub fn format_budget_list(budgets: &BudgetMap, symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = budgets.iter().map(|(month, amount)| BudgetRow {
        month: month.label(),
        budget: amount.format_with_symbol(symbol),
    });

    let mut output = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();
    output.push('\n');
    output
}

/// Spending against the budget for one month
pub fn format_budget_status(status: &BudgetStatus, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Budget for {}\n", status.month.label()));

    match status.budget {
        Some(budget) => {
            output.push_str(&format!("  Budget:    {}\n", budget.format_with_symbol(symbol)));
            output.push_str(&format!(
                "  Spent:     {}\n",
                status.spent.format_with_symbol(symbol)
            ));
            let remaining = status.remaining().unwrap_or_default();
            if status.is_over() {
                output.push_str(&format!(
                    "  Over by:   {}\n",
                    (Money::zero() - remaining).format_with_symbol(symbol)
                ));
            } else {
                output.push_str(&format!(
                    "  Remaining: {}\n",
                    remaining.format_with_symbol(symbol)
                ));
            }
        }
        None => {
            output.push_str("  No budget set\n");
            output.push_str(&format!(
                "  Spent:     {}\n",
                status.spent.format_with_symbol(symbol)
            ));
        }
    }

    output
}
