//! CLI commands for reports, charts, history and configuration

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_category_chart, format_summary_table, format_trend_chart};
use crate::error::ExpenseResult;
use crate::reports::{CategoryBreakdownReport, MonthlySummaryReport, MonthlyTrendReport};
use crate::storage::Storage;

use super::MonthArgs;

/// Chart subcommands
#[derive(Subcommand, Debug)]
pub enum ChartCommands {
    /// Share of each category in a month (defaults to the current month)
    Categories {
        #[command(flatten)]
        month: MonthArgs,
    },

    /// Total spent in every month
    Months,
}

/// Handle `summary`
pub fn handle_summary(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let report = MonthlySummaryReport::generate(storage);
    print!(
        "{}",
        format_summary_table(&report, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle a chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ChartCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ChartCommands::Categories { month } => {
            let report = CategoryBreakdownReport::generate(storage, month.resolve()?);
            print!("{}", format_category_chart(&report, symbol));
        }
        ChartCommands::Months => {
            let report = MonthlyTrendReport::generate(storage);
            print!("{}", format_trend_chart(&report, symbol));
        }
    }

    Ok(())
}

/// Handle `history`: the most recent audit entries
pub fn handle_history(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

/// Handle `config`; `init` writes the settings file first
pub fn handle_config(storage: &Storage, settings: &Settings, init: bool) -> ExpenseResult<()> {
    let paths = storage.paths();

    if init {
        settings.save(paths)?;
        println!("Wrote settings to {}", paths.settings_file().display());
        println!();
    }

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Expenses file:   {}", paths.expenses_file().display());
    println!("Budget file:     {}", paths.budget_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Default category: {}", settings.default_category);
    println!("  Categories:       {}", settings.categories.join(", "));
    println!("  Audit enabled:    {}", settings.audit_enabled);

    Ok(())
}
