//! Expense CLI commands
//!
//! `add`, `edit`, `delete` and `list`. Records are addressed by the number
//! in the S.No column of `list`, which is the 1-based position in the store.

use clap::Args;

use crate::commands::{execute, Intent, Outcome};
use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::ExpenseResult;
use crate::services::{query, ExpenseFilter, ExpenseInput, ExpenseSelector};
use crate::storage::Storage;

use super::{position, print_alert, MonthArgs, ViewArgs};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "120" or "99.50")
    pub amount: String,

    /// Category (defaults to the configured default category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Letters, digits and spaces only
    #[arg(short, long)]
    pub description: String,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Record number (S.No in `list`)
    pub no: usize,

    /// New amount
    pub amount: String,

    /// New category
    #[arg(short, long)]
    pub category: String,

    /// New description
    #[arg(short, long)]
    pub description: String,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Record number (S.No in `list`)
    pub no: usize,

    /// Delete without previewing
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub month: MonthArgs,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Handle `add`
pub fn handle_add(storage: &mut Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let category = args
        .category
        .unwrap_or_else(|| settings.default_category.clone());
    let input = ExpenseInput::parse(
        &args.amount,
        &category,
        &args.description,
        args.date.as_deref(),
    )?;

    if let Outcome::Added(change) = execute(storage, Intent::Add(input))? {
        println!("Added expense #{}", change.index + 1);
        print!(
            "{}",
            format_expense_details(change.index + 1, &change.expense, &settings.currency_symbol)
        );
        if let Some(alert) = &change.alert {
            print_alert(alert, &settings.currency_symbol);
        }
    }

    Ok(())
}

/// Handle `edit`
pub fn handle_edit(storage: &mut Storage, settings: &Settings, args: EditArgs) -> ExpenseResult<()> {
    let index = position(args.no)?;
    let input = ExpenseInput::parse(
        &args.amount,
        &args.category,
        &args.description,
        Some(&args.date),
    )?;

    let intent = Intent::Edit {
        selector: ExpenseSelector::Position(index),
        input,
    };

    if let Outcome::Edited(change) = execute(storage, intent)? {
        println!("Updated expense #{}", args.no);
        print!(
            "{}",
            format_expense_details(args.no, &change.expense, &settings.currency_symbol)
        );
        if let Some(alert) = &change.alert {
            print_alert(alert, &settings.currency_symbol);
        }
    }

    Ok(())
}

/// Handle `delete`; without `--force` only the record is shown
pub fn handle_delete(
    storage: &mut Storage,
    settings: &Settings,
    args: DeleteArgs,
) -> ExpenseResult<()> {
    let index = position(args.no)?;

    if !args.force {
        let entry = storage.expenses.get_at(index)?;
        print!(
            "{}",
            format_expense_details(args.no, &entry.expense, &settings.currency_symbol)
        );
        println!();
        println!("Run again with --force to delete this expense.");
        return Ok(());
    }

    let intent = Intent::Delete(ExpenseSelector::Position(index));
    if let Outcome::Deleted(entry) = execute(storage, intent)? {
        println!(
            "Deleted expense #{}: {} {} ({})",
            args.no,
            entry.expense.amount.format_with_symbol(&settings.currency_symbol),
            entry.expense.category,
            entry.expense.description
        );
    }

    Ok(())
}

/// Handle `list`
pub fn handle_list(storage: &Storage, settings: &Settings, args: ListArgs) -> ExpenseResult<()> {
    let month = args.month.resolve()?;
    let filter = args.view.apply(ExpenseFilter::new().month(month));
    let view = query(storage.expenses.all(), &filter);

    println!("Expenses for {}", month.label());
    print!(
        "{}",
        format_expense_table(&view, &settings.currency_symbol, &settings.date_format)
    );

    Ok(())
}
