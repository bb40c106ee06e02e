//! Budget CLI commands

use clap::Subcommand;

use crate::commands::{execute, Intent, Outcome};
use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_budget_status};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::budget;
use crate::storage::Storage;

use super::{print_alert, MonthArgs};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for a month (defaults to the current month)
    Set {
        /// Budget amount, greater than zero
        amount: String,

        #[command(flatten)]
        month: MonthArgs,
    },

    /// Show spending against the budget for a month
    Show {
        #[command(flatten)]
        month: MonthArgs,
    },

    /// List every month that has a budget
    List,

    /// Remove the budget for a month
    Clear {
        #[command(flatten)]
        month: MonthArgs,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { amount, month } => {
            let month = month.resolve()?;
            let amount = Money::parse(&amount)
                .map_err(|e| ExpenseError::Validation(format!("Invalid budget: {}", e)))?;

            if let Outcome::BudgetSet {
                amount,
                previous,
                alert,
                ..
            } = execute(storage, Intent::SetBudget { month, amount })?
            {
                match previous {
                    Some(old) => println!(
                        "Budget for {} changed from {} to {}",
                        month.label(),
                        old.format_with_symbol(symbol),
                        amount.format_with_symbol(symbol)
                    ),
                    None => println!(
                        "Budget for {} set to {}",
                        month.label(),
                        amount.format_with_symbol(symbol)
                    ),
                }
                if let Some(alert) = &alert {
                    print_alert(alert, symbol);
                }
            }
        }

        BudgetCommands::Show { month } => {
            let status = budget::status(storage, month.resolve()?);
            print!("{}", format_budget_status(&status, symbol));
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(storage.budget.all(), symbol));
        }

        BudgetCommands::Clear { month } => {
            let month = month.resolve()?;
            if let Outcome::BudgetCleared { amount, .. } =
                execute(storage, Intent::ClearBudget(month))?
            {
                println!(
                    "Removed budget of {} for {}",
                    amount.format_with_symbol(symbol),
                    month.label()
                );
            }
        }
    }

    Ok(())
}
