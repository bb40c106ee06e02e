//! Command core
//!
//! The presentation layer describes what the user asked for as an
//! [`Intent`]; [`execute`] runs it against the storage and returns an
//! [`Outcome`] for the caller to render. Nothing here prints.

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::export;
use crate::models::{Expense, ExpenseEntry, Money, MonthKey};
use crate::services::{
    budget, query, BudgetAlert, BudgetService, ExpenseChange, ExpenseFilter, ExpenseInput,
    ExpenseSelector, ExpenseService,
};
use crate::storage::Storage;

/// A state-changing request from the user
#[derive(Debug, Clone)]
pub enum Intent {
    Add(ExpenseInput),
    Edit {
        selector: ExpenseSelector,
        input: ExpenseInput,
    },
    Delete(ExpenseSelector),
    SetBudget {
        month: MonthKey,
        amount: Money,
    },
    ClearBudget(MonthKey),
    Export {
        path: PathBuf,
        filter: ExpenseFilter,
    },
}

/// What an executed intent did
#[derive(Debug, Clone)]
pub enum Outcome {
    Added(ExpenseChange),
    Edited(ExpenseChange),
    Deleted(ExpenseEntry),
    BudgetSet {
        month: MonthKey,
        amount: Money,
        previous: Option<Money>,
        /// Present when the month is already over the new threshold
        alert: Option<BudgetAlert>,
    },
    BudgetCleared {
        month: MonthKey,
        amount: Money,
    },
    Exported {
        path: PathBuf,
        count: usize,
    },
}

impl Outcome {
    /// Budget alert raised by the change, if any
    pub fn alert(&self) -> Option<&BudgetAlert> {
        match self {
            Outcome::Added(change) | Outcome::Edited(change) => change.alert.as_ref(),
            Outcome::BudgetSet { alert, .. } => alert.as_ref(),
            _ => None,
        }
    }

    /// The stored record for adds and edits
    pub fn expense(&self) -> Option<&Expense> {
        match self {
            Outcome::Added(change) | Outcome::Edited(change) => Some(&change.expense),
            Outcome::Deleted(entry) => Some(&entry.expense),
            _ => None,
        }
    }
}

/// Run an intent against the storage
pub fn execute(storage: &mut Storage, intent: Intent) -> ExpenseResult<Outcome> {
    tracing::debug!(?intent, "executing");

    match intent {
        Intent::Add(input) => ExpenseService::new(storage).add(input).map(Outcome::Added),
        Intent::Edit { selector, input } => ExpenseService::new(storage)
            .edit(selector, input)
            .map(Outcome::Edited),
        Intent::Delete(selector) => ExpenseService::new(storage)
            .delete(selector)
            .map(Outcome::Deleted),
        Intent::SetBudget { month, amount } => {
            let previous = BudgetService::new(storage).set(month, amount)?;
            Ok(Outcome::BudgetSet {
                month,
                amount,
                previous,
                alert: budget::check(storage, month),
            })
        }
        Intent::ClearBudget(month) => {
            let amount = BudgetService::new(storage).clear(month)?;
            Ok(Outcome::BudgetCleared { month, amount })
        }
        Intent::Export { path, filter } => {
            let view = query(storage.expenses.all(), &filter);
            let count = export::export_to_file(&view, &path)?;
            Ok(Outcome::Exported { path, count })
        }
    }
}
