//! Expense service
//!
//! Validates input at the boundary, applies add/edit/delete to the store,
//! records the change in the audit log and evaluates the budget for the
//! month the change landed in.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseEntry, ExpenseId, Money};
use crate::storage::Storage;

use super::budget::{self, BudgetAlert};

/// Input for creating or replacing an expense
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl ExpenseInput {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    /// Parse raw text fields; a missing date means today
    pub fn parse(
        amount: &str,
        category: &str,
        description: &str,
        date: Option<&str>,
    ) -> ExpenseResult<Self> {
        let amount = Money::parse(amount)
            .map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))?;

        let date = match date {
            Some(s) => parse_date(s)?,
            None => chrono::Local::now().date_naive(),
        };

        Ok(Self::new(amount, category, description, date))
    }

    /// Validate and normalize into a storable record
    pub fn into_expense(self) -> ExpenseResult<Expense> {
        Expense::new(self.amount, &self.category, self.description, self.date)
            .map_err(|e| ExpenseError::Validation(e.to_string()))
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s.trim()))
    })
}

/// Which record an edit or delete applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseSelector {
    /// 0-based position in the store
    Position(usize),
    Id(ExpenseId),
}

/// Result of an add or edit
#[derive(Debug, Clone)]
pub struct ExpenseChange {
    /// Position of the record after the change
    pub index: usize,
    pub id: ExpenseId,
    pub expense: Expense,
    /// Record that was replaced (edits only)
    pub previous: Option<Expense>,
    /// Set when the record's month is now over budget
    pub alert: Option<BudgetAlert>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new expense
    pub fn add(&mut self, input: ExpenseInput) -> ExpenseResult<ExpenseChange> {
        let expense = input.into_expense()?;
        let (index, id) = self.storage.expenses.add(expense.clone())?;
        tracing::debug!(%id, index, "expense added");

        self.storage.audit(&AuditEntry::create(
            EntityType::Expense,
            id.to_string(),
            &expense,
            Some(describe(&expense)),
        ));

        let alert = budget::check(self.storage, expense.month());

        Ok(ExpenseChange {
            index,
            id,
            expense,
            previous: None,
            alert,
        })
    }

    /// Replace the selected expense in full
    pub fn edit(
        &mut self,
        selector: ExpenseSelector,
        input: ExpenseInput,
    ) -> ExpenseResult<ExpenseChange> {
        let expense = input.into_expense()?;
        let index = self.resolve(selector)?;

        let previous = self.storage.expenses.replace(index, expense.clone())?;
        let id = self.storage.expenses.get_at(index)?.id;
        tracing::debug!(%id, index, "expense replaced");

        self.storage.audit(&AuditEntry::update(
            EntityType::Expense,
            id.to_string(),
            &previous,
            &expense,
            Some(describe(&expense)),
        ));

        let alert = budget::check(self.storage, expense.month());

        Ok(ExpenseChange {
            index,
            id,
            expense,
            previous: Some(previous),
            alert,
        })
    }

    /// Remove the selected expense
    pub fn delete(&mut self, selector: ExpenseSelector) -> ExpenseResult<ExpenseEntry> {
        let index = self.resolve(selector)?;
        let removed = self.storage.expenses.remove(index)?;
        tracing::debug!(id = %removed.id, index, "expense removed");

        self.storage.audit(&AuditEntry::delete(
            EntityType::Expense,
            removed.id.to_string(),
            &removed.expense,
            Some(describe(&removed.expense)),
        ));

        Ok(removed)
    }

    /// Turn a selector into a store position
    fn resolve(&self, selector: ExpenseSelector) -> ExpenseResult<usize> {
        match selector {
            ExpenseSelector::Position(index) => {
                let len = self.storage.expenses.len();
                if index >= len {
                    return Err(ExpenseError::IndexOutOfRange { index, len });
                }
                Ok(index)
            }
            ExpenseSelector::Id(id) => self
                .storage
                .expenses
                .position(id)
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string())),
        }
    }
}

fn describe(expense: &Expense) -> String {
    format!(
        "{} {} ({}) on {}",
        expense.amount,
        expense.category,
        expense.description,
        expense.date_string()
    )
}
