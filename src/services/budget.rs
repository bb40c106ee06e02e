//! Budget service
//!
//! Sets and clears monthly thresholds and compares a month's spending
//! against its threshold. The comparison keeps no state: every call that
//! finds a month over budget reports it again.

use std::fmt;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey};
use crate::reports::aggregate;
use crate::storage::{BudgetMap, Storage};

/// True when `month` has a threshold and `current_total` is strictly above it
pub fn is_over_budget(budgets: &BudgetMap, month: MonthKey, current_total: Money) -> bool {
    match budgets.get(&month) {
        Some(threshold) => current_total > *threshold,
        None => false,
    }
}

/// Build an alert when `current_total` exceeds the month's threshold
pub fn evaluate(budgets: &BudgetMap, month: MonthKey, current_total: Money) -> Option<BudgetAlert> {
    if !is_over_budget(budgets, month, current_total) {
        return None;
    }
    budgets.get(&month).map(|threshold| BudgetAlert {
        month,
        total: current_total,
        threshold: *threshold,
    })
}

/// A month whose spending went over its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetAlert {
    pub month: MonthKey,
    pub total: Money,
    pub threshold: Money,
}

impl BudgetAlert {
    /// How far over the threshold the month is
    pub fn overspend(&self) -> Money {
        self.total - self.threshold
    }

    /// Alert text using a currency symbol
    pub fn message(&self, symbol: &str) -> String {
        format!(
            "Your expenses for {} ({}) have exceeded the budget of {}",
            self.month.label(),
            self.total.format_with_symbol(symbol),
            self.threshold.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(""))
    }
}

/// Spending against the threshold for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetStatus {
    pub month: MonthKey,
    pub budget: Option<Money>,
    pub spent: Money,
}

impl BudgetStatus {
    /// Budget left, negative once overspent; `None` without a budget
    pub fn remaining(&self) -> Option<Money> {
        self.budget.map(|b| b - self.spent)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.budget, Some(b) if self.spent > b)
    }
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create or overwrite the threshold for `month`, returning the previous one
    pub fn set(&mut self, month: MonthKey, amount: Money) -> ExpenseResult<Option<Money>> {
        if !amount.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Budget must be greater than 0 (got {})",
                amount
            )));
        }
        if amount > Money::MAX_ENTRY {
            return Err(ExpenseError::Validation(format!(
                "Budget must not exceed {} (got {})",
                Money::MAX_ENTRY,
                amount
            )));
        }

        let previous = self.storage.budget.set(month, amount)?;
        tracing::info!(%month, %amount, "budget set");

        let entry = match previous {
            Some(old) => AuditEntry::update(
                EntityType::Budget,
                month.to_string(),
                &old,
                &amount,
                Some(format!("{} -> {}", old, amount)),
            ),
            None => AuditEntry::create(EntityType::Budget, month.to_string(), &amount, None),
        };
        self.storage.audit(&entry);

        Ok(previous)
    }

    /// Remove the threshold for `month`, returning it
    pub fn clear(&mut self, month: MonthKey) -> ExpenseResult<Money> {
        let removed = self.storage.budget.remove(month)?;
        tracing::info!(%month, "budget cleared");

        self.storage.audit(&AuditEntry::delete(
            EntityType::Budget,
            month.to_string(),
            &removed,
            None,
        ));

        Ok(removed)
    }

    /// Spending against the threshold for `month`
    pub fn status(&self, month: MonthKey) -> BudgetStatus {
        status(self.storage, month)
    }

    /// Alert for `month` if its current total is over budget
    pub fn check(&self, month: MonthKey) -> Option<BudgetAlert> {
        check(self.storage, month)
    }
}

/// Spending against the threshold for `month`
pub fn status(storage: &Storage, month: MonthKey) -> BudgetStatus {
    BudgetStatus {
        month,
        budget: storage.budget.get(month),
        spent: aggregate::monthly_total(storage.expenses.records(), month),
    }
}

/// Alert for `month` if its current total is over budget
pub fn check(storage: &Storage, month: MonthKey) -> Option<BudgetAlert> {
    let total = aggregate::monthly_total(storage.expenses.records(), month);
    let alert = evaluate(storage.budget.all(), month, total);
    if let Some(alert) = &alert {
        tracing::warn!(
            month = %alert.month,
            total = %alert.total,
            threshold = %alert.threshold,
            "month is over budget"
        );
    }
    alert
}
