//! Storage layer for the expense tracker
//!
//! Two independent JSON files, one per repository, written atomically.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::{load_budget, save_budget, BudgetMap, BudgetRepository};
pub use expenses::{load_expenses, save_expenses, ExpenseRepository};
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Application context owning both repositories
///
/// Services borrow this mutably; there is no other shared state.
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub budget: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = if enabled {
            Some(AuditLogger::new(self.paths.audit_log()))
        } else {
            None
        };
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> ExpenseResult<()> {
        self.expenses.load()?;
        self.budget.load()?;
        tracing::info!(
            expenses = self.expenses.len(),
            budgets = self.budget.all().len(),
            "storage loaded"
        );
        Ok(())
    }

    /// Append an entry to the audit log, if enabled
    ///
    /// The data change has already been saved when this runs, so a failed
    /// append is logged and does not fail the operation.
    pub fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                tracing::warn!(
                    error = %e,
                    entity = %entry.entity_id,
                    "failed to append audit entry"
                );
            }
        }
    }

    /// Get the audit logger, if enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.is_empty());
        assert!(storage.budget.all().is_empty());
    }

    #[test]
    fn test_corrupt_budget_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();
        std::fs::write(paths.budget_file(), "{").unwrap();

        assert!(storage.load_all().unwrap_err().is_corrupt());
    }
}
