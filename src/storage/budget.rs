//! Budget repository for JSON storage
//!
//! Monthly thresholds live in their own file, `budget.json`, as an object
//! keyed by `"<year>-<month>"`. The file is independent of the expense file
//! and is rewritten in full whenever an entry changes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MonthKey};

use super::file_io::{read_json, write_json_atomic};

/// Monthly budget thresholds, ordered by month
pub type BudgetMap = BTreeMap<MonthKey, Money>;

/// Read the budget file, returning an empty map when it does not exist
pub fn load_budget(path: &Path) -> ExpenseResult<BudgetMap> {
    let budgets: BudgetMap = read_json(path)?;
    tracing::debug!(count = budgets.len(), path = %path.display(), "loaded budgets");
    Ok(budgets)
}

/// Overwrite the budget file with `budgets`
pub fn save_budget(path: &Path, budgets: &BudgetMap) -> ExpenseResult<()> {
    write_json_atomic(path, budgets)
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    budgets: BudgetMap,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: BudgetMap::new(),
        }
    }

    /// Load budgets from disk
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.budgets = load_budget(&self.path)?;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> ExpenseResult<()> {
        save_budget(&self.path, &self.budgets)
    }

    /// All budgets in month order
    pub fn all(&self) -> &BudgetMap {
        &self.budgets
    }

    /// Get the threshold for a month
    pub fn get(&self, month: MonthKey) -> Option<Money> {
        self.budgets.get(&month).copied()
    }

    /// Create or overwrite the threshold for a month and persist,
    /// returning the previous value
    pub fn set(&mut self, month: MonthKey, amount: Money) -> ExpenseResult<Option<Money>> {
        let previous = self.budgets.insert(month, amount);

        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.budgets.insert(month, old),
                None => self.budgets.remove(&month),
            };
            return Err(e);
        }

        Ok(previous)
    }

    /// Remove the threshold for a month and persist, returning it
    pub fn remove(&mut self, month: MonthKey) -> ExpenseResult<Money> {
        let removed = self
            .budgets
            .remove(&month)
            .ok_or_else(|| ExpenseError::budget_not_found(month.to_string()))?;

        if let Err(e) = self.save() {
            self.budgets.insert(month, removed);
            return Err(e);
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let mut repo = BudgetRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn month(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.all().is_empty());
        assert_eq!(repo.get(month(2024, 3)), None);
    }

    #[test]
    fn test_set_overwrites_and_persists() {
        let (temp_dir, mut repo) = create_test_repo();

        assert_eq!(repo.set(month(2024, 3), Money::from_cents(9000)).unwrap(), None);
        assert_eq!(
            repo.set(month(2024, 3), Money::from_cents(12000)).unwrap(),
            Some(Money::from_cents(9000))
        );

        let reloaded = load_budget(&temp_dir.path().join("budget.json")).unwrap();
        assert_eq!(reloaded.get(&month(2024, 3)), Some(&Money::from_cents(12000)));
    }

    #[test]
    fn test_file_format() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.set(month(2024, 3), Money::from_cents(9000)).unwrap();

        let contents = std::fs::read_to_string(temp_dir.path().join("budget.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value, serde_json::json!({"2024-3": 90.0}));
    }

    #[test]
    fn test_reads_integer_thresholds() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(&path, r#"{"2024-3": 90, "2023-12": 150.5}"#).unwrap();

        let budgets = load_budget(&path).unwrap();
        let keys: Vec<_> = budgets.keys().copied().collect();
        assert_eq!(keys, vec![month(2023, 12), month(2024, 3)]);
        assert_eq!(budgets[&month(2024, 3)].cents(), 9000);
    }

    #[test]
    fn test_bad_key_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        std::fs::write(&path, r#"{"March": 90}"#).unwrap();

        assert!(load_budget(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.set(month(2024, 3), Money::from_cents(9000)).unwrap();

        assert_eq!(repo.remove(month(2024, 3)).unwrap().cents(), 9000);
        let err = repo.remove(month(2024, 3)).unwrap_err();
        assert!(matches!(err, ExpenseError::NotFound { .. }));
    }
}
