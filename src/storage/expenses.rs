//! Expense repository for JSON storage
//!
//! Holds the ordered list of expenses and writes the whole list back to
//! `expenses.json` after every mutation. A mutation whose write fails is
//! rolled back, so memory and disk never disagree.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseEntry, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Read the expense file, normalizing every category
///
/// Returns an empty list when the file does not exist.
pub fn load_expenses(path: &Path) -> ExpenseResult<Vec<Expense>> {
    let mut expenses: Vec<Expense> = read_json(path)?;
    for expense in &mut expenses {
        expense.normalize();
    }
    tracing::debug!(count = expenses.len(), path = %path.display(), "loaded expenses");
    Ok(expenses)
}

/// Overwrite the expense file with `expenses`
pub fn save_expenses<'a, I>(path: &Path, expenses: I) -> ExpenseResult<()>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let records: Vec<&Expense> = expenses.into_iter().collect();
    write_json_atomic(path, &records)
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    entries: Vec<ExpenseEntry>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Load expenses from disk, replacing anything held in memory
    pub fn load(&mut self) -> ExpenseResult<()> {
        let expenses = load_expenses(&self.path)?;
        self.entries = expenses.into_iter().map(ExpenseEntry::new).collect();
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> ExpenseResult<()> {
        save_expenses(&self.path, self.records())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// All records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.entries.iter().map(|e| &e.expense)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at a position
    pub fn get_at(&self, index: usize) -> ExpenseResult<&ExpenseEntry> {
        self.entries.get(index).ok_or(ExpenseError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Get an entry by id
    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Current position of an id
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Append an expense and persist, returning its position and id
    pub fn add(&mut self, expense: Expense) -> ExpenseResult<(usize, ExpenseId)> {
        let entry = ExpenseEntry::new(expense);
        let id = entry.id;
        self.entries.push(entry);

        if let Err(e) = self.save() {
            self.entries.pop();
            return Err(e);
        }

        Ok((self.entries.len() - 1, id))
    }

    /// Replace the expense at `index` in full and persist, returning the old record
    ///
    /// The entry keeps its id.
    pub fn replace(&mut self, index: usize, expense: Expense) -> ExpenseResult<Expense> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(ExpenseError::IndexOutOfRange { index, len })?;
        let old = std::mem::replace(&mut slot.expense, expense);

        if let Err(e) = self.save() {
            self.entries[index].expense = old;
            return Err(e);
        }

        Ok(old)
    }

    /// Remove the expense at `index` and persist, returning it
    ///
    /// Every later position shifts down by one.
    pub fn remove(&mut self, index: usize) -> ExpenseResult<ExpenseEntry> {
        if index >= self.entries.len() {
            return Err(ExpenseError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);

        if let Err(e) = self.save() {
            self.entries.insert(index, removed);
            return Err(e);
        }

        Ok(removed)
    }

    /// Replace the expense with the given id
    pub fn replace_by_id(&mut self, id: ExpenseId, expense: Expense) -> ExpenseResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.replace(index, expense)
    }

    /// Remove the expense with the given id
    pub fn remove_by_id(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseEntry> {
        let index = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let mut repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn expense(cents: i64, category: &str, description: &str, day: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            description,
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.is_empty());
    }

    #[test]
    fn test_add_writes_through() {
        let (temp_dir, mut repo) = create_test_repo();

        let (index, id) = repo.add(expense(10000, "food", "lunch", 5)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(repo.get(id).unwrap().expense.category, "Food");

        let reloaded = load_expenses(&temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reloaded, vec![expense(10000, "Food", "lunch", 5)]);
    }

    #[test]
    fn test_replace_at_index() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.add(expense(100, "Food", "a", 1)).unwrap();
        let (_, id) = repo.add(expense(200, "Food", "b", 2)).unwrap();

        let replacement = expense(999, "Bills", "power", 9);
        let old = repo.replace(1, replacement.clone()).unwrap();

        assert_eq!(old.description, "b");
        assert_eq!(repo.all()[1].expense, replacement);
        assert_eq!(repo.all()[1].id, id);
    }

    #[test]
    fn test_remove_at_index() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.add(expense(100, "Food", "a", 1)).unwrap();
        repo.add(expense(200, "Food", "b", 2)).unwrap();
        repo.add(expense(300, "Food", "c", 3)).unwrap();

        let removed = repo.remove(1).unwrap();

        assert_eq!(removed.expense.description, "b");
        assert_eq!(repo.len(), 2);
        let remaining: Vec<_> = repo.records().map(|e| e.description.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let (_temp_dir, mut repo) = create_test_repo();

        let err = repo.remove(0).unwrap_err();
        assert!(err.is_index_error());

        repo.add(expense(100, "Food", "a", 1)).unwrap();
        let err = repo.remove(5).unwrap_err();
        assert!(matches!(err, ExpenseError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_replace_out_of_range() {
        let (_temp_dir, mut repo) = create_test_repo();
        let err = repo.replace(0, expense(100, "Food", "a", 1)).unwrap_err();
        assert!(err.is_index_error());
    }

    #[test]
    fn test_ids_survive_removal_of_earlier_entries() {
        let (_temp_dir, mut repo) = create_test_repo();
        let (_, first) = repo.add(expense(100, "Food", "a", 1)).unwrap();
        let (_, second) = repo.add(expense(200, "Food", "b", 2)).unwrap();

        repo.remove_by_id(first).unwrap();

        assert_eq!(repo.position(second), Some(0));
        let old = repo
            .replace_by_id(second, expense(250, "Food", "b2", 2))
            .unwrap();
        assert_eq!(old.description, "b");

        let err = repo.remove_by_id(first).unwrap_err();
        assert!(matches!(err, ExpenseError::NotFound { .. }));
    }

    #[test]
    fn test_load_normalizes_categories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(
            &path,
            r#"[{"amount": 12.5, "category": "  fast food ", "description": "burger", "date": "2024-03-05"}]"#,
        )
        .unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded[0].category, "Fast Food");
        assert_eq!(loaded[0].amount.cents(), 1250);
    }

    #[test]
    fn test_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, r#"[{"amount": 1, "category": "Food"}]"#).unwrap();

        let mut repo = ExpenseRepository::new(path);
        assert!(repo.load().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_save_load_round_trip_is_idempotent() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.add(expense(1999, "food", "snacks", 1)).unwrap();
        repo.add(expense(70001, "travel", "flight home", 20)).unwrap();

        let path = temp_dir.path().join("expenses.json");
        let first = load_expenses(&path).unwrap();
        save_expenses(&path, &first).unwrap();
        let second = load_expenses(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be makes every write fail
        let path = temp_dir.path().join("expenses.json");
        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();

        let mut repo = ExpenseRepository::new(path);
        assert!(repo.add(expense(100, "Food", "a", 1)).is_err());
        assert!(repo.is_empty());
    }
}
