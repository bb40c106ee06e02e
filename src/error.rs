//! Error types for the expense tracker
//!
//! Input problems, stale selections and unreadable data files each get their
//! own variant so the presentation layer can decide how to report them.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad amount, category, description, date or budget at the input boundary
    #[error("Validation error: {0}")]
    Validation(String),

    /// A positional selection that no longer exists (`index` is 0-based)
    #[error("No expense #{} (store has {len})", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A persisted file exists but cannot be understood
    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget entries
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a corrupt data error for the given file
    pub fn corrupt(path: &Path, reason: impl ToString) -> Self {
        Self::CorruptData {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a stale positional selection
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a corrupt data error
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
        assert!(matches!(err, ExpenseError::NotFound { .. }));
    }

    #[test]
    fn test_index_error() {
        let err = ExpenseError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "No expense #4 (store has 2)");
        assert!(err.is_index_error());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_corrupt_error() {
        let err = ExpenseError::corrupt(&PathBuf::from("data/expenses.json"), "expected value");
        assert_eq!(
            err.to_string(),
            "Corrupt data in data/expenses.json: expected value"
        );
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
