//! Expense model
//!
//! An expense is an amount spent on a date, filed under a category with a
//! short description. The persisted shape is exactly
//! `{amount, category, description, date}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::period::MonthKey;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Amount spent, always positive
    pub amount: Money,

    /// Category, trimmed and title-cased
    pub category: String,

    /// Letters, digits and spaces only
    pub description: String,

    /// Day of the expense, stored as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Expense {
    /// Build a validated expense, normalizing the category
    pub fn new(
        amount: Money,
        category: &str,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ExpenseValidationError> {
        let expense = Self {
            amount,
            category: normalize_category(category),
            description: description.into(),
            date,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Check the input invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_ENTRY {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if !is_valid_description(&self.description) {
            return Err(ExpenseValidationError::InvalidDescription(
                self.description.clone(),
            ));
        }

        Ok(())
    }

    /// The month this expense is counted in
    pub fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// Date in the persisted `YYYY-MM-DD` form
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Case-insensitive substring match across category, description and date
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.category.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.date_string().contains(&needle)
    }

    /// Re-apply the category normalization (used on load)
    pub fn normalize(&mut self) {
        self.category = normalize_category(&self.category);
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date_string(),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// An expense together with the id it was given in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry {
    pub id: ExpenseId,
    pub expense: Expense,
}

impl ExpenseEntry {
    pub fn new(expense: Expense) -> Self {
        Self {
            id: ExpenseId::new(),
            expense,
        }
    }
}

/// Trim and title-case a category name
pub fn normalize_category(category: &str) -> String {
    title_case(category.trim())
}

/// Title-case a string: a letter that follows another letter is lowercased,
/// every other letter is uppercased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// A description needs at least one character and only letters, digits and spaces
pub fn is_valid_description(description: &str) -> bool {
    let mut has_content = false;
    for c in description.chars() {
        if c == ' ' {
            continue;
        }
        if !c.is_alphanumeric() {
            return false;
        }
        has_content = true;
    }
    has_content
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
    InvalidDescription(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount must not exceed {} (got {})",
                Money::MAX_ENTRY,
                amount
            ),
            Self::EmptyCategory => write!(f, "Please select a category"),
            Self::InvalidDescription(description) => write!(
                f,
                "Description should contain only letters and numbers: '{}'",
                description
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
