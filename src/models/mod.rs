//! Core data models for the expense tracker
//!
//! Expenses, amounts, month keys and the ids the store hands out.

pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use expense::{normalize_category, Expense, ExpenseEntry, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, PeriodParseError};
