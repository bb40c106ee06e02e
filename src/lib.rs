//! Expense Tracker - personal expense tracking with monthly budgets
//!
//! Records expenses (amount, category, description, date) in a JSON file,
//! keeps an optional spending threshold per calendar month, and derives
//! monthly totals, category breakdowns and CSV exports from the records.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Error type shared by every layer
//! - `models`: Expenses, money amounts, month keys and ids
//! - `storage`: JSON persistence with write-through repositories
//! - `audit`: Append-only log of every change
//! - `reports`: Aggregation and the reports built on it
//! - `services`: Validation, budget evaluation, filtering and sorting
//! - `commands`: Intents from the user and their outcomes
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Argument definitions and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::commands::{execute, Intent};
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseInput;
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all()?;
//! let input = ExpenseInput::parse("100", "food", "lunch", Some("2024-03-05"))?;
//! let outcome = execute(&mut storage, Intent::Add(input))?;
//! if let Some(alert) = outcome.alert() {
//!     println!("{}", alert);
//! }
//! ```

pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
