//! Service layer for the expense tracker
//!
//! Services sit between the presentation layer and storage: they validate
//! input, mutate the repositories, write the audit trail and evaluate
//! budgets after a change.

pub mod budget;
pub mod expense;
pub mod query;

pub use budget::{is_over_budget, BudgetAlert, BudgetService, BudgetStatus};
pub use expense::{parse_date, ExpenseChange, ExpenseInput, ExpenseSelector, ExpenseService};
pub use query::{query, ExpenseFilter, ExpenseView, SortColumn, SortOrder, SortSpec, ViewRow};
