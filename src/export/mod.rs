//! Export of expense data
//!
//! CSV is the only format; it mirrors the list view so a spreadsheet shows
//! what the terminal showed.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_to_file};
