//! Reports for the expense tracker
//!
//! Pure aggregation over the loaded records and the reports built on it.

pub mod aggregate;
pub mod category_breakdown;
pub mod monthly_summary;
pub mod trend;

pub use aggregate::{all_monthly_totals, category_breakdown, monthly_total};
pub use category_breakdown::{CategoryBreakdownReport, CategorySlice};
pub use monthly_summary::{month_name, MonthlySummaryReport, MonthlySummaryRow};
pub use trend::{MonthlyTrendReport, TrendBar};
