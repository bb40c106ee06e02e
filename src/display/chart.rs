//! Text charts
//!
//! Horizontal bars scaled so the largest value fills the chart width.

use crate::models::Money;
use crate::reports::{CategoryBreakdownReport, MonthlyTrendReport};

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Bar length for `value` with `max` mapped to `BAR_WIDTH`
///
/// Any non-zero value gets at least one cell.
pub fn bar_length(value: Money, max: Money) -> usize {
    if !value.is_positive() || !max.is_positive() {
        return 0;
    }
    let scaled = (value.cents() as f64 / max.cents() as f64 * BAR_WIDTH as f64).round() as usize;
    scaled.clamp(1, BAR_WIDTH)
}

fn bar(value: Money, max: Money) -> String {
    BAR_CHAR.to_string().repeat(bar_length(value, max))
}

/// Category shares for one month
pub fn format_category_chart(report: &CategoryBreakdownReport, symbol: &str) -> String {
    if report.is_empty() {
        return format!("No data to show for {}.\n", report.month.label());
    }

    let max = report.slices.first().map(|s| s.total).unwrap_or_default();
    let label_width = report
        .slices
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = format!("Expenses by Category: {}\n\n", report.month.label());
    for slice in &report.slices {
        output.push_str(&format!(
            "{:<width$}  {:<bar_width$}  {} ({:.1}%)\n",
            slice.category,
            bar(slice.total, max),
            slice.total.format_with_symbol(symbol),
            slice.percentage,
            width = label_width,
            bar_width = BAR_WIDTH,
        ));
    }
    output
}

/// Monthly totals, oldest first
pub fn format_trend_chart(report: &MonthlyTrendReport, symbol: &str) -> String {
    if report.is_empty() {
        return "No data to show.\n".to_string();
    }

    let max = report.max_total();
    let labels: Vec<String> = report.bars.iter().map(|b| b.month.label()).collect();
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut output = String::from("Monthly Expenses\n\n");
    for (label, b) in labels.iter().zip(&report.bars) {
        output.push_str(&format!(
            "{:>width$}  {:<bar_width$}  {}\n",
            label,
            bar(b.total, max),
            b.total.format_with_symbol(symbol),
            width = label_width,
            bar_width = BAR_WIDTH,
        ));
    }
    output
}
