//! Category breakdown report
//!
//! Splits one month's spending by category with each category's share of
//! the month total. This is the data behind the category chart.

use std::cmp::Ordering;

use crate::models::{Expense, Money, MonthKey};
use crate::storage::Storage;

use super::aggregate::category_breakdown;

/// One category's share of a month
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub total: Money,
    /// Share of the month total, 0-100
    pub percentage: f64,
}

/// Spending by category for a month
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    pub month: MonthKey,
    /// Largest first; ties broken by category name
    pub slices: Vec<CategorySlice>,
    pub total: Money,
}

impl CategoryBreakdownReport {
    /// Generate the breakdown for `month` from the loaded storage
    pub fn generate(storage: &Storage, month: MonthKey) -> Self {
        Self::from_expenses(storage.expenses.records(), month)
    }

    pub fn from_expenses<'a, I>(expenses: I, month: MonthKey) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let totals = category_breakdown(expenses, month);
        let total: Money = totals.values().sum();

        let mut slices: Vec<CategorySlice> = totals
            .into_iter()
            .map(|(category, amount)| CategorySlice {
                percentage: amount.percent_of(total),
                category,
                total: amount,
            })
            .collect();

        slices.sort_by(|a, b| match b.total.cmp(&a.total) {
            Ordering::Equal => a.category.cmp(&b.category),
            other => other,
        });

        Self {
            month,
            slices,
            total,
        }
    }

    /// Nothing recorded for the month
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, d: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            "item",
            NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
        )
        .unwrap()
    }

    fn march() -> MonthKey {
        MonthKey::new(2024, 3).unwrap()
    }

    #[test]
    fn test_slices_sorted_and_percentages() {
        let expenses = vec![
            expense(2500, "travel", 1),
            expense(5000, "food", 2),
            expense(2500, "bills", 3),
        ];

        let report = CategoryBreakdownReport::from_expenses(&expenses, march());

        let names: Vec<_> = report.slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Bills", "Travel"]);
        assert_eq!(report.total.cents(), 10000);
        assert!((report.slices[0].percentage - 50.0).abs() < 1e-9);
        assert!((report.slices[1].percentage - 25.0).abs() < 1e-9);

        let pct: f64 = report.slices.iter().map(|s| s.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_other_months_ignored() {
        let mut expenses = vec![expense(1000, "food", 1)];
        expenses.push(
            Expense::new(
                Money::from_cents(9999),
                "food",
                "later",
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            )
            .unwrap(),
        );

        let report = CategoryBreakdownReport::from_expenses(&expenses, march());
        assert_eq!(report.total.cents(), 1000);
    }

    #[test]
    fn test_empty_month() {
        let report = CategoryBreakdownReport::from_expenses(&Vec::<Expense>::new(), march());
        assert!(report.is_empty());
        assert_eq!(report.total, Money::zero());
    }
}
