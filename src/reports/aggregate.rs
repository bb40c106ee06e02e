//! Month and category aggregation
//!
//! Every function is a single pass over the records with a map accumulator.
//! Nothing is indexed ahead of time; callers that need several views of the
//! same data should compute them once per request.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, MonthKey};

/// Sum of amounts for records dated in `month` (zero when none match)
pub fn monthly_total<'a, I>(expenses: I, month: MonthKey) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Amounts in `month` grouped by category
///
/// An empty map means there is nothing to show for that month.
pub fn category_breakdown<'a, I>(expenses: I, month: MonthKey) -> BTreeMap<String, Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses.into_iter().filter(|e| month.contains(e.date)) {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// Every record summed into its month, ascending by `(year, month)`
pub fn all_monthly_totals<'a, I>(expenses: I) -> BTreeMap<MonthKey, Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals: BTreeMap<MonthKey, Money> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month()).or_default() += expense.amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            "test",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
        .unwrap()
    }

    fn month(y: i32, m: u32) -> MonthKey {
        MonthKey::new(y, m).unwrap()
    }

    #[test]
    fn test_monthly_total_empty() {
        let expenses: Vec<Expense> = Vec::new();
        assert_eq!(monthly_total(&expenses, month(2024, 3)), Money::zero());
    }

    #[test]
    fn test_monthly_total_filters_by_year_and_month() {
        let expenses = vec![
            expense(10000, "food", 2024, 3, 5),
            expense(2550, "travel", 2024, 3, 31),
            expense(999, "food", 2024, 4, 1),
            expense(5000, "food", 2023, 3, 5),
        ];

        assert_eq!(monthly_total(&expenses, month(2024, 3)).cents(), 12550);
        assert_eq!(monthly_total(&expenses, month(2024, 4)).cents(), 999);
        assert_eq!(monthly_total(&expenses, month(2024, 5)), Money::zero());
    }

    #[test]
    fn test_category_breakdown_sums_to_total() {
        let expenses = vec![
            expense(10000, "food", 2024, 3, 5),
            expense(4000, "Travel", 2024, 3, 6),
            expense(500, "FOOD", 2024, 3, 7),
            expense(700, "bills", 2024, 4, 1),
        ];

        let breakdown = category_breakdown(&expenses, month(2024, 3));

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown["Food"].cents(), 10500);
        assert_eq!(breakdown["Travel"].cents(), 4000);
        let sum: Money = breakdown.values().sum();
        assert_eq!(sum, monthly_total(&expenses, month(2024, 3)));
    }

    #[test]
    fn test_category_breakdown_empty_month() {
        let expenses = vec![expense(100, "food", 2024, 3, 5)];
        assert!(category_breakdown(&expenses, month(2024, 6)).is_empty());
    }

    #[test]
    fn test_all_monthly_totals_ordered() {
        let expenses = vec![
            expense(100, "food", 2024, 10, 5),
            expense(200, "food", 2024, 2, 5),
            expense(300, "food", 2023, 12, 5),
            expense(400, "food", 2024, 2, 20),
        ];

        let totals = all_monthly_totals(&expenses);
        let rows: Vec<_> = totals.iter().map(|(k, v)| (k.to_string(), v.cents())).collect();

        assert_eq!(
            rows,
            vec![
                ("2023-12".to_string(), 300),
                ("2024-2".to_string(), 600),
                ("2024-10".to_string(), 100),
            ]
        );
    }

    #[test]
    fn test_huge_loaded_amounts_saturate() {
        // a hand-edited file can hold amounts that never passed input validation
        let huge = Expense {
            amount: Money::from_cents(i64::MAX / 2 + 1),
            category: "Food".to_string(),
            description: "big".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let expenses = vec![huge.clone(), huge];

        assert_eq!(monthly_total(&expenses, month(2024, 3)).cents(), i64::MAX);
        assert_eq!(all_monthly_totals(&expenses)[&month(2024, 3)].cents(), i64::MAX);
        assert_eq!(category_breakdown(&expenses, month(2024, 3))["Food"].cents(), i64::MAX);
    }
}
