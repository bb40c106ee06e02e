//! Filtered and sorted views of the expense list
//!
//! A view is a borrowed selection of store entries. Each row keeps its
//! store position so the presentation layer can hand it back for edit or
//! delete after sorting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{ExpenseEntry, Money, MonthKey};

/// Displayed column a view can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Store order
    Serial,
    Date,
    Category,
    Description,
    Amount,
}

impl SortColumn {
    /// Column heading as shown in tables and CSV
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Serial => "S.No",
            Self::Date => "Date",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Amount => "Amount",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "s.no" | "sno" | "no" | "serial" => Ok(Self::Serial),
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            "description" => Ok(Self::Description),
            "amount" => Ok(Self::Amount),
            other => Err(format!("Unknown column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Column and direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            order: SortOrder::Ascending,
        }
    }

    /// Sort state after a column heading is chosen: the same column flips
    /// direction, a different column starts ascending
    pub fn select(current: Option<Self>, column: SortColumn) -> Self {
        match current {
            Some(spec) if spec.column == column => Self {
                column,
                order: spec.order.toggle(),
            },
            _ => Self::ascending(column),
        }
    }
}

/// Options for filtering and sorting the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Restrict to one month; `None` keeps every month
    pub month: Option<MonthKey>,
    /// Case-insensitive substring over category, description and date
    pub search: Option<String>,
    /// Store order when `None`
    pub sort: Option<SortSpec>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.is_empty() { None } else { Some(text) };
        self
    }

    pub fn sort(mut self, column: SortColumn, order: SortOrder) -> Self {
        self.sort = Some(SortSpec { column, order });
        self
    }

    /// Whether an entry passes the month and search filters
    pub fn matches(&self, entry: &ExpenseEntry) -> bool {
        let expense = &entry.expense;
        if let Some(month) = self.month {
            if !month.contains(expense.date) {
                return false;
            }
        }
        match &self.search {
            Some(text) => expense.matches_search(text),
            None => true,
        }
    }
}

/// One displayed row
#[derive(Debug, Clone, Copy)]
pub struct ViewRow<'a> {
    /// 1-based display number
    pub serial: usize,
    /// Position in the store
    pub index: usize,
    pub entry: &'a ExpenseEntry,
}

/// A filtered, sorted selection with the total of its rows
#[derive(Debug, Clone)]
pub struct ExpenseView<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub total: Money,
}

impl<'a> ExpenseView<'a> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Store position of the row shown at `serial` (1-based)
    pub fn store_index(&self, serial: usize) -> Option<usize> {
        serial
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(|row| row.index)
    }
}

/// Apply `filter` to the store entries
///
/// Sorting is stable, and a descending sort keeps equal rows in store order.
pub fn query<'a>(entries: &'a [ExpenseEntry], filter: &ExpenseFilter) -> ExpenseView<'a> {
    let mut selected: Vec<(usize, &'a ExpenseEntry)> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.matches(entry))
        .collect();

    if let Some(spec) = filter.sort {
        selected.sort_by(|a, b| {
            let ord = compare(spec.column, *a, *b);
            match spec.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
    }

    let total = selected.iter().map(|(_, entry)| entry.expense.amount).sum();
    let rows = selected
        .into_iter()
        .enumerate()
        .map(|(i, (index, entry))| ViewRow {
            serial: i + 1,
            index,
            entry,
        })
        .collect();

    ExpenseView { rows, total }
}

fn compare(column: SortColumn, a: (usize, &ExpenseEntry), b: (usize, &ExpenseEntry)) -> Ordering {
    let (ea, eb) = (&a.1.expense, &b.1.expense);
    match column {
        SortColumn::Serial => a.0.cmp(&b.0),
        SortColumn::Date => ea.date.cmp(&eb.date),
        SortColumn::Category => ea.category.cmp(&eb.category),
        SortColumn::Description => ea.description.cmp(&eb.description),
        SortColumn::Amount => ea.amount.cmp(&eb.amount),
    }
}
