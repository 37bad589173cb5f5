//! Tabular result types returned by the page parsers.

use chrono::NaiveDate;
use serde::Serialize;

use super::conversions::{parse_percent, parse_scaled_number};

/// One cell of a scraped table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

static MISSING: Cell = Cell::Missing;

impl Cell {
    /// Wrap scraped text; blank text becomes `Missing`.
    pub fn from_text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Cell::Missing
        } else {
            Cell::Text(s)
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Converts display text (`"1,234"`, `"1.5B"`) to a number. Text that does not
    /// parse is kept as-is so no information is lost.
    #[must_use]
    pub fn to_number(&self) -> Cell {
        match self {
            Cell::Text(s) => match parse_scaled_number(s) {
                Some(v) => Cell::Number(v),
                None if is_placeholder(s) => Cell::Missing,
                None => self.clone(),
            },
            other => other.clone(),
        }
    }

    /// Converts a percentage (`"12.5%"`) to a fraction (`0.125`).
    #[must_use]
    pub fn to_fraction(&self) -> Cell {
        match self {
            Cell::Text(s) => match parse_percent(s) {
                Some(v) => Cell::Number(v),
                None if is_placeholder(s) => Cell::Missing,
                None => self.clone(),
            },
            other => other.clone(),
        }
    }

    fn text(&self) -> String {
        match self {
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Missing => String::new(),
        }
    }
}

fn is_placeholder(s: &str) -> bool {
    matches!(s.trim(), "" | "N/A" | "-" | "--")
}

/// A page table: header labels plus rows of cells.
///
/// Rows may be ragged when the source markup is; lookups past the end of a row
/// read as [`Cell::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells in the widest row or header.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.columns.len()))
            .max()
            .unwrap_or(0)
    }

    /// Index of a column by exact label, falling back to a case-insensitive match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name).or_else(|| {
            self.columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(name.trim()))
        })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// All cells of a named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(idx).unwrap_or(&MISSING))
                .collect(),
        )
    }

    /// Non-missing cells of a named column rendered as strings.
    pub fn text_column(&self, name: &str) -> Option<Vec<String>> {
        self.column(name).map(|cells| {
            cells
                .into_iter()
                .filter(|c| !c.is_missing())
                .map(Cell::text)
                .collect()
        })
    }

    /// Rewrites every cell of a column in place. Returns `false` if the column does not exist.
    pub fn map_column(&mut self, name: &str, f: impl Fn(&Cell) -> Cell) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = f(cell);
            }
        }
        true
    }

    /// Appends the rows of `other`. Header labels are taken from `other` only when
    /// this table has none.
    pub fn append(&mut self, other: Table) {
        if self.columns.is_empty() {
            self.columns = other.columns;
        }
        self.rows.extend(other.rows);
    }

    /// Rows of a two-column table as `(attribute, value)` text pairs.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .filter(|r| r.len() == 2)
            .map(|r| (r[0].text(), r[1].text()))
            .collect()
    }
}

/// A financial statement: one column per period end, one row per metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementTable {
    pub periods: Vec<NaiveDate>,
    pub rows: Vec<StatementRow>,
}

/// One metric across every period of a [`StatementTable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementRow {
    pub breakdown: String,
    pub values: Vec<Option<f64>>,
}

impl StatementTable {
    /// Label of the row axis.
    pub const INDEX_LABEL: &'static str = "Breakdown";

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.rows.is_empty()
    }

    pub fn row(&self, breakdown: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.breakdown == breakdown)
    }

    /// Metric names in row order.
    pub fn breakdown(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.breakdown.as_str()).collect()
    }

    pub fn value(&self, breakdown: &str, period: NaiveDate) -> Option<f64> {
        let col = self.periods.iter().position(|p| *p == period)?;
        self.row(breakdown)?.values.get(col).copied().flatten()
    }
}
