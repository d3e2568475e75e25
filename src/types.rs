use serde::Serialize;
use std::fmt;

//==============================================================================
// Cell values
//==============================================================================

/// A single spreadsheet cell value.
///
/// Empty cells are never materialized: a blank cell simply has no entry in
/// its [`Row`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Numeric cell (integers and floats share one representation)
    Number(f64),
    /// Text cell
    Text(String),
    /// Boolean cell
    Boolean(bool),
}

impl fmt::Display for CellValue {
    /// Renders the value the way the identifier comparison sees it.
    ///
    /// `f64` Display is shortest-round-trip, so a numeric cell `12345`
    /// renders as `"12345"` and compares equal to the same text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

//==============================================================================
// Rows
//==============================================================================

/// One record from the first sheet, keyed by column header.
///
/// Keys keep their insertion order (header order at decode time), so the
/// output workbook can derive its column structure from the rows themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Set a cell value, replacing any existing value for the column.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Get the value for a column, or `None` if the row lacks it.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// `(column, value)` pairs in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (S, CellValue)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

//==============================================================================
// Filter summary
//==============================================================================

/// Row counts reported after a filter run.
///
/// `remaining_rows` is always `total_rows - removed_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub total_rows: usize,
    pub removed_rows: usize,
    pub remaining_rows: usize,
}

impl FilterSummary {
    #[must_use]
    pub fn new(total_rows: usize, removed_rows: usize) -> Self {
        Self {
            total_rows,
            removed_rows,
            remaining_rows: total_rows - removed_rows,
        }
    }
}
