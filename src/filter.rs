//! Row filtering against an identifier exclusion list.
//!
//! The one algorithmic piece of the tool: given decoded rows and a list of
//! identifier strings, drop every row whose identifier appears in the list
//! and report how many rows were touched.

use crate::types::{FilterSummary, Row};
use std::collections::HashSet;

/// Column holding the identifier matched against the exclusion list.
pub const DEFAULT_ID_COLUMN: &str = "Matrícula";

/// Kept rows plus the counts for the run.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub kept: Vec<Row>,
    pub summary: FilterSummary,
}

/// Parse a user-supplied identifier list: one identifier per line, each line
/// trimmed, blank lines dropped. Duplicates are kept as-is.
pub fn parse_id_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Remove every row whose `id_column` value matches an entry of `exclude_ids`.
///
/// A row is removed iff the string rendering of its identifier cell is exactly
/// equal (case-sensitive, untrimmed) to some excluded identifier. Numeric
/// cells render in their shortest decimal form, so numeric `12345` matches
/// the text `"12345"`. A row that lacks the column has no identifier and is
/// always kept. Kept rows stay in input order.
pub fn exclude_rows(rows: Vec<Row>, id_column: &str, exclude_ids: &[String]) -> FilterOutcome {
    let exclude: HashSet<&str> = exclude_ids.iter().map(String::as_str).collect();

    let total_rows = rows.len();
    let kept: Vec<Row> = rows
        .into_iter()
        .filter(|row| match row.get(id_column) {
            Some(value) => !exclude.contains(value.to_string().as_str()),
            None => true,
        })
        .collect();

    let summary = FilterSummary::new(total_rows, total_rows - kept.len());
    FilterOutcome { kept, summary }
}
