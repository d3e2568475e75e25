//! Workbook writer - kept rows into a single-sheet .xlsx

use crate::error::{SieveError, SieveResult};
use crate::types::{CellValue, Row};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Worksheet name of the produced workbook.
pub const OUTPUT_SHEET_NAME: &str = "Filtered";

/// Writes rows to a one-sheet .xlsx workbook.
pub struct WorkbookWriter {
    rows: Vec<Row>,
}

impl WorkbookWriter {
    /// Create a new workbook writer over the rows to be written
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Write the rows to `output_path` as a workbook with one sheet.
    ///
    /// An empty row set still produces a valid workbook holding an empty
    /// sheet.
    pub fn write(&self, output_path: &Path) -> SieveResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(OUTPUT_SHEET_NAME)
            .map_err(|e| SieveError::Export(format!("Failed to set worksheet name: {e}")))?;

        let column_names = self.column_names();

        // Header row (row 0)
        for (col_idx, name) in column_names.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, name)
                .map_err(|e| SieveError::Export(format!("Failed to write header: {e}")))?;
        }

        // Data rows (starting at row 1); absent cells stay blank
        for (row_idx, row) in self.rows.iter().enumerate() {
            let sheet_row = (row_idx + 1) as u32;
            for (col_idx, name) in column_names.iter().enumerate() {
                if let Some(value) = row.get(name) {
                    Self::write_cell(worksheet, sheet_row, col_idx as u16, value)?;
                }
            }
        }

        workbook
            .save(output_path)
            .map_err(|e| SieveError::Export(format!("Failed to save Excel file: {e}")))?;

        Ok(())
    }

    /// Column structure of the output: the union of the rows' keys in
    /// first-seen order.
    fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for row in &self.rows {
            for column in row.columns() {
                if !names.iter().any(|n| n == column) {
                    names.push(column.to_string());
                }
            }
        }
        names
    }

    /// Write a single cell with the primitive matching its type.
    fn write_cell(
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        value: &CellValue,
    ) -> SieveResult<()> {
        match value {
            CellValue::Text(s) => worksheet.write_string(row, col, s),
            CellValue::Number(n) => worksheet.write_number(row, col, *n),
            CellValue::Boolean(b) => worksheet.write_boolean(row, col, *b),
        }
        .map_err(|e| SieveError::Export(format!("Failed to write cell: {e}")))?;

        Ok(())
    }
}
