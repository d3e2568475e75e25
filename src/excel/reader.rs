//! Workbook reader - first sheet of an .xlsx into header-keyed rows

use crate::error::{SieveError, SieveResult};
use crate::types::{CellValue, Row};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Decoded first sheet: its name, header row and data rows.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Reads the first worksheet of an .xlsx workbook.
pub struct WorkbookReader {
    path: PathBuf,
}

impl WorkbookReader {
    /// Create a new workbook reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Decode the first sheet into rows keyed by header-row column names.
    pub fn read_first_sheet(&self) -> SieveResult<SheetData> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SieveError::Workbook(format!("Failed to open Excel file: {e}")))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| SieveError::Workbook("Workbook has no sheets".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            SieveError::Workbook(format!("Failed to read sheet '{sheet_name}': {e}"))
        })?;

        let (headers, rows) = Self::decode_range(&range);

        Ok(SheetData {
            sheet_name,
            headers,
            rows,
        })
    }

    /// Split a cell range into header names and data rows.
    ///
    /// Row 0 is the header row. Blank cells are omitted from their row, and
    /// rows with no non-blank cell are skipped entirely.
    fn decode_range(range: &Range<Data>) -> (Vec<String>, Vec<Row>) {
        let (height, width) = range.get_size();
        if height == 0 {
            return (Vec::new(), Vec::new());
        }

        // Header row (row 0); unnameable cells fall back to a positional name
        let mut headers: Vec<String> = Vec::with_capacity(width);
        for col in 0..width {
            let name = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                _ => format!("col_{col}"),
            };
            headers.push(name);
        }

        let mut rows = Vec::new();
        for r in 1..height {
            let mut row = Row::new();
            for (col, header) in headers.iter().enumerate() {
                if let Some(cell) = range.get((r, col)) {
                    if let Some(value) = Self::convert_cell(cell) {
                        row.insert(header.clone(), value);
                    }
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        (headers, rows)
    }

    /// Convert a calamine cell to a [`CellValue`], or `None` for blank cells.
    fn convert_cell(cell: &Data) -> Option<CellValue> {
        match cell {
            Data::Empty => None,
            Data::String(s) => Some(CellValue::Text(s.clone())),
            Data::Float(f) => Some(CellValue::Number(*f)),
            Data::Int(i) => Some(CellValue::Number(*i as f64)),
            Data::Bool(b) => Some(CellValue::Boolean(*b)),
            Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
            // Error cells decode as blank
            Data::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell_blank_and_error_are_none() {
        assert_eq!(WorkbookReader::convert_cell(&Data::Empty), None);
        assert_eq!(
            WorkbookReader::convert_cell(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
    }

    #[test]
    fn test_convert_cell_int_and_float_share_numeric_kind() {
        assert_eq!(
            WorkbookReader::convert_cell(&Data::Int(12345)),
            Some(CellValue::Number(12345.0))
        );
        assert_eq!(
            WorkbookReader::convert_cell(&Data::Float(12.5)),
            Some(CellValue::Number(12.5))
        );
    }

    #[test]
    fn test_convert_cell_text_and_bool() {
        assert_eq!(
            WorkbookReader::convert_cell(&Data::String("A1".to_string())),
            Some(CellValue::Text("A1".to_string()))
        );
        assert_eq!(
            WorkbookReader::convert_cell(&Data::Bool(true)),
            Some(CellValue::Boolean(true))
        );
    }
}
