//! Excel read/write module
//!
//! This module provides the two workbook boundaries of the tool:
//! - Read: first sheet of the input .xlsx → header-keyed rows
//! - Write: kept rows → single-sheet output .xlsx

mod reader;
mod writer;

pub use reader::{SheetData, WorkbookReader};
pub use writer::{WorkbookWriter, OUTPUT_SHEET_NAME};
