use thiserror::Error;

pub type SieveResult<T> = Result<T, SieveError>;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Workbook(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
