use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("no input files supplied")]
    EmptyBatch,

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("failed to read Word document: {0}")]
    WordDocument(String),

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("antiword not found. Install it to read legacy .doc files: brew install antiword (macOS) or apt install antiword (Linux)")]
    AntiwordNotFound,

    #[error("antiword failed with exit code {code}: {stderr}")]
    AntiwordFailed { code: i32, stderr: String },

    #[error("failed to read input file {path}: {reason}")]
    InputRead { path: PathBuf, reason: String },

    #[error("unknown export format '{0}'. Expected one of: xlsx, csv, txt")]
    UnknownExportFormat(String),

    #[error("failed to write export: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
