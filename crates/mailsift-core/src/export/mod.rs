pub mod csv;
pub mod txt;
pub mod xlsx;

use std::fmt;
use std::path::Path;

use crate::error::SiftError;

/// Column/sheet header shared by all export shapes.
pub const RESULT_HEADER: &str = "Email Addresses";

/// The formats an extraction result can be written back as. All of them are
/// one column of addresses; only the container differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn from_str_loose(s: &str) -> Result<ExportFormat, SiftError> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Txt),
            other => Err(SiftError::UnknownExportFormat(other.to_string())),
        }
    }

    /// Infer the format from an output path's extension.
    pub fn from_path(path: &Path) -> Result<ExportFormat, SiftError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_str_loose(&ext)
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("extracted_emails.{}", self.file_extension())
    }

    /// Serialize the sorted email list into this format's bytes.
    pub fn render(&self, emails: &[String]) -> Result<Vec<u8>, SiftError> {
        match self {
            ExportFormat::Xlsx => xlsx::write_workbook(RESULT_HEADER, RESULT_HEADER, emails),
            ExportFormat::Csv => csv::render(emails),
            ExportFormat::Txt => Ok(txt::render(emails)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_extension())
    }
}
