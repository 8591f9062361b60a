use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::SiftError;

/// One uploaded/selected file handed to the pipeline. Immutable once built;
/// the name is used only for extension sniffing and log messages.
#[derive(Debug, Clone)]
pub struct InputFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        InputFile {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its final path component as the name.
    pub fn from_path(path: &Path) -> Result<Self, SiftError> {
        let bytes = std::fs::read(path).map_err(|e| SiftError::InputRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(InputFile { name, bytes })
    }

    /// Lowercased extension including the leading dot, or "" when there is none.
    pub fn extension(&self) -> String {
        match self.name.rfind('.') {
            Some(pos) if pos + 1 < self.name.len() => self.name[pos..].to_lowercase(),
            _ => String::new(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_extension(&self.extension())
    }
}

/// Closed set of recognized input formats. Adding a format means adding a
/// variant here and a reader bound to it in the pipeline dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Excel workbooks: .xls, .xlsx, .xlsm
    Spreadsheet,
    /// Word documents: .docx
    WordDocument,
    /// Legacy Word documents: .doc (best-effort, needs antiword)
    LegacyWord,
    /// PDF documents: .pdf
    Pdf,
    /// Anything else; skipped with a log line.
    Unsupported,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> FileKind {
        match ext {
            ".xls" | ".xlsx" | ".xlsm" => FileKind::Spreadsheet,
            ".docx" => FileKind::WordDocument,
            ".doc" => FileKind::LegacyWord,
            ".pdf" => FileKind::Pdf,
            _ => FileKind::Unsupported,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Spreadsheet => write!(f, "spreadsheet"),
            FileKind::WordDocument => write!(f, "Word document"),
            FileKind::LegacyWord => write!(f, "legacy Word document"),
            FileKind::Pdf => write!(f, "PDF"),
            FileKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Outcome of one extraction run. Owned entirely by the caller; nothing is
/// shared between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique addresses, ascending by plain string comparison.
    pub emails: Vec<String>,
    /// Ordered progress/error log, one human-readable line per entry.
    pub logs: Vec<String>,
    pub files_total: usize,
    pub files_failed: usize,
}

impl RunReport {
    /// Distinguishes "ran successfully, found nothing" from a failed run,
    /// which would have surfaced as an error instead.
    pub fn found_nothing(&self) -> bool {
        self.emails.is_empty()
    }
}
