pub mod antiword;
pub mod docx;
pub mod pdftotext;
pub mod spreadsheet;

use crate::error::SiftError;

/// Trait for PDF text extraction backends.
///
/// The production backend shells out to pdftotext; tests substitute a mock
/// so the pipeline can run without poppler-utils installed.
pub trait PdfTextExtractor: Send + Sync {
    /// Extract text from PDF bytes, one string per page. A page with no
    /// extractable text (e.g. a scanned image) is an empty string, not an
    /// error.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, SiftError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
