pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod pattern;
pub mod progress;

use std::collections::BTreeSet;

use error::SiftError;
use extraction::PdfTextExtractor;
use model::{FileKind, InputFile, RunReport};
use pattern::EmailPattern;
use progress::ProgressSink;

/// Main API entry point: scan a batch of files for email addresses.
///
/// Files are processed one at a time in input order. Each recognized format
/// is read into text units which are scanned with the email pattern; matches
/// accumulate into one deduplicating set for the whole batch. A file that
/// fails to parse is logged and skipped, never fatal. Returns the unique
/// addresses in ascending order together with the full run log.
///
/// An empty batch is a caller error and is rejected up front.
pub fn extract_emails(
    files: &[InputFile],
    pdf_extractor: &dyn PdfTextExtractor,
    progress: &mut dyn ProgressSink,
) -> Result<RunReport, SiftError> {
    if files.is_empty() {
        return Err(SiftError::EmptyBatch);
    }

    let pattern = EmailPattern::new();
    let mut found: BTreeSet<String> = BTreeSet::new();
    let mut log = RunLog {
        lines: Vec::new(),
        sink: progress,
    };
    let total = files.len();
    let mut files_failed = 0;

    for (idx, file) in files.iter().enumerate() {
        log.sink.file_started(idx + 1, total, &file.name);
        log.push(format!(
            "Processing file {}/{}: {}",
            idx + 1,
            total,
            file.name
        ));

        let units = match file.kind() {
            FileKind::Spreadsheet => {
                extraction::spreadsheet::extract_units(&file.bytes, &mut |m| log.push(m))
            }
            FileKind::WordDocument => {
                extraction::docx::extract_units(&file.bytes, &mut |m| log.push(m))
            }
            FileKind::LegacyWord => {
                extraction::antiword::extract_units(&file.bytes, &mut |m| log.push(m))
            }
            FileKind::Pdf => {
                log.push("Extracting text from PDF".to_string());
                pdf_extractor.extract_pages(&file.bytes)
            }
            FileKind::Unsupported => {
                log.push(format!("Unsupported file type: {}", file.name));
                continue;
            }
        };

        match units {
            Ok(units) => {
                for unit in &units {
                    pattern.scan(unit, &mut found);
                }
            }
            Err(e) => {
                files_failed += 1;
                log.push(format!("Error processing file {}: {e}", file.name));
            }
        }
    }

    Ok(RunReport {
        emails: found.into_iter().collect(),
        logs: log.lines,
        files_total: total,
        files_failed,
    })
}

/// Run log for one extraction: every line is appended and delivered to the
/// progress sink synchronously, in order.
struct RunLog<'a> {
    lines: Vec<String>,
    sink: &'a mut dyn ProgressSink,
}

impl RunLog<'_> {
    fn push(&mut self, line: String) {
        self.sink.message(&line);
        self.lines.push(line);
    }
}
