//! End-to-end pipeline tests.
//!
//! PDF input uses a MockPdf extractor that returns pre-built page text
//! without invoking pdftotext, so these tests run without poppler-utils.
//! Spreadsheet fixtures are produced by the crate's own workbook writer and
//! docx fixtures are assembled in-process.

use std::io::{Cursor, Write};

use mailsift_core::error::SiftError;
use mailsift_core::export::xlsx;
use mailsift_core::extract_emails;
use mailsift_core::extraction::PdfTextExtractor;
use mailsift_core::model::InputFile;
use mailsift_core::progress::{NullProgress, ProgressSink};

struct MockPdf {
    pages: Vec<String>,
}

impl PdfTextExtractor for MockPdf {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<String>, SiftError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingPdf;

impl PdfTextExtractor for FailingPdf {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<String>, SiftError> {
        Err(SiftError::Extraction("simulated backend failure".into()))
    }

    fn backend_name(&self) -> &str {
        "failing-mock"
    }
}

fn no_pdf() -> MockPdf {
    MockPdf { pages: vec![] }
}

/// A one-sheet workbook whose column A holds the given cell texts.
fn xlsx_file(name: &str, cells: &[&str]) -> InputFile {
    let rows: Vec<String> = cells.iter().map(|s| s.to_string()).collect();
    let bytes = xlsx::write_workbook("Sheet1", "Data", &rows).unwrap();
    InputFile::new(name, bytes)
}

/// A docx with the given body paragraphs and a one-row table of cells.
fn docx_file(name: &str, paragraphs: &[&str], table_cells: &[&str]) -> InputFile {
    let mut body = String::new();
    for p in paragraphs {
        body.push_str(&format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"));
    }
    if !table_cells.is_empty() {
        body.push_str("<w:tbl><w:tr>");
        for c in table_cells {
            body.push_str(&format!(
                "<w:tc><w:p><w:r><w:t>{c}</w:t></w:r></w:p></w:tc>"
            ));
        }
        body.push_str("</w:tr></w:tbl>");
    }
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut archive = zip::ZipWriter::new(Cursor::new(Vec::new()));
    archive
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    archive.write_all(document.as_bytes()).unwrap();
    InputFile::new(name, archive.finish().unwrap().into_inner())
}

#[test]
fn spreadsheet_cell_with_trailing_punctuation() {
    let files = vec![xlsx_file(
        "contacts.xlsx",
        &["Contact: jane.doe@example.com!"],
    )];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["jane.doe@example.com"]);
    assert!(report
        .logs
        .iter()
        .any(|l| l == "Reading sheet: Sheet1"));
    assert_eq!(report.files_failed, 0);
}

#[test]
fn short_top_level_label_finds_nothing() {
    let files = vec![xlsx_file("short.xlsx", &["a@b.c"])];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert!(report.found_nothing());
    assert_eq!(report.files_failed, 0);
}

#[test]
fn unsupported_only_batch_completes_with_one_log_line() {
    let files = vec![InputFile::new("pic.png", vec![0x89, b'P', b'N', b'G'])];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert!(report.found_nothing());
    assert_eq!(report.files_failed, 0);
    let unsupported: Vec<_> = report
        .logs
        .iter()
        .filter(|l| l.starts_with("Unsupported file type:"))
        .collect();
    assert_eq!(unsupported, vec!["Unsupported file type: pic.png"]);
}

#[test]
fn docx_paragraph_and_table_cells_are_both_scanned() {
    let files = vec![docx_file(
        "letter.docx",
        &["Dear anna@firm.se,", "regards"],
        &["row for bert@firm.se", "no address here"],
    )];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["anna@firm.se", "bert@firm.se"]);
    assert!(report
        .logs
        .iter()
        .any(|l| l == "Extracting text from Word document"));
}

#[test]
fn corrupt_file_is_logged_and_the_batch_continues() {
    let files = vec![
        InputFile::new("bad.xlsx", b"this is not a workbook".to_vec()),
        xlsx_file("good.xlsx", &["ok@works.net"]),
    ];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["ok@works.net"]);
    assert_eq!(report.files_failed, 1);
    assert!(report
        .logs
        .iter()
        .any(|l| l.starts_with("Error processing file bad.xlsx:")));
}

#[test]
fn same_address_in_two_files_collapses() {
    let files = vec![
        xlsx_file("one.xlsx", &["dup@site.org"]),
        docx_file("two.docx", &["also dup@site.org"], &[]),
    ];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["dup@site.org"]);
}

#[test]
fn result_is_sorted_deduplicated_and_idempotent() {
    let files = vec![
        xlsx_file("a.xlsx", &["zeta@z.com and alpha@a.com"]),
        docx_file("b.docx", &["mid@m.com", "alpha@a.com again"], &[]),
    ];

    let first = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();
    let second = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert_eq!(first.emails, second.emails);
    assert_eq!(first.logs, second.logs);
    assert!(first.emails.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        first.emails,
        vec!["alpha@a.com", "mid@m.com", "zeta@z.com"]
    );
}

#[test]
fn empty_batch_is_rejected() {
    let result = extract_emails(&[], &no_pdf(), &mut NullProgress);
    assert!(matches!(result, Err(SiftError::EmptyBatch)));
}

#[test]
fn pdf_pages_are_scanned_and_blank_pages_are_fine() {
    let extractor = MockPdf {
        pages: vec![
            "contact: page@doc.io".to_string(),
            String::new(), // scanned image page, no text
            "page@doc.io repeated".to_string(),
        ],
    };
    let files = vec![InputFile::new("scan.pdf", b"%PDF-1.4".to_vec())];
    let report = extract_emails(&files, &extractor, &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["page@doc.io"]);
    assert!(report.logs.iter().any(|l| l == "Extracting text from PDF"));
}

#[test]
fn failing_pdf_backend_is_a_per_file_error() {
    let files = vec![
        InputFile::new("broken.pdf", b"%PDF-1.4".to_vec()),
        xlsx_file("after.xlsx", &["still@here.com"]),
    ];
    let report = extract_emails(&files, &FailingPdf, &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["still@here.com"]);
    assert_eq!(report.files_failed, 1);
    assert!(report
        .logs
        .iter()
        .any(|l| l.starts_with("Error processing file broken.pdf:")));
}

#[test]
fn matches_are_case_sensitive_entries() {
    let files = vec![xlsx_file("case.xlsx", &["A@b.com", "a@b.com"])];
    let report = extract_emails(&files, &no_pdf(), &mut NullProgress).unwrap();

    assert_eq!(report.emails, vec!["A@b.com", "a@b.com"]);
}

#[derive(Default)]
struct Capture {
    started: Vec<(usize, usize, String)>,
    messages: Vec<String>,
}

impl ProgressSink for Capture {
    fn file_started(&mut self, index: usize, total: usize, name: &str) {
        self.started.push((index, total, name.to_string()));
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

#[test]
fn progress_sink_sees_every_log_line_in_order() {
    let files = vec![
        xlsx_file("first.xlsx", &["x@y.se"]),
        InputFile::new("skip.gif", vec![]),
    ];
    let mut capture = Capture::default();
    let report = extract_emails(&files, &no_pdf(), &mut capture).unwrap();

    assert_eq!(capture.messages, report.logs);
    assert_eq!(
        capture.started,
        vec![
            (1, 2, "first.xlsx".to_string()),
            (2, 2, "skip.gif".to_string())
        ]
    );
    assert_eq!(report.logs[0], "Processing file 1/2: first.xlsx");
    assert_eq!(report.logs[2], "Processing file 2/2: skip.gif");
}
