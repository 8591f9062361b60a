use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::SiftError;

/// Read a .docx file and return one text unit per paragraph and one per
/// table cell. Table cells contain their own paragraphs, so text inside a
/// table is seen both ways; the match set collapses the overlap.
pub fn extract_units(
    bytes: &[u8],
    notes: &mut dyn FnMut(String),
) -> Result<Vec<String>, SiftError> {
    notes("Extracting text from Word document".to_string());

    let cursor = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| SiftError::WordDocument(format!("not a docx container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| SiftError::WordDocument(format!("word/document.xml: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| SiftError::WordDocument(e.to_string()))?;

    parse_document_xml(&xml)
}

/// Walk the WordprocessingML body. Runs of `w:t` text accumulate into the
/// current paragraph and, when inside `w:tc`, into the current cell as well.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, SiftError> {
    let mut reader = Reader::from_str(xml);

    let mut units = Vec::new();
    let mut paragraph = String::new();
    let mut cell: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => paragraph.clear(),
                b"w:tc" => cell = Some(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // Tabs and breaks separate words; keep them from gluing
                // adjacent runs together.
                b"w:tab" | b"w:br" => {
                    paragraph.push(' ');
                    if let Some(c) = cell.as_mut() {
                        c.push(' ');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if in_text {
                    let text = t
                        .unescape()
                        .map_err(|e| SiftError::WordDocument(e.to_string()))?;
                    paragraph.push_str(&text);
                    if let Some(c) = cell.as_mut() {
                        c.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if !paragraph.trim().is_empty() {
                        units.push(paragraph.clone());
                    }
                    paragraph.clear();
                    if let Some(c) = cell.as_mut() {
                        c.push(' ');
                    }
                }
                b"w:tc" => {
                    if let Some(c) = cell.take() {
                        if !c.trim().is_empty() {
                            units.push(c.trim().to_string());
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SiftError::WordDocument(format!(
                    "malformed document XML: {e}"
                )))
            }
            _ => {}
        }
    }

    Ok(units)
}
