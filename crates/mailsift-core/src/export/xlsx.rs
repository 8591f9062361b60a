//! Minimal single-column OOXML workbook writer.
//!
//! Emits just the parts a reader needs: content types, the two relationship
//! files, a workbook with one sheet, and the sheet itself with inline string
//! cells. calamine reads the result back, which is how the tests verify it.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::SiftError;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

/// Write a workbook with one sheet holding a header cell and one row per
/// entry in column A.
pub fn write_workbook(
    sheet_name: &str,
    header: &str,
    rows: &[String],
) -> Result<Vec<u8>, SiftError> {
    let workbook_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
        escape(sheet_name)
    );

    let mut sheet_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>"#,
    );
    push_row(&mut sheet_xml, 1, header);
    for (i, value) in rows.iter().enumerate() {
        push_row(&mut sheet_xml, i + 2, value);
    }
    sheet_xml.push_str("</sheetData></worksheet>");

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", &workbook_xml),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", &sheet_xml),
    ];
    for (name, content) in parts {
        zip.start_file(name, options)
            .map_err(|e| SiftError::Export(e.to_string()))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| SiftError::Export(e.to_string()))?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| SiftError::Export(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn push_row(sheet_xml: &mut String, row: usize, value: &str) {
    sheet_xml.push_str(&format!(
        r#"<row r="{row}"><c r="A{row}" t="inlineStr"><is><t>{}</t></is></c></row>"#,
        escape(value)
    ));
}
