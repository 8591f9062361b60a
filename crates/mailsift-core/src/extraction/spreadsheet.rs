use std::io::Cursor;

use calamine::Reader;

use crate::error::SiftError;

/// Read an Excel workbook (.xls, .xlsx or .xlsm, auto-detected from the
/// bytes) and return one text unit per non-empty cell, sheet by sheet.
///
/// `notes` receives a "Reading sheet: <name>" line per sheet for the run log.
pub fn extract_units(
    bytes: &[u8],
    notes: &mut dyn FnMut(String),
) -> Result<Vec<String>, SiftError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| SiftError::Workbook(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut units = Vec::new();

    for sheet_name in &sheet_names {
        notes(format!("Reading sheet: {sheet_name}"));
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| SiftError::Workbook(format!("sheet '{sheet_name}': {e}")))?;

        for row in range.rows() {
            for cell in row {
                if let Some(text) = cell_as_string(cell) {
                    units.push(text);
                }
            }
        }
    }

    Ok(units)
}

fn cell_as_string(cell: &calamine::Data) -> Option<String> {
    match cell {
        calamine::Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        calamine::Data::Float(f) => Some(f.to_string()),
        calamine::Data::Int(i) => Some(i.to_string()),
        calamine::Data::DateTime(dt) => Some(dt.to_string()),
        calamine::Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}
