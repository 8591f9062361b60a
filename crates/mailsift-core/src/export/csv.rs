use crate::error::SiftError;
use crate::export::RESULT_HEADER;

/// Header record followed by one email per record, standard CSV quoting.
pub fn render(emails: &[String]) -> Result<Vec<u8>, SiftError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([RESULT_HEADER])
        .map_err(|e| SiftError::Export(e.to_string()))?;
    for email in emails {
        writer
            .write_record([email.as_str()])
            .map_err(|e| SiftError::Export(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| SiftError::Export(e.to_string()))
}
