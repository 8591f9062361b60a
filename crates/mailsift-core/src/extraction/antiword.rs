use std::io::Write;
use std::process::Command;

use crate::error::SiftError;

/// Best-effort reader for legacy .doc files via the antiword utility.
/// The whole document comes back as a single text unit.
pub fn extract_units(
    bytes: &[u8],
    notes: &mut dyn FnMut(String),
) -> Result<Vec<String>, SiftError> {
    notes("Extracting text from legacy Word document".to_string());

    let mut tmpfile =
        tempfile::NamedTempFile::new().map_err(|e| SiftError::Extraction(e.to_string()))?;
    tmpfile
        .write_all(bytes)
        .map_err(|e| SiftError::Extraction(e.to_string()))?;

    let output = Command::new("antiword")
        .arg(tmpfile.path())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SiftError::AntiwordNotFound
            } else {
                SiftError::Extraction(format!("antiword failed: {e}"))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(SiftError::AntiwordFailed { code, stderr });
    }

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    Ok(vec![text])
}

/// Check if antiword is available on the system.
pub fn is_available() -> bool {
    Command::new("antiword")
        .arg("-h")
        .output()
        .map(|o| o.status.success() || !o.stderr.is_empty())
        .unwrap_or(false)
}
