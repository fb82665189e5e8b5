//! Plain-text file helpers.
//!
//! Documents are stored as bare text with no header or structure, so these
//! helpers are thin: read with a lossy UTF-8 fallback, write bytes verbatim,
//! and fill in a default extension for save targets.

use std::fs;
use std::path::{Path, PathBuf};

/// Normalize path (collapse `.` and `..` components)
pub fn normalize_path(path: &Path) -> PathBuf {
    path_clean::clean(path)
}

/// Read a text file, decoding invalid UTF-8 with replacement characters
pub fn read_text_file(path: &Path) -> crate::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            tracing::warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Write `content` to `path` exactly as given, replacing any existing file
pub fn write_text_file(path: &Path, content: &str) -> crate::Result<()> {
    if path.as_os_str().is_empty() {
        return Err(crate::UtilError::PathOperation("Empty file path".to_string()));
    }
    fs::write(path, content.as_bytes())?;
    Ok(())
}

/// Append `extension` when `path` has none; paths with an extension are kept
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
