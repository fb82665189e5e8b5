//! Loading and saving the input text.

use semtree_utils::{normalize_path, read_text_file, with_default_extension, write_text_file};
use std::path::{Path, PathBuf};

/// Extension given to saved documents that have none
pub const TEXT_EXTENSION: &str = "txt";

/// Read a document; invalid UTF-8 is decoded lossily
pub fn load_text(path: &Path) -> crate::Result<String> {
    let text = read_text_file(path)?;
    tracing::info!(path = %path.display(), bytes = text.len(), "opened document");
    Ok(text)
}

/// Write `text` verbatim, adding `.txt` when `path` has no extension.
///
/// Returns the path actually written.
pub fn save_text(path: &Path, text: &str) -> crate::Result<PathBuf> {
    let target = normalize_path(&with_default_extension(path, TEXT_EXTENSION));
    write_text_file(&target, text)?;
    tracing::info!(path = %target.display(), bytes = text.len(), "saved document");
    Ok(target)
}
