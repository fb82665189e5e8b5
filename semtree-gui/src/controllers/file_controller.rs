//! Open and Save.
//!
//! The dialog is kept apart from the file work so the latter can be driven
//! with a fixed path. A cancelled dialog does nothing.

use crate::state::AppState;
use semtree_core::document::{load_text, save_text, TEXT_EXTENSION};
use std::path::{Path, PathBuf};

fn text_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new().add_filter("Text files", &[TEXT_EXTENSION])
}

pub fn pick_open_path(start_dir: Option<&Path>) -> Option<PathBuf> {
    let dialog = text_dialog().set_title("Open");
    match start_dir {
        Some(dir) => dialog.set_directory(dir).pick_file(),
        None => dialog.pick_file(),
    }
}

pub fn pick_save_path(current: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = text_dialog().set_title("Save");
    if let Some(current) = current {
        if let Some(dir) = current.parent() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = current.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }
    }
    dialog.save_file()
}

/// Replace the buffer with the file at `path`; on failure the buffer is
/// left as it was and an error dialog is raised
pub fn open_into(state: &mut AppState, path: PathBuf) {
    match load_text(&path) {
        Ok(text) => state.load_document(path, text),
        Err(e) => state.show_error("Could not open file", format!("{}: {}", path.display(), e)),
    }
}

/// Write the buffer to `path` (`.txt` added when there is no extension).
///
/// A wait line shown during a draw is not part of the document.
pub fn save_from(state: &mut AppState, path: &Path) {
    match save_text(path, state.document_text()) {
        Ok(written) => {
            state.status = format!("Saved {}", written.display());
            state.current_file = Some(written);
        }
        Err(e) => state.show_error("Could not save file", format!("{}: {}", path.display(), e)),
    }
}
