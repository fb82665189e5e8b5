use std::path::PathBuf;
use std::time::Duration;

/// Status line appended to the text box while a tree is being drawn
pub const PLEASE_WAIT: &str = "\n\nPlease wait. Semantic tree is drawing...";

/// Whether a draw worker is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    #[default]
    Idle,
    Drawing,
}

/// A message shown in a dialog until the user dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
}

/// Everything the window shows, owned by the app and lent to handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Contents of the text box
    pub input: String,
    pub phase: DrawPhase,
    pub show_help: bool,
    pub error: Option<ErrorDialog>,
    /// One-line status shown in the status bar
    pub status: String,
    pub lexicon_name: Option<String>,
    pub last_draw: Option<Duration>,
    pub current_file: Option<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.phase == DrawPhase::Drawing
    }

    /// Enter the drawing phase and show the wait line.
    ///
    /// Returns the text to draw, which never includes the wait line.
    pub fn begin_draw(&mut self) -> String {
        let text = self.input.clone();
        self.input.push_str(PLEASE_WAIT);
        self.phase = DrawPhase::Drawing;
        self.status = "Drawing...".to_string();
        text
    }

    /// Leave the drawing phase and remove the wait line
    pub fn finish_draw(&mut self) {
        if let Some(position) = self.input.rfind(PLEASE_WAIT) {
            self.input.truncate(position);
        }
        self.phase = DrawPhase::Idle;
    }

    /// The buffer without the wait line
    pub fn document_text(&self) -> &str {
        match self.input.rfind(PLEASE_WAIT) {
            Some(position) if self.is_drawing() => &self.input[..position],
            _ => &self.input,
        }
    }

    /// Replace the whole buffer with a document's contents
    pub fn load_document(&mut self, path: PathBuf, text: String) {
        self.input = text;
        self.status = format!("Opened {}", path.display());
        self.current_file = Some(path);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let title = title.into();
        let message = message.into();
        log::error!("{}: {}", title, message);
        self.status = title.clone();
        self.error = Some(ErrorDialog { title, message });
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_round_trip_restores_text() {
        let mut state = AppState::new();
        state.input = "Cats chase mice.".to_string();

        let text = state.begin_draw();
        assert_eq!(text, "Cats chase mice.");
        assert!(state.is_drawing());
        assert!(state.input.ends_with(PLEASE_WAIT));

        state.finish_draw();
        assert_eq!(state.input, "Cats chase mice.");
        assert_eq!(state.phase, DrawPhase::Idle);
    }

    #[test]
    fn test_document_text_hides_wait_line_while_drawing() {
        let mut state = AppState::new();
        state.input = "text".to_string();
        state.begin_draw();
        assert_eq!(state.document_text(), "text");
        state.finish_draw();
        assert_eq!(state.document_text(), "text");
    }

    #[test]
    fn test_finish_without_wait_line_keeps_text() {
        let mut state = AppState::new();
        state.input = "unchanged".to_string();
        state.finish_draw();
        assert_eq!(state.input, "unchanged");
    }

    #[test]
    fn test_load_document_replaces_buffer() {
        let mut state = AppState::new();
        state.input = "old".to_string();
        state.load_document(PathBuf::from("notes.txt"), "new".to_string());
        assert_eq!(state.input, "new");
        assert_eq!(state.current_file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_error_dialog_lifecycle() {
        let mut state = AppState::new();
        state.show_error("Open failed", "no such file");
        assert_eq!(state.error.as_ref().map(|e| e.title.as_str()), Some("Open failed"));
        state.dismiss_error();
        assert!(state.error.is_none());
    }
}
