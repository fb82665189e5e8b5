use crate::{state::AppState, GuiComponent, GuiResult};
use egui::{Context, TextEdit, Ui};

/// "Enter text:" label and the wrapped multi-line text box.
///
/// The box is read-only while a draw is running.
pub struct TextInputComponent {
    rows: usize,
}

impl TextInputComponent {
    pub fn new() -> Self {
        Self { rows: 12 }
    }
}

impl Default for TextInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiComponent for TextInputComponent {
    fn name(&self) -> &str {
        "text_input"
    }

    fn render(&mut self, ui: &mut Ui, _ctx: &Context, state: &mut AppState) -> GuiResult<()> {
        ui.label("Enter text:");
        let editable = !state.is_drawing();
        let editor = TextEdit::multiline(&mut state.input)
            .desired_rows(self.rows)
            .desired_width(f32::INFINITY);
        ui.add_enabled(editable, editor);
        Ok(())
    }
}
