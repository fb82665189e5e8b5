use crate::{signals::SignalBus, state::AppState, GuiComponent, GuiMessage, GuiResult};
use egui::{menu, Context, Ui};
use std::sync::Arc;

/// Top-level commands: Open, Save, Draw, Help, and Cancel while drawing
pub struct MenuBarComponent {
    signal_bus: Arc<SignalBus>,
}

impl MenuBarComponent {
    pub fn new(signal_bus: Arc<SignalBus>) -> GuiResult<Self> {
        Ok(Self { signal_bus })
    }
}

impl GuiComponent for MenuBarComponent {
    fn name(&self) -> &str {
        "menu_bar"
    }

    fn render(&mut self, ui: &mut Ui, _ctx: &Context, state: &mut AppState) -> GuiResult<()> {
        let mut clicked = None;

        menu::bar(ui, |ui| {
            if ui.button("Open").clicked() {
                clicked = Some(GuiMessage::OpenRequested);
            }
            if ui.button("Save").clicked() {
                clicked = Some(GuiMessage::SaveRequested);
            }
            if ui.button("Draw").clicked() {
                clicked = Some(GuiMessage::DrawRequested);
            }
            if ui.button("Help").clicked() {
                clicked = Some(GuiMessage::HelpRequested);
            }
            if state.is_drawing() && ui.button("Cancel").clicked() {
                clicked = Some(GuiMessage::CancelRequested);
            }
        });

        match clicked {
            Some(message) => self.signal_bus.emit(message),
            None => Ok(()),
        }
    }
}
