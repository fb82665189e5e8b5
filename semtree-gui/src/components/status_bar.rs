use crate::{state::AppState, utils::format_duration, GuiComponent, GuiResult};
use egui::{Context, Ui};

pub struct StatusBarComponent;

impl GuiComponent for StatusBarComponent {
    fn name(&self) -> &str {
        "status_bar"
    }

    fn render(&mut self, ui: &mut Ui, _ctx: &Context, state: &mut AppState) -> GuiResult<()> {
        ui.horizontal(|ui| {
            if state.is_drawing() {
                ui.spinner();
            }
            ui.label(&state.status);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(elapsed) = state.last_draw {
                    ui.label(format!("last draw {}", format_duration(elapsed)));
                    ui.separator();
                }
                match &state.lexicon_name {
                    Some(name) => ui.label(format!("Lexicon: {}", name)),
                    None => ui.colored_label(ui.visuals().warn_fg_color, "No lexicon loaded"),
                };
            });
        });
        Ok(())
    }
}
