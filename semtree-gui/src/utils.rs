use crate::state::AppState;
use crate::GuiResult;
use egui::{Context, Ui};
use std::time::Duration;

/// A piece of the window that draws itself from the shared state
pub trait GuiComponent {
    /// Used to attribute render failures in the log
    fn name(&self) -> &str;

    fn render(&mut self, ui: &mut Ui, ctx: &Context, state: &mut AppState) -> GuiResult<()>;
}

pub fn format_duration(duration: Duration) -> String {
    let duration_ms = duration.as_millis();
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", duration_ms / 60_000, (duration_ms % 60_000) / 1000)
    }
}
