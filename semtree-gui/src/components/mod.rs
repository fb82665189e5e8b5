pub mod dialogs;
pub mod menu_bar;
pub mod status_bar;
pub mod text_input;
pub mod tree_canvas;

pub use menu_bar::MenuBarComponent;
pub use status_bar::StatusBarComponent;
pub use text_input::TextInputComponent;
pub use tree_canvas::TreeCanvasComponent;
