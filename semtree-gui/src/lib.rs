use serde::{Deserialize, Serialize};

pub mod app;
pub mod components;
pub mod controllers;
pub mod signals;
pub mod state;
pub mod utils;

pub use app::SemTreeApp;
pub use state::AppState;
pub use utils::GuiComponent;

/// Window title
pub const APP_TITLE: &str = "Syntax parse tree";

/// User actions raised by components and handled by the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuiMessage {
    OpenRequested,
    SaveRequested,
    DrawRequested,
    CancelRequested,
    HelpRequested,
}

pub type GuiResult<T> = Result<T, GuiError>;

#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error("Core engine error: {0}")]
    Core(#[from] semtree_core::Error),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("State error: {0}")]
    State(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
