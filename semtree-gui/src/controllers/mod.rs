pub mod draw_controller;
pub mod file_controller;

pub use draw_controller::{DrawController, DrawOutcome, DrawStart};
