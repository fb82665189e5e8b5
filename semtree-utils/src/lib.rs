//! SemTree Utilities
//!
//! Small helpers shared by the SemTree crates: configuration file loading,
//! logging setup, plain-text file I/O and the string transformations used
//! when text is turned into tree notation.

//#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod file;
pub mod string;
pub mod config;
pub mod logging;

/// Re-export commonly used utilities
pub use file::{normalize_path, read_text_file, write_text_file, with_default_extension};
pub use string::{remove_chars, replace_whitespace, is_blank};
pub use config::{load_config, merge_configs, find_config_file, ConfigBuilder};

/// Result type used throughout SemTree utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path operation error
    #[error("Path operation error: {0}")]
    PathOperation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}
