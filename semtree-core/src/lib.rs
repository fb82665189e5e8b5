//! SemTree Core - lexical lookup and semantic tree assembly
//!
//! This crate turns English text into a semantic tree:
//! - WordNet-style lexical databases behind the [`LexicalDatabase`] trait
//! - sentence and word tokenization
//! - per-word lookup of definition, synonyms, antonyms, hyponyms, hypernyms
//! - a typed tree model with its bracketed notation codec
//! - layout of a tree for drawing on a canvas
//!
//! The GUI crate owns windows and dialogs; everything here is headless.

//#![deny(missing_docs)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
)]
#![allow(
    clippy::module_name_repetitions,  // Often necessary for clarity
    clippy::missing_errors_doc,
)]

pub mod assembler;
pub mod config;
pub mod document;
pub mod layout;
pub mod lexicon;
pub mod lookup;
pub mod tokenize;
pub mod tree;

pub use assembler::{assemble, assemble_notation, AssemblyOptions, CancelToken, NewlinePolicy, PunctuationPolicy};
pub use config::{AssemblyConfig, CanvasConfig, LexiconConfig, SemTreeConfig};
pub use layout::{LayoutMetrics, LayoutNode, TreeLayout};
pub use lexicon::{LexicalDatabase, Lemma, MemoryLexicon, PartOfSpeech, Synset, WordNetDb};
pub use lookup::{lookup, WordSenseRecord};
pub use tree::{Label, Node, ParseError, Tree};

/// Result type used throughout SemTree core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SemTree core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lexical database missing or malformed
    #[error("Lexical database error: {0}")]
    Lexicon(String),

    /// Tree notation could not be parsed
    #[error("Tree notation error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Work stopped through a [`CancelToken`]
    #[error("Operation cancelled")]
    Cancelled,

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] semtree_utils::UtilError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
