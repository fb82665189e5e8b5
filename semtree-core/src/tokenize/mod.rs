//! English tokenization: text into sentences, sentences into words.

mod sentence;
mod word;

pub use sentence::{sentences, ABBREVIATIONS, NUMBERED_ABBREVIATIONS};
pub use word::words;
