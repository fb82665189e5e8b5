//! Per-word lexical lookup.
//!
//! Collapses every sense of a word into one flat [`WordSenseRecord`]: the
//! first sense supplies the definition and the taxonomy relations, every
//! sense contributes synonyms and antonyms.

use crate::lexicon::LexicalDatabase;
use semtree_utils::replace_whitespace;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Everything the tree shows about one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSenseRecord {
    pub word: String,
    /// First sense's definition with whitespace replaced by `_`
    pub definition: Option<String>,
    /// Lemma names of every sense, duplicates kept
    pub synonyms: Vec<String>,
    /// First antonym of each lemma that has one
    pub antonyms: Vec<String>,
    /// Hyponyms of the first sense
    pub hyponyms: Vec<String>,
    /// Hypernyms of the first sense
    pub hypernyms: Vec<String>,
}

impl WordSenseRecord {
    /// A record for a word the database does not know
    pub fn miss(word: impl Into<String>) -> Self {
        Self { word: word.into(), ..Self::default() }
    }

    pub fn is_miss(&self) -> bool {
        self.definition.is_none()
            && self.synonyms.is_empty()
            && self.antonyms.is_empty()
            && self.hyponyms.is_empty()
            && self.hypernyms.is_empty()
    }
}

/// Look up `word` and collapse its senses into a record.
///
/// A word with no senses is not an error; it yields [`WordSenseRecord::miss`].
pub fn lookup(db: &dyn LexicalDatabase, word: &str) -> crate::Result<WordSenseRecord> {
    let start = Instant::now();
    let senses = db.synsets(word)?;

    let Some(first) = senses.first() else {
        tracing::debug!(word, senses = 0, elapsed = ?start.elapsed(), "lookup miss");
        return Ok(WordSenseRecord::miss(word));
    };

    let mut record = WordSenseRecord {
        word: word.to_string(),
        definition: Some(replace_whitespace(&first.definition, '_')),
        hyponyms: first.hyponyms.clone(),
        hypernyms: first.hypernyms.clone(),
        ..WordSenseRecord::default()
    };

    for lemma in senses.iter().flat_map(|synset| &synset.lemmas) {
        record.synonyms.push(lemma.name.clone());
        if let Some(antonym) = lemma.antonyms.first() {
            record.antonyms.push(antonym.clone());
        }
    }

    tracing::debug!(word, senses = senses.len(), elapsed = ?start.elapsed(), "lookup");
    Ok(record)
}
