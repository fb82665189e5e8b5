//! Lexical databases.
//!
//! A [`LexicalDatabase`] answers one question: which senses (synsets) does a
//! surface word have? Each [`Synset`] comes back fully resolved, with its
//! lemmas, the first-level antonyms of each lemma, and the names of its
//! direct hypernyms and hyponyms.
//!
//! Two backends ship with the crate:
//! - [`WordNetDb`] reads a Princeton WordNet 3.x database directory
//! - [`MemoryLexicon`] is a small serde/JSON lexicon

pub mod memory;
pub mod morphy;
pub mod wndb;

pub use memory::MemoryLexicon;
pub use wndb::WordNetDb;

use crate::config::LexiconConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Parts of speech, as WordNet encodes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

impl PartOfSpeech {
    /// Order in which parts of speech are consulted for a bare word
    pub const LOOKUP_ORDER: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// One-letter code used in synset names and database files
    pub const fn code(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::AdjectiveSatellite => 's',
            Self::Adverb => 'r',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' => Some(Self::Adjective),
            's' => Some(Self::AdjectiveSatellite),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Satellites are filed together with head adjectives
    pub const fn is_compatible(self, other: Self) -> bool {
        matches!(
            (self.normalized(), other.normalized()),
            (Self::Noun, Self::Noun)
                | (Self::Verb, Self::Verb)
                | (Self::Adjective, Self::Adjective)
                | (Self::Adverb, Self::Adverb)
        )
    }

    const fn normalized(self) -> Self {
        match self {
            Self::AdjectiveSatellite => Self::Adjective,
            other => other,
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A word form belonging to a synset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    pub name: String,
    /// Names of the antonym lemmas, in database order
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl Lemma {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), antonyms: Vec::new() }
    }

    pub fn with_antonyms<I, S>(mut self, antonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.antonyms = antonyms.into_iter().map(Into::into).collect();
        self
    }
}

/// One sense of a word, with relations already resolved to names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// `lemma.pos.NN`, e.g. `dog.n.01`
    pub name: String,
    pub pos: PartOfSpeech,
    pub definition: String,
    pub lemmas: Vec<Lemma>,
    /// Names of direct hypernym synsets
    #[serde(default)]
    pub hypernyms: Vec<String>,
    /// Names of direct hyponym synsets
    #[serde(default)]
    pub hyponyms: Vec<String>,
}

impl Synset {
    pub fn new(name: impl Into<String>, pos: PartOfSpeech, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pos,
            definition: definition.into(),
            lemmas: Vec::new(),
            hypernyms: Vec::new(),
            hyponyms: Vec::new(),
        }
    }

    pub fn with_lemma(mut self, lemma: Lemma) -> Self {
        self.lemmas.push(lemma);
        self
    }

    pub fn with_hypernym(mut self, name: impl Into<String>) -> Self {
        self.hypernyms.push(name.into());
        self
    }

    pub fn with_hyponym(mut self, name: impl Into<String>) -> Self {
        self.hyponyms.push(name.into());
        self
    }

    pub fn lemma_names(&self) -> impl Iterator<Item = &str> {
        self.lemmas.iter().map(|lemma| lemma.name.as_str())
    }
}

/// Source of word senses.
///
/// Implementations must be deterministic: the same word always yields the
/// same synsets in the same order. An unknown word is `Ok(vec![])`, never an
/// error; errors are reserved for a broken database.
pub trait LexicalDatabase: Send + Sync {
    /// Human-readable description of the database
    fn name(&self) -> &str;

    /// All senses of `word`, most frequent first
    fn synsets(&self, word: &str) -> crate::Result<Vec<Synset>>;
}

/// Open the database selected by the configuration.
///
/// A JSON lexicon, when configured, takes precedence over the WordNet
/// directory.
pub fn open(config: &LexiconConfig) -> crate::Result<Arc<dyn LexicalDatabase>> {
    if let Some(json_path) = &config.json_path {
        tracing::info!(path = %json_path.display(), "loading JSON lexicon");
        return Ok(Arc::new(MemoryLexicon::load(json_path)?));
    }

    let dir = config.wordnet_dir.clone().ok_or_else(|| {
        crate::Error::Config("no WordNet directory configured and no home directory found".to_string())
    })?;
    tracing::info!(path = %dir.display(), "loading WordNet database");
    Ok(Arc::new(WordNetDb::open(&dir)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_codes_round_trip() {
        for pos in [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::AdjectiveSatellite,
            PartOfSpeech::Adverb,
        ] {
            assert_eq!(PartOfSpeech::from_code(pos.code()), Some(pos));
        }
        assert_eq!(PartOfSpeech::from_code('x'), None);
    }

    #[test]
    fn test_satellite_is_compatible_with_adjective() {
        assert!(PartOfSpeech::AdjectiveSatellite.is_compatible(PartOfSpeech::Adjective));
        assert!(PartOfSpeech::Adjective.is_compatible(PartOfSpeech::AdjectiveSatellite));
        assert!(!PartOfSpeech::Noun.is_compatible(PartOfSpeech::Verb));
    }

    #[test]
    fn test_open_without_any_source_is_config_error() {
        let config = LexiconConfig { wordnet_dir: None, json_path: None };
        assert!(matches!(open(&config), Err(crate::Error::Config(_))));
    }
}
