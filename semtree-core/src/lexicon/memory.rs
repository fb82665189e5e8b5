//! In-memory lexicon backed by a JSON file.
//!
//! The file maps lower-cased lemmas to their synsets:
//!
//! ```json
//! {
//!   "name": "pets",
//!   "entries": {
//!     "cat": [{ "name": "cat.n.01", "pos": "n", "definition": "...",
//!               "lemmas": [{ "name": "cat" }], "hypernyms": ["feline.n.01"] }]
//!   }
//! }
//! ```

use super::morphy::morphy;
use super::{LexicalDatabase, PartOfSpeech, Synset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLexicon {
    #[serde(default)]
    name: String,
    entries: HashMap<String, Vec<Synset>>,
}

impl MemoryLexicon {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: HashMap::new() }
    }

    /// Load a lexicon from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let file = File::open(path)?;
        let mut lexicon: Self = serde_json::from_reader(BufReader::new(file))?;
        if lexicon.name.is_empty() {
            lexicon.name = path.display().to_string();
        }
        lexicon.entries = lexicon
            .entries
            .into_iter()
            .map(|(lemma, synsets)| (lemma.to_lowercase(), synsets))
            .collect();
        Ok(lexicon)
    }

    /// Register `synset` under every one of its lemma names.
    ///
    /// Synsets keep insertion order per lemma; the first one inserted is the
    /// first sense.
    pub fn insert(&mut self, synset: Synset) {
        let keys: Vec<String> = synset.lemma_names().map(str::to_lowercase).collect();
        for key in keys {
            let senses = self.entries.entry(key).or_default();
            if !senses.iter().any(|s| s.name == synset.name) {
                senses.push(synset.clone());
            }
        }
    }

    pub fn with_synset(mut self, synset: Synset) -> Self {
        self.insert(synset);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn senses(&self, lemma: &str, pos: PartOfSpeech) -> impl Iterator<Item = &Synset> {
        self.entries
            .get(lemma)
            .into_iter()
            .flatten()
            .filter(move |synset| synset.pos.is_compatible(pos))
    }
}

impl LexicalDatabase for MemoryLexicon {
    fn name(&self) -> &str {
        &self.name
    }

    fn synsets(&self, word: &str) -> crate::Result<Vec<Synset>> {
        let form = word.to_lowercase();
        let mut found = Vec::new();
        for pos in PartOfSpeech::LOOKUP_ORDER {
            for candidate in morphy(&form, pos, None, |c| self.senses(c, pos).next().is_some()) {
                found.extend(self.senses(&candidate, pos).cloned());
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lemma;
    use tempfile::tempdir;

    fn pets() -> MemoryLexicon {
        MemoryLexicon::new("pets")
            .with_synset(
                Synset::new("cat.n.01", PartOfSpeech::Noun, "feline mammal")
                    .with_lemma(Lemma::new("cat"))
                    .with_lemma(Lemma::new("true_cat")),
            )
            .with_synset(
                Synset::new("chase.v.01", PartOfSpeech::Verb, "go after with the intent to catch")
                    .with_lemma(Lemma::new("chase")),
            )
            .with_synset(
                Synset::new("chase.n.01", PartOfSpeech::Noun, "the act of pursuing")
                    .with_lemma(Lemma::new("chase")),
            )
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_lemmatized() {
        let lexicon = pets();
        let senses = lexicon.synsets("Cats").unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].name, "cat.n.01");
    }

    #[test]
    fn test_nouns_come_before_verbs() {
        let names: Vec<String> = pets().synsets("chase").unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["chase.n.01", "chase.v.01"]);
    }

    #[test]
    fn test_every_lemma_is_indexed() {
        let senses = pets().synsets("true_cat").unwrap();
        assert_eq!(senses[0].name, "cat.n.01");
    }

    #[test]
    fn test_unknown_word_is_empty() {
        assert!(pets().synsets("zzzz").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_json() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"{
                "entries": {
                    "Mouse": [{
                        "name": "mouse.n.01",
                        "pos": "n",
                        "definition": "any of numerous small rodents",
                        "lemmas": [{ "name": "mouse" }],
                        "hypernyms": ["rodent.n.01"]
                    }]
                }
            }"#,
        )?;

        let lexicon = MemoryLexicon::load(&path)?;
        assert_eq!(lexicon.name(), path.display().to_string());
        let senses = lexicon.synsets("mouse")?;
        assert_eq!(senses[0].hypernyms, vec!["rodent.n.01"]);
        assert!(senses[0].hyponyms.is_empty());
        Ok(())
    }
}
