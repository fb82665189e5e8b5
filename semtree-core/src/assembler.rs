//! Text → semantic tree.
//!
//! The assembler drives the whole non-visual pipeline: newline handling,
//! sentence split, punctuation handling, word split, one lookup per word, and
//! the `S / SENT / WS` tree built from the results.

use crate::lexicon::LexicalDatabase;
use crate::lookup::lookup;
use crate::tokenize::{sentences, words};
use crate::tree::Tree;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Characters removed or dropped by the punctuation policy
pub const STRIPPED_PUNCTUATION: &[char] = &['.', ',', '?'];

/// What happens to line breaks before sentence splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewlinePolicy {
    /// Delete `\n` and `\r`; the last word of a line fuses with the first
    /// word of the next
    #[default]
    Strip,
    /// Replace each line break with a space
    Space,
}

/// How `.`, `,` and `?` are removed from a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationPolicy {
    /// Remove every occurrence before word tokenization, including inside
    /// abbreviations and numbers (`Mr.` → `Mr`, `3.14` → `314`)
    #[default]
    Naive,
    /// Tokenize first, then drop tokens made only of those characters
    TokenAware,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyOptions {
    pub newline: NewlinePolicy,
    pub punctuation: PunctuationPolicy,
}

impl From<crate::config::AssemblyConfig> for AssemblyOptions {
    fn from(config: crate::config::AssemblyConfig) -> Self {
        Self { newline: config.newline, punctuation: config.punctuation }
    }
}

/// Cooperative cancellation flag shared between a caller and a running
/// assembly
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> crate::Result<()> {
        if self.is_cancelled() {
            Err(crate::Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

fn apply_newline_policy(text: &str, policy: NewlinePolicy) -> String {
    match policy {
        NewlinePolicy::Strip => text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect(),
        NewlinePolicy::Space => text.replace("\r\n", " ").replace(['\n', '\r'], " "),
    }
}

fn sentence_words(sentence: &str, policy: PunctuationPolicy) -> Vec<String> {
    match policy {
        PunctuationPolicy::Naive => words(&semtree_utils::remove_chars(sentence, STRIPPED_PUNCTUATION)),
        PunctuationPolicy::TokenAware => words(sentence)
            .into_iter()
            .filter(|token| !token.chars().all(|c| STRIPPED_PUNCTUATION.contains(&c)))
            .collect(),
    }
}

/// Build the semantic tree of `text`.
///
/// Returns `Ok(None)` for empty or whitespace-only text. Stops with
/// [`crate::Error::Cancelled`] at the next word once `cancel` is set.
pub fn assemble(
    text: &str,
    db: &dyn LexicalDatabase,
    options: &AssemblyOptions,
    cancel: &CancelToken,
) -> crate::Result<Option<Tree>> {
    let text = apply_newline_policy(text, options.newline);
    if semtree_utils::is_blank(&text) {
        tracing::debug!("nothing to assemble");
        return Ok(None);
    }

    let start = Instant::now();
    let mut word_count = 0usize;
    let mut sentence_trees = Vec::new();

    for sentence in sentences(&text) {
        let mut word_trees = Vec::new();
        for word in sentence_words(&sentence, options.punctuation) {
            cancel.check()?;
            let record = lookup(db, &word)?;
            word_trees.push(Tree::word_sense(&record));
        }
        word_count += word_trees.len();
        sentence_trees.push(Tree::sentence(word_trees));
    }

    tracing::info!(
        sentences = sentence_trees.len(),
        words = word_count,
        lexicon = db.name(),
        elapsed = ?start.elapsed(),
        "assembled semantic tree"
    );
    Ok(Some(Tree::document(sentence_trees)))
}

/// [`assemble`], serialized to notation
pub fn assemble_notation(
    text: &str,
    db: &dyn LexicalDatabase,
    options: &AssemblyOptions,
    cancel: &CancelToken,
) -> crate::Result<Option<String>> {
    Ok(assemble(text, db, options, cancel)?.map(|tree| tree.to_notation()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lemma, MemoryLexicon, PartOfSpeech, Synset};
    use crate::tree::Label;

    fn lexicon() -> MemoryLexicon {
        MemoryLexicon::new("test").with_synset(
            Synset::new("cat.n.01", PartOfSpeech::Noun, "feline mammal").with_lemma(Lemma::new("cat")),
        )
    }

    fn run(text: &str, options: AssemblyOptions) -> Option<Tree> {
        assemble(text, &lexicon(), &options, &CancelToken::new()).unwrap()
    }

    fn word_leaves(tree: &Tree) -> Vec<String> {
        tree.subtrees()
            .flat_map(Tree::subtrees)
            .filter_map(|ws| ws.subtrees().next())
            .flat_map(|w| w.leaves().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn test_blank_text_gives_no_tree() {
        assert!(run("", AssemblyOptions::default()).is_none());
        assert!(run(" \n\t\r\n", AssemblyOptions::default()).is_none());
    }

    #[test]
    fn test_known_word_gets_sections() {
        let notation = run("cat", AssemblyOptions::default()).unwrap().to_notation();
        assert_eq!(notation, "(S (SENT (WS (W cat) (DEF feline_mammal) (SYN cat))))");
    }

    #[test]
    fn test_strip_policy_fuses_lines() {
        let tree = run("big\ncat", AssemblyOptions::default()).unwrap();
        assert_eq!(word_leaves(&tree), vec!["bigcat"]);
    }

    #[test]
    fn test_space_policy_keeps_words_apart() {
        let options = AssemblyOptions { newline: NewlinePolicy::Space, ..AssemblyOptions::default() };
        let tree = run("big\r\ncat", options).unwrap();
        assert_eq!(word_leaves(&tree), vec!["big", "cat"]);
    }

    #[test]
    fn test_naive_punctuation_mangles_numbers() {
        let tree = run("Pi is 3.14, roughly.", AssemblyOptions::default()).unwrap();
        assert_eq!(word_leaves(&tree), vec!["Pi", "is", "314", "roughly"]);
    }

    #[test]
    fn test_token_aware_punctuation_keeps_numbers() {
        let options = AssemblyOptions { punctuation: PunctuationPolicy::TokenAware, ..AssemblyOptions::default() };
        let tree = run("Pi is 3.14, roughly.", options).unwrap();
        assert_eq!(word_leaves(&tree), vec!["Pi", "is", "3.14", "roughly"]);
    }

    #[test]
    fn test_one_sent_per_sentence() {
        let tree = run("A cat. Another cat.", AssemblyOptions::default()).unwrap();
        assert_eq!(tree.label, Label::S);
        assert_eq!(tree.subtrees().count(), 2);
        assert!(tree.subtrees().all(|sent| sent.label == Label::Sent));
    }

    #[test]
    fn test_punctuation_only_sentence_is_empty_sent() {
        let tree = run("?", AssemblyOptions::default()).unwrap();
        assert_eq!(tree.to_notation(), "(S (SENT))");
    }

    #[test]
    fn test_cancelled_token_stops_assembly() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = assemble("cat", &lexicon(), &AssemblyOptions::default(), &cancel);
        assert!(matches!(result, Err(crate::Error::Cancelled)));
    }

    #[test]
    fn test_cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!token.is_cancelled());
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_assemble_notation_matches_tree() {
        let db = lexicon();
        let options = AssemblyOptions::default();
        let cancel = CancelToken::new();
        let tree = assemble("cat", &db, &options, &cancel).unwrap().unwrap();
        let notation = assemble_notation("cat", &db, &options, &cancel).unwrap().unwrap();
        assert_eq!(notation, tree.to_notation());
        assert_eq!(assemble_notation("", &db, &options, &cancel).unwrap(), None);
    }
}
