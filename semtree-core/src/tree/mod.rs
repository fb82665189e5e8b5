//! The semantic tree.
//!
//! A document tree has a fixed shape:
//!
//! ```text
//! S
//! └── SENT            one per sentence
//!     └── WS          one per word
//!         ├── W       the word itself
//!         ├── DEF     definition         (only when known)
//!         ├── SYN     synonyms           (only when non-empty)
//!         ├── ANT     antonyms           (only when non-empty)
//!         ├── HY      hyponyms           (only when non-empty)
//!         └── HE      hypernyms          (only when non-empty)
//! ```
//!
//! Trees are built from [`WordSenseRecord`]s and serialized to bracketed
//! notation only when handed to the renderer; see [`notation`].

pub mod notation;

pub use notation::{parse, sanitize_leaf, ParseError};

use crate::lookup::WordSenseRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Node labels of the semantic tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Whole document
    S,
    /// Sentence
    Sent,
    /// Word with its senses
    Ws,
    /// Surface word
    W,
    Def,
    Syn,
    Ant,
    /// Hyponyms
    Hy,
    /// Hypernyms
    He,
}

impl Label {
    pub const ALL: [Self; 9] = [
        Self::S,
        Self::Sent,
        Self::Ws,
        Self::W,
        Self::Def,
        Self::Syn,
        Self::Ant,
        Self::Hy,
        Self::He,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::Sent => "SENT",
            Self::Ws => "WS",
            Self::W => "W",
            Self::Def => "DEF",
            Self::Syn => "SYN",
            Self::Ant => "ANT",
            Self::Hy => "HY",
            Self::He => "HE",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseError::UnknownLabel { label: s.to_string(), position: 0 })
    }
}

/// A child of a [`Tree`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Tree(Tree),
    Leaf(String),
}

impl From<Tree> for Node {
    fn from(tree: Tree) -> Self {
        Self::Tree(tree)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    pub label: Label,
    pub children: Vec<Node>,
}

impl Tree {
    pub fn new(label: Label) -> Self {
        Self { label, children: Vec::new() }
    }

    pub fn with_children(label: Label, children: Vec<Node>) -> Self {
        Self { label, children }
    }

    /// A subtree holding only leaves
    pub fn with_leaves<I, S>(label: Label, leaves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_children(label, leaves.into_iter().map(|leaf| Node::Leaf(leaf.into())).collect())
    }

    /// `(WS (W word) (DEF ..) (SYN ..) (ANT ..) (HY ..) (HE ..))` with the
    /// optional sections present only when they have content
    pub fn word_sense(record: &WordSenseRecord) -> Self {
        let mut ws = Self::new(Label::Ws);
        ws.push(Self::with_leaves(Label::W, [record.word.as_str()]));
        if let Some(definition) = &record.definition {
            ws.push(Self::with_leaves(Label::Def, [definition.as_str()]));
        }
        for (label, items) in [
            (Label::Syn, &record.synonyms),
            (Label::Ant, &record.antonyms),
            (Label::Hy, &record.hyponyms),
            (Label::He, &record.hypernyms),
        ] {
            if !items.is_empty() {
                ws.push(Self::with_leaves(label, items.iter().map(String::as_str)));
            }
        }
        ws
    }

    pub fn sentence(words: Vec<Self>) -> Self {
        Self::with_children(Label::Sent, words.into_iter().map(Node::Tree).collect())
    }

    pub fn document(sentences: Vec<Self>) -> Self {
        Self::with_children(Label::S, sentences.into_iter().map(Node::Tree).collect())
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Direct subtrees, skipping leaves
    pub fn subtrees(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Node::Tree(tree) => Some(tree),
            Node::Leaf(_) => None,
        })
    }

    /// Direct leaves, skipping subtrees
    pub fn leaves(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|child| match child {
            Node::Leaf(leaf) => Some(leaf.as_str()),
            Node::Tree(_) => None,
        })
    }

    /// Number of levels, counting leaves as one
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| match child {
                Node::Tree(tree) => tree.depth(),
                Node::Leaf(_) => 1,
            })
            .max()
            .unwrap_or(0)
    }

    /// The same tree with every leaf as it will appear in notation
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let children = self
            .children
            .iter()
            .map(|child| match child {
                Node::Tree(tree) => Node::Tree(tree.sanitized()),
                Node::Leaf(leaf) => Node::Leaf(sanitize_leaf(leaf).into_owned()),
            })
            .collect();
        Self::with_children(self.label, children)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> WordSenseRecord {
        WordSenseRecord {
            word: "cat".to_string(),
            definition: Some("feline_mammal".to_string()),
            synonyms: vec!["cat".to_string(), "true_cat".to_string()],
            antonyms: vec![],
            hyponyms: vec!["kitten.n.01".to_string()],
            hypernyms: vec!["feline.n.01".to_string()],
        }
    }

    #[test]
    fn test_label_names_round_trip() {
        for label in Label::ALL {
            assert_eq!(label.as_str().parse::<Label>().unwrap(), label);
        }
        assert!("NP".parse::<Label>().is_err());
    }

    #[test]
    fn test_word_sense_skips_empty_sections() {
        let ws = Tree::word_sense(&record());
        let labels: Vec<Label> = ws.subtrees().map(|t| t.label).collect();
        assert_eq!(labels, vec![Label::W, Label::Def, Label::Syn, Label::Hy, Label::He]);
    }

    #[test]
    fn test_word_sense_for_miss_has_only_word() {
        let ws = Tree::word_sense(&WordSenseRecord::miss("zzz"));
        assert_eq!(ws.to_notation(), "(WS (W zzz))");
    }

    #[test]
    fn test_document_shape() {
        let doc = Tree::document(vec![Tree::sentence(vec![Tree::word_sense(&record())])]);
        assert_eq!(doc.label, Label::S);
        assert_eq!(doc.subtrees().count(), 1);
        assert_eq!(doc.depth(), 5);
    }

    #[test]
    fn test_leaves_and_subtrees_are_separated() {
        let tree = Tree::with_leaves(Label::Syn, ["a", "b"]);
        assert_eq!(tree.leaves().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(tree.subtrees().count(), 0);
    }
}
