//! Bracketed tree notation.
//!
//! ```text
//! TREE  := '(' LABEL (TREE | LEAF)* ')'
//! LABEL := S | SENT | WS | W | DEF | SYN | ANT | HY | HE
//! LEAF  := any run of characters other than whitespace, '(' and ')'
//! ```
//!
//! Serialization never produces output that fails to parse: leaves are
//! sanitized on the way out and the nesting comes from the tree itself.

use super::{Label, Node, Tree};
use std::borrow::Cow;

/// Why a notation string was rejected. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input at byte {position}")]
    UnexpectedEnd { position: usize },

    #[error("unmatched ')' at byte {position}")]
    UnmatchedClose { position: usize },

    #[error("expected '(' at byte {position}")]
    ExpectedOpen { position: usize },

    #[error("missing label at byte {position}")]
    MissingLabel { position: usize },

    #[error("unknown label '{label}' at byte {position}")]
    UnknownLabel { label: String, position: usize },

    #[error("unexpected input after the root tree at byte {position}")]
    TrailingInput { position: usize },
}

impl ParseError {
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedEnd { position }
            | Self::UnmatchedClose { position }
            | Self::ExpectedOpen { position }
            | Self::MissingLabel { position }
            | Self::UnknownLabel { position, .. }
            | Self::TrailingInput { position } => *position,
        }
    }
}

/// Make `leaf` safe to embed in notation.
///
/// Whitespace becomes `_`, brackets become `-LRB-` / `-RRB-`, and an empty
/// leaf becomes `_`.
pub fn sanitize_leaf(leaf: &str) -> Cow<'_, str> {
    if leaf.is_empty() {
        return Cow::Borrowed("_");
    }
    if !leaf.chars().any(|c| c.is_whitespace() || c == '(' || c == ')') {
        return Cow::Borrowed(leaf);
    }

    let mut out = String::with_capacity(leaf.len() + 8);
    for c in leaf.chars() {
        match c {
            '(' => out.push_str("-LRB-"),
            ')' => out.push_str("-RRB-"),
            c if c.is_whitespace() => out.push('_'),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

impl Tree {
    /// Serialize as `(LABEL child child ...)`
    pub fn to_notation(&self) -> String {
        let mut out = String::new();
        self.write_notation(&mut out);
        out
    }

    fn write_notation(&self, out: &mut String) {
        out.push('(');
        out.push_str(self.label.as_str());
        for child in &self.children {
            out.push(' ');
            match child {
                Node::Tree(tree) => tree.write_notation(out),
                Node::Leaf(leaf) => out.push_str(&sanitize_leaf(leaf)),
            }
        }
        out.push(')');
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open(usize),
    Close(usize),
    Atom(usize, &'a str),
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut atom_start: Option<usize> = None;

    for (position, c) in input.char_indices() {
        let is_delimiter = c.is_whitespace() || c == '(' || c == ')';
        if is_delimiter {
            if let Some(start) = atom_start.take() {
                tokens.push(Token::Atom(start, &input[start..position]));
            }
            match c {
                '(' => tokens.push(Token::Open(position)),
                ')' => tokens.push(Token::Close(position)),
                _ => {}
            }
        } else if atom_start.is_none() {
            atom_start = Some(position);
        }
    }
    if let Some(start) = atom_start {
        tokens.push(Token::Atom(start, &input[start..]));
    }
    tokens
}

/// Parse one tree from bracketed notation.
///
/// Surrounding whitespace is ignored; anything else after the root tree is
/// an error.
pub fn parse(input: &str) -> Result<Tree, ParseError> {
    let end = input.len();
    let mut tokens = tokenize(input).into_iter();
    let mut open: Vec<Tree> = Vec::new();
    let mut root: Option<Tree> = None;

    while let Some(token) = tokens.next() {
        if root.is_some() {
            let position = match token {
                Token::Open(p) | Token::Close(p) | Token::Atom(p, _) => p,
            };
            return Err(ParseError::TrailingInput { position });
        }

        match token {
            Token::Open(_) => {
                let label = match tokens.next() {
                    Some(Token::Atom(position, name)) => name
                        .parse::<Label>()
                        .map_err(|_| ParseError::UnknownLabel { label: name.to_string(), position })?,
                    Some(Token::Open(position) | Token::Close(position)) => {
                        return Err(ParseError::MissingLabel { position })
                    }
                    None => return Err(ParseError::UnexpectedEnd { position: end }),
                };
                open.push(Tree::new(label));
            }
            Token::Close(position) => {
                let tree = open.pop().ok_or(ParseError::UnmatchedClose { position })?;
                match open.last_mut() {
                    Some(parent) => parent.children.push(Node::Tree(tree)),
                    None => root = Some(tree),
                }
            }
            Token::Atom(position, leaf) => match open.last_mut() {
                Some(parent) => parent.children.push(Node::Leaf(leaf.to_string())),
                None => return Err(ParseError::ExpectedOpen { position }),
            },
        }
    }

    root.ok_or(ParseError::UnexpectedEnd { position: end })
}
