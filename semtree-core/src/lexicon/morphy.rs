//! Morphy: WordNet's lemmatizer.
//!
//! An inflected form is mapped to base-form candidates either through the
//! per-part-of-speech exception list (irregular forms such as `mice → mouse`)
//! or, failing that, through one pass of suffix detachment rules. Only
//! candidates the database actually knows are kept.

use super::PartOfSpeech;
use std::collections::{HashMap, HashSet};

/// Irregular form → base forms, for one part of speech
pub type ExceptionMap = HashMap<String, Vec<String>>;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Suffix detachment rules for a part of speech
pub const fn detachment_rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Parse an exception file: `inflected base [base ...]` per line
pub fn parse_exceptions(content: &str) -> ExceptionMap {
    let mut map = ExceptionMap::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        if let Some(inflected) = fields.next() {
            let bases: Vec<String> = fields.map(str::to_string).collect();
            map.entry(inflected.to_string()).or_default().extend(bases);
        }
    }
    map
}

/// Base-form candidates of `form` known to the database, in rule order.
///
/// `form` is expected to be lower-cased already. The form itself is always
/// tried first.
pub fn morphy<F>(form: &str, pos: PartOfSpeech, exceptions: Option<&ExceptionMap>, known: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut candidates = vec![form.to_string()];

    match exceptions.and_then(|map| map.get(form)) {
        Some(bases) => candidates.extend(bases.iter().cloned()),
        None => {
            for (suffix, replacement) in detachment_rules(pos) {
                if let Some(stem) = form.strip_suffix(suffix) {
                    candidates.push(format!("{stem}{replacement}"));
                }
            }
        }
    }

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| known(candidate.as_str()))
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}
