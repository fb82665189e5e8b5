//! Sentence segmentation.
//!
//! Unicode sentence boundaries (UAX #29) break after every period followed
//! by a space and a capital, which splits `Mr. Smith` in two. A repair pass
//! re-joins pieces whose predecessor ends in a known abbreviation or a
//! single initial.

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that never end a sentence, lower-cased and without the
/// final period
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "mt", "vs", "etc", "e.g", "i.e", "cf", "inc", "ltd",
    "corp", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
];

/// Abbreviations that are also ordinary words; they only hold a sentence
/// together when a number follows (`No. 5`, `fig. 3`)
pub const NUMBERED_ABBREVIATIONS: &[&str] = &["no", "fig", "vol"];

/// Split `text` into trimmed, non-empty sentences
pub fn sentences(text: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for piece in text.split_sentence_bounds().map(str::trim).filter(|s| !s.is_empty()) {
        match merged.last_mut() {
            Some(previous) if continues_after(previous, piece) => {
                previous.push(' ');
                previous.push_str(piece);
            }
            _ => merged.push(piece.to_string()),
        }
    }
    merged
}

/// Whether the boundary between `sentence` and `next` is a false split
fn continues_after(sentence: &str, next: &str) -> bool {
    let Some(last_word) = sentence.split_whitespace().last() else {
        return false;
    };
    let Some(stem) = last_word.strip_suffix('.') else {
        return false;
    };
    let stem = stem.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = stem.chars();
    if let (Some(initial), None) = (chars.next(), chars.next()) {
        // `I.` is a pronoun, lowercase letters are list items or words
        return initial.is_uppercase() && initial != 'I';
    }

    let stem = stem.to_lowercase();
    if NUMBERED_ABBREVIATIONS.contains(&stem.as_str()) {
        return next.starts_with(|c: char| c.is_ascii_digit());
    }
    ABBREVIATIONS.contains(&stem.as_str())
}
