//! String helpers used when raw text is turned into tree notation.
//!
//! Tree notation is whitespace-delimited, so anything that ends up as a leaf
//! has to be made whitespace-free first.

/// Replace every whitespace character with `replacement`.
///
/// Each character is replaced individually, so `"a  b"` becomes `"a__b"`.
pub fn replace_whitespace(text: &str, replacement: char) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { replacement } else { c })
        .collect()
}

/// Remove every occurrence of any character in `chars`, wherever it appears.
pub fn remove_chars(text: &str, chars: &[char]) -> String {
    text.chars().filter(|c| !chars.contains(c)).collect()
}

/// True for empty or whitespace-only text
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}
