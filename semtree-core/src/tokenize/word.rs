//! Penn Treebank style word tokenizer.
//!
//! The sentence is rewritten by an ordered list of regex substitutions that
//! pad punctuation with spaces and split clitics (`don't` → `do n't`), then
//! split on whitespace. Double quotes come out as ` `` ` and `''`.

use lazy_static::lazy_static;
use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("tokenizer regex"),
            replacement,
        })
        .collect()
}

lazy_static! {
    static ref STARTING_QUOTES: Vec<Rule> = rules(&[
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'')"#, "$1 `` "),
    ]);

    static ref PUNCTUATION: Vec<Rule> = rules(&[
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " $0 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
        (r"[\]\[(){}<>]", " $0 "),
        (r"--", " -- "),
    ]);

    static ref ENDING_QUOTES: Vec<Rule> = rules(&[
        (r#"""#, " '' "),
        (r"(\S)('')", "$1 $2 "),
        (r"([^' ])('[sSmMdD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
    ]);

    static ref CONTRACTIONS: Vec<Rule> = rules(&[
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)\s", " $1 $2 "),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ]);
}

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |text, rule| {
        rule.pattern.replace_all(&text, rule.replacement).into_owned()
    })
}

/// Split one sentence into word tokens
pub fn words(sentence: &str) -> Vec<String> {
    let text = apply(&STARTING_QUOTES, sentence.to_string());
    let text = apply(&PUNCTUATION, text);
    // clitic rules expect a space on both ends
    let text = apply(&ENDING_QUOTES, format!(" {text} "));
    let text = apply(&CONTRACTIONS, text);
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(sentence: &str) -> Vec<String> {
        words(sentence)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(tokens("Cats chase mice"), vec!["Cats", "chase", "mice"]);
    }

    #[test]
    fn test_final_period_and_commas() {
        assert_eq!(tokens("Cats, dogs chase mice."), vec!["Cats", ",", "dogs", "chase", "mice", "."]);
    }

    #[test]
    fn test_numbers_keep_inner_punctuation() {
        assert_eq!(tokens("It costs 1,000 dollars"), vec!["It", "costs", "1,000", "dollars"]);
    }

    #[test]
    fn test_clitics_are_split() {
        assert_eq!(tokens("I don't know"), vec!["I", "do", "n't", "know"]);
        assert_eq!(tokens("it's here"), vec!["it", "'s", "here"]);
        assert_eq!(tokens("we'll see"), vec!["we", "'ll", "see"]);
    }

    #[test]
    fn test_fused_forms_are_split() {
        assert_eq!(tokens("I cannot go"), vec!["I", "can", "not", "go"]);
        assert_eq!(tokens("gonna win"), vec!["gon", "na", "win"]);
        assert_eq!(tokens("I wanna go"), vec!["I", "wan", "na", "go"]);
    }

    #[test]
    fn test_quotes_are_normalized() {
        assert_eq!(tokens(r#""Hello" she said"#), vec!["``", "Hello", "''", "she", "said"]);
    }

    #[test]
    fn test_question_and_brackets() {
        assert_eq!(tokens("Why (really)?"), vec!["Why", "(", "really", ")", "?"]);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }
}
