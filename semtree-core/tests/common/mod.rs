//! A miniature WordNet database written to a temporary directory.
//!
//! Data lines are written as templates with `{key}` placeholders for synset
//! offsets. Offsets are always 8 digits wide, so line lengths are known
//! before the offsets are, and every placeholder can be resolved in a
//! second pass.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

const LICENSE: &str = "  1 This fixture follows the layout of the Princeton WordNet 3.0 database files.\n";

const NOUN_DATA: &[(&str, &str)] = &[
    ("feline", "{feline} 05 n 01 feline 0 003 ~ {kitten} n 0000 ~ {cat} n 0000 ~ {cat} n 0000 | any of various lithe-bodied roundheaded fissiped mammals"),
    ("cat", "{cat} 05 n 02 cat 0 true_cat 0 002 @ {feline} n 0000 ~ {kitten} n 0000 | feline mammal usually having thick soft fur; \"cats purr\""),
    ("kitten", "{kitten} 05 n 01 kitten 0 001 @ {cat} n 0000 | young domestic cat"),
    ("mouse", "{mouse} 05 n 01 mouse 0 000 | any of numerous small rodents"),
    ("chase_n", "{chase_n} 04 n 01 chase 0 000 | the act of pursuing"),
];

const VERB_DATA: &[(&str, &str)] = &[
    ("chase_v", "{chase_v} 38 v 01 chase 0 000 01 + 08 00 | go after with the intent to catch; \"the dog chased the cat\""),
];

const ADJ_DATA: &[(&str, &str)] = &[
    ("good", "{good} 00 a 01 good 0 001 ! {bad} a 0101 | having desirable or positive qualities"),
    ("bad", "{bad} 00 a 01 bad 0 001 ! {good} a 0101 | having undesirable or negative qualities"),
    ("tiny", "{tiny} 00 s 02 tiny 0 bitty(a) 0 000 | very small"),
];

const NOUN_INDEX: &[&str] = &[
    "cat n 1 2 @ ~ 1 0 {cat}",
    "chase n 1 0 1 0 {chase_n}",
    "feline n 1 1 ~ 1 0 {feline}",
    "kitten n 1 1 @ 1 0 {kitten}",
    "mouse n 1 0 1 0 {mouse}",
    "true_cat n 1 2 @ ~ 1 0 {cat}",
];

const VERB_INDEX: &[&str] = &["chase v 1 0 1 0 {chase_v}"];

const ADJ_INDEX: &[&str] = &[
    "bad a 1 1 ! 1 0 {bad}",
    "bitty a 1 0 1 0 {tiny}",
    "good a 1 1 ! 1 0 {good}",
    "tiny a 1 0 1 0 {tiny}",
];

fn placeholder_pattern() -> regex::Regex {
    regex::Regex::new(r"\{([a-z_]+)\}").expect("placeholder regex")
}

/// Assign each data line the byte offset it will land at
fn assign_offsets(data: &[(&str, &str)], offsets: &mut HashMap<String, usize>) {
    let pattern = placeholder_pattern();
    let mut position = LICENSE.len();
    for (key, template) in data {
        offsets.insert((*key).to_string(), position);
        let measured = pattern.replace_all(template, "00000000");
        position += measured.len() + 1;
    }
}

fn render(lines: impl IntoIterator<Item = &'static str>, offsets: &HashMap<String, usize>) -> String {
    let pattern = placeholder_pattern();
    let mut out = String::from(LICENSE);
    for line in lines {
        let resolved = pattern.replace_all(line, |caps: &regex::Captures<'_>| {
            format!("{:08}", offsets[&caps[1]])
        });
        out.push_str(&resolved);
        out.push('\n');
    }
    out
}

fn write(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write fixture file");
}

/// Build the fixture database and return its directory
pub fn wordnet_fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("create fixture dir");
    let path = dir.path();

    let mut offsets = HashMap::new();
    assign_offsets(NOUN_DATA, &mut offsets);
    assign_offsets(VERB_DATA, &mut offsets);
    assign_offsets(ADJ_DATA, &mut offsets);

    write(path, "data.noun", &render(NOUN_DATA.iter().map(|(_, l)| *l), &offsets));
    write(path, "data.verb", &render(VERB_DATA.iter().map(|(_, l)| *l), &offsets));
    write(path, "data.adj", &render(ADJ_DATA.iter().map(|(_, l)| *l), &offsets));
    write(path, "data.adv", LICENSE);

    write(path, "index.noun", &render(NOUN_INDEX.iter().copied(), &offsets));
    write(path, "index.verb", &render(VERB_INDEX.iter().copied(), &offsets));
    write(path, "index.adj", &render(ADJ_INDEX.iter().copied(), &offsets));
    write(path, "index.adv", LICENSE);

    write(path, "noun.exc", "mice mouse\n");

    dir
}
