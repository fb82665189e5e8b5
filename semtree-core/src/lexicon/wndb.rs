//! Reader for the Princeton WordNet database format (WNDB).
//!
//! A database directory holds, per file group (noun, verb, adj, adv):
//! - `index.<group>`: `lemma pos synset_cnt p_cnt [ptr...] sense_cnt tagsense_cnt offset...`
//! - `data.<group>`: one synset per line, addressed by its byte offset
//! - `<group>.exc`: morphological exception list (optional)
//!
//! Index files are parsed up front. Data files are kept as raw bytes and
//! synset lines are decoded on demand, since every `offset` is a byte
//! position into the file.

use super::morphy::{morphy, parse_exceptions, ExceptionMap};
use super::{Lemma, LexicalDatabase, PartOfSpeech, Synset};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

lazy_static! {
    static ref QUOTED_EXAMPLE: Regex = Regex::new(r#""[^"]*""#).expect("example regex");
    static ref ADJECTIVE_MARKER: Regex = Regex::new(r"\([a-z]+\)$").expect("marker regex");
}

const ANTONYM: &str = "!";
const HYPERNYM: &str = "@";
const HYPONYM: &str = "~";

/// The four file groups of a WordNet database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FileGroup {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl FileGroup {
    const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adj, Self::Adv];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adj => "adj",
            Self::Adv => "adv",
        }
    }

    const fn of(pos: PartOfSpeech) -> Self {
        match pos {
            PartOfSpeech::Noun => Self::Noun,
            PartOfSpeech::Verb => Self::Verb,
            PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => Self::Adj,
            PartOfSpeech::Adverb => Self::Adv,
        }
    }
}

/// One file group loaded into memory
#[derive(Debug, Default)]
struct GroupFiles {
    /// lemma -> synset offsets, most frequent sense first
    index: HashMap<String, Vec<usize>>,
    data: Vec<u8>,
    exceptions: ExceptionMap,
}

/// A pointer as stored on a synset line
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pointer {
    symbol: String,
    offset: usize,
    pos: PartOfSpeech,
    /// 1-based source word, 0 for a synset-level pointer
    source: usize,
    /// 1-based target word, 0 for a synset-level pointer
    target: usize,
}

/// A synset line decoded but not yet resolved against other synsets
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawSynset {
    offset: usize,
    pos: PartOfSpeech,
    words: Vec<String>,
    pointers: Vec<Pointer>,
    definition: String,
}

impl RawSynset {
    fn semantic_targets<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Pointer> {
        self.pointers
            .iter()
            .filter(move |p| p.symbol == symbol && p.source == 0 && p.target == 0)
    }
}

/// WordNet database loaded from a dictionary directory
#[derive(Debug)]
pub struct WordNetDb {
    name: String,
    groups: HashMap<FileGroup, GroupFiles>,
}

impl WordNetDb {
    /// Load every file group from `dir`.
    ///
    /// Index and data files are required; exception files are optional.
    pub fn open(dir: &Path) -> crate::Result<Self> {
        if !dir.is_dir() {
            return Err(crate::Error::Lexicon(format!(
                "WordNet directory not found: {}",
                dir.display()
            )));
        }

        let mut groups = HashMap::new();
        for group in FileGroup::ALL {
            groups.insert(group, load_group(dir, group)?);
        }

        let lemma_count: usize = groups.values().map(|g| g.index.len()).sum();
        tracing::info!(path = %dir.display(), lemmas = lemma_count, "WordNet database loaded");

        Ok(Self {
            name: format!("WordNet ({})", dir.display()),
            groups,
        })
    }

    fn group(&self, group: FileGroup) -> crate::Result<&GroupFiles> {
        self.groups
            .get(&group)
            .ok_or_else(|| crate::Error::Lexicon(format!("missing file group {}", group.suffix())))
    }

    fn offsets(&self, lemma: &str, pos: PartOfSpeech) -> &[usize] {
        self.groups
            .get(&FileGroup::of(pos))
            .and_then(|g| g.index.get(lemma))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn raw_synset(&self, pos: PartOfSpeech, offset: usize) -> crate::Result<RawSynset> {
        let files = self.group(FileGroup::of(pos))?;
        let line = line_at(&files.data, offset).ok_or_else(|| {
            crate::Error::Lexicon(format!("offset {offset} out of range in data.{}", FileGroup::of(pos).suffix()))
        })?;
        parse_data_line(&line, offset)
    }

    /// `lemma.pos.NN`, numbered by the position of the synset in the index
    /// entry of its first lemma
    fn synset_name(&self, raw: &RawSynset) -> crate::Result<String> {
        let first = raw
            .words
            .first()
            .ok_or_else(|| crate::Error::Lexicon(format!("synset {} has no words", raw.offset)))?
            .to_lowercase();
        let sense = self
            .offsets(&first, raw.pos)
            .iter()
            .position(|&o| o == raw.offset)
            .ok_or_else(|| {
                crate::Error::Lexicon(format!("synset {} is not indexed under '{}'", raw.offset, first))
            })?;
        Ok(format!("{}.{}.{:02}", first, raw.pos.code(), sense + 1))
    }

    /// Names of the synsets reached through `symbol`, sorted by name with
    /// repeated pointers collapsed
    fn related_names(&self, raw: &RawSynset, symbol: &str) -> crate::Result<Vec<String>> {
        let mut names = raw
            .semantic_targets(symbol)
            .map(|p| {
                let target = self.raw_synset(p.pos, p.offset)?;
                self.synset_name(&target)
            })
            .collect::<crate::Result<Vec<_>>>()?;
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }

    fn resolve(&self, raw: &RawSynset) -> crate::Result<Synset> {
        let mut lemmas = Vec::with_capacity(raw.words.len());
        for (index, word) in raw.words.iter().enumerate() {
            let mut antonyms = Vec::new();
            for pointer in raw.pointers.iter().filter(|p| p.symbol == ANTONYM && p.source == index + 1) {
                let target = self.raw_synset(pointer.pos, pointer.offset)?;
                let name = target.words.get(pointer.target.saturating_sub(1)).ok_or_else(|| {
                    crate::Error::Lexicon(format!(
                        "antonym pointer to missing word {} of synset {}",
                        pointer.target, pointer.offset
                    ))
                })?;
                antonyms.push(name.clone());
            }
            lemmas.push(Lemma { name: word.clone(), antonyms });
        }

        Ok(Synset {
            name: self.synset_name(raw)?,
            pos: raw.pos,
            definition: raw.definition.clone(),
            lemmas,
            hypernyms: self.related_names(raw, HYPERNYM)?,
            hyponyms: self.related_names(raw, HYPONYM)?,
        })
    }
}

impl LexicalDatabase for WordNetDb {
    fn name(&self) -> &str {
        &self.name
    }

    fn synsets(&self, word: &str) -> crate::Result<Vec<Synset>> {
        let form = word.to_lowercase();
        let mut found = Vec::new();

        for pos in PartOfSpeech::LOOKUP_ORDER {
            let files = self.group(FileGroup::of(pos))?;
            let candidates = morphy(&form, pos, Some(&files.exceptions), |c| files.index.contains_key(c));
            for candidate in candidates {
                for &offset in self.offsets(&candidate, pos) {
                    let raw = self.raw_synset(pos, offset)?;
                    found.push(self.resolve(&raw)?);
                }
            }
        }

        Ok(found)
    }
}

fn load_group(dir: &Path, group: FileGroup) -> crate::Result<GroupFiles> {
    let index_path = dir.join(format!("index.{}", group.suffix()));
    let data_path = dir.join(format!("data.{}", group.suffix()));
    let exc_path = dir.join(format!("{}.exc", group.suffix()));

    let index_text = semtree_utils::read_text_file(&index_path).map_err(|e| {
        crate::Error::Lexicon(format!("cannot read {}: {}", index_path.display(), e))
    })?;
    let data = std::fs::read(&data_path).map_err(|e| {
        crate::Error::Lexicon(format!("cannot read {}: {}", data_path.display(), e))
    })?;
    let exceptions = if exc_path.is_file() {
        parse_exceptions(&semtree_utils::read_text_file(&exc_path)?)
    } else {
        tracing::debug!(path = %exc_path.display(), "no exception file");
        ExceptionMap::new()
    };

    Ok(GroupFiles {
        index: parse_index(&index_text)?,
        data,
        exceptions,
    })
}

/// Parse an index file into lemma -> offsets; license lines start with spaces
fn parse_index(content: &str) -> crate::Result<HashMap<String, Vec<usize>>> {
    let mut index = HashMap::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.starts_with(' ') || line.trim().is_empty() {
            continue;
        }
        let (lemma, offsets) = parse_index_line(line)
            .ok_or_else(|| crate::Error::Lexicon(format!("malformed index line {}: {}", line_no + 1, line)))?;
        index.insert(lemma, offsets);
    }
    Ok(index)
}

fn parse_index_line(line: &str) -> Option<(String, Vec<usize>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = (*fields.first()?).to_string();
    let synset_cnt: usize = fields.get(2)?.parse().ok()?;
    let p_cnt: usize = fields.get(3)?.parse().ok()?;
    // lemma pos synset_cnt p_cnt [ptr * p_cnt] sense_cnt tagsense_cnt
    let first_offset = 4 + p_cnt + 2;
    let offsets = fields
        .get(first_offset..first_offset + synset_cnt)?
        .iter()
        .map(|f| f.parse().ok())
        .collect::<Option<Vec<usize>>>()?;
    Some((lemma, offsets))
}

/// The line starting at byte `offset`, without its line terminator
fn line_at(data: &[u8], offset: usize) -> Option<String> {
    let rest = data.get(offset..)?;
    let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    let line = String::from_utf8_lossy(&rest[..end]);
    Some(line.trim_end_matches('\r').to_string())
}

fn parse_data_line(line: &str, expected_offset: usize) -> crate::Result<RawSynset> {
    let malformed = |what: &str| crate::Error::Lexicon(format!("malformed synset at {expected_offset}: {what}"));

    let (columns, gloss) = line.split_once('|').ok_or_else(|| malformed("no gloss separator"))?;
    let mut fields = columns.split_whitespace();
    let mut next = |what: &str| fields.next().ok_or_else(|| malformed(what));

    let offset: usize = next("offset")?.parse().map_err(|_| malformed("offset"))?;
    if offset != expected_offset {
        return Err(malformed("offset does not match line position"));
    }
    next("lex_filenum")?;
    let ss_type = next("ss_type")?;
    let pos = ss_type
        .chars()
        .next()
        .and_then(PartOfSpeech::from_code)
        .ok_or_else(|| malformed("ss_type"))?;

    let w_cnt = usize::from_str_radix(next("w_cnt")?, 16).map_err(|_| malformed("w_cnt"))?;
    let mut words = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        let word = next("word")?;
        next("lex_id")?;
        words.push(ADJECTIVE_MARKER.replace(word, "").into_owned());
    }

    let p_cnt: usize = next("p_cnt")?.parse().map_err(|_| malformed("p_cnt"))?;
    let mut pointers = Vec::with_capacity(p_cnt);
    for _ in 0..p_cnt {
        let symbol = next("pointer symbol")?.to_string();
        let target_offset: usize = next("pointer offset")?.parse().map_err(|_| malformed("pointer offset"))?;
        let target_pos = next("pointer pos")?
            .chars()
            .next()
            .and_then(PartOfSpeech::from_code)
            .ok_or_else(|| malformed("pointer pos"))?;
        let source_target = next("pointer source/target")?;
        if source_target.len() != 4 {
            return Err(malformed("pointer source/target"));
        }
        let source = usize::from_str_radix(&source_target[..2], 16).map_err(|_| malformed("pointer source"))?;
        let target = usize::from_str_radix(&source_target[2..], 16).map_err(|_| malformed("pointer target"))?;
        pointers.push(Pointer { symbol, offset: target_offset, pos: target_pos, source, target });
    }

    Ok(RawSynset {
        offset,
        pos,
        words,
        pointers,
        definition: definition_from_gloss(gloss),
    })
}

/// Gloss minus its quoted usage examples
fn definition_from_gloss(gloss: &str) -> String {
    QUOTED_EXAMPLE
        .replace_all(gloss, "")
        .trim()
        .trim_matches(|c| c == ';' || c == ' ')
        .to_string()
}
