mod common;

use semtree_core::lexicon::{self, LexicalDatabase};
use semtree_core::{lookup, LexiconConfig, PartOfSpeech, WordNetDb};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn names(db: &WordNetDb, word: &str) -> Vec<String> {
    db.synsets(word).unwrap().into_iter().map(|s| s.name).collect()
}

#[test]
fn test_regular_plural_resolves_with_relations() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;

    let senses = db.synsets("Cats")?;
    assert_eq!(senses.len(), 1);
    let cat = &senses[0];
    assert_eq!(cat.name, "cat.n.01");
    assert_eq!(cat.pos, PartOfSpeech::Noun);
    assert_eq!(cat.lemma_names().collect::<Vec<_>>(), vec!["cat", "true_cat"]);
    assert_eq!(cat.definition, "feline mammal usually having thick soft fur");
    assert_eq!(cat.hypernyms, vec!["feline.n.01"]);
    assert_eq!(cat.hyponyms, vec!["kitten.n.01"]);
    Ok(())
}

#[test]
fn test_related_synsets_sorted_by_name_without_repeats() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;

    // feline's data line lists kitten before cat, and cat twice
    let feline = db.synsets("feline")?;
    println!("feline hyponyms: {:?}", feline[0].hyponyms);
    assert_eq!(feline[0].hyponyms, vec!["cat.n.01", "kitten.n.01"]);
    Ok(())
}

#[test]
fn test_exception_list_handles_irregular_plural() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;
    assert_eq!(names(&db, "mice"), vec!["mouse.n.01"]);
    Ok(())
}

#[test]
fn test_parts_of_speech_in_lookup_order() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;
    assert_eq!(names(&db, "chase"), vec!["chase.n.01", "chase.v.01"]);
    assert_eq!(names(&db, "chasing"), vec!["chase.v.01"]);
    Ok(())
}

#[test]
fn test_antonyms_follow_lexical_pointers() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;
    let good = db.synsets("good")?;
    assert_eq!(good[0].name, "good.a.01");
    assert_eq!(good[0].lemmas[0].antonyms, vec!["bad"]);
    Ok(())
}

#[test]
fn test_satellites_are_named_with_s() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;
    let tiny = db.synsets("bitty")?;
    assert_eq!(tiny[0].name, "tiny.s.01");
    assert_eq!(tiny[0].pos, PartOfSpeech::AdjectiveSatellite);
    assert_eq!(tiny[0].lemma_names().collect::<Vec<_>>(), vec!["tiny", "bitty"]);
    Ok(())
}

#[test]
fn test_unknown_word_has_no_senses() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;
    assert!(db.synsets("qwerty")?.is_empty());
    assert!(lookup(&db, "qwerty")?.is_miss());
    Ok(())
}

#[test]
fn test_lookup_record_from_wordnet() -> TestResult {
    let dir = common::wordnet_fixture();
    let db = WordNetDb::open(dir.path())?;
    let record = lookup(&db, "Cats")?;
    assert_eq!(record.word, "Cats");
    assert_eq!(record.definition.as_deref(), Some("feline_mammal_usually_having_thick_soft_fur"));
    assert_eq!(record.synonyms, vec!["cat", "true_cat"]);
    assert!(record.antonyms.is_empty());
    Ok(())
}

#[test]
fn test_open_through_config() -> TestResult {
    let dir = common::wordnet_fixture();
    let config = LexiconConfig { wordnet_dir: Some(dir.path().to_path_buf()), json_path: None };
    let db = lexicon::open(&config)?;
    assert!(db.name().starts_with("WordNet"));
    assert_eq!(db.synsets("kitten")?[0].hypernyms, vec!["cat.n.01"]);
    Ok(())
}

#[test]
fn test_missing_data_file_fails_to_open() {
    let dir = common::wordnet_fixture();
    std::fs::remove_file(dir.path().join("data.verb")).unwrap();
    let result = WordNetDb::open(dir.path());
    assert!(matches!(result, Err(semtree_core::Error::Lexicon(_))));
}

#[test]
fn test_index_pointing_at_wrong_offset_is_reported() {
    let dir = common::wordnet_fixture();
    let index = std::fs::read_to_string(dir.path().join("index.verb")).unwrap();
    // shift the only verb offset by one byte
    let broken = index
        .lines()
        .map(|line| match line.rsplit_once(' ') {
            Some((head, offset)) if !line.starts_with(' ') => {
                let shifted: usize = offset.parse::<usize>().unwrap() + 1;
                format!("{head} {shifted:08}")
            }
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(dir.path().join("index.verb"), broken).unwrap();

    let db = WordNetDb::open(dir.path()).unwrap();
    assert!(matches!(db.synsets("chase"), Err(semtree_core::Error::Lexicon(_))));
}
