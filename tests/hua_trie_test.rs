//! Integration tests for the Hua Trie through the public library API.

use std::io::Cursor;
use std::sync::{Arc, Barrier};
use std::thread;

use hua_dict_lib::config::dictionary::DictionaryConfig;
use hua_dict_lib::data_structures::hua_trie::{HuaTrie, HuaTrieError, InsertOutcome, SharedHuaTrie};
use hua_dict_lib::loader::{build_dictionary, load_words};

const WORD_LIST: &str = "\
the
the
the
then
there
there
they
these
don't
Don't
won't
theory
";

#[test]
fn test_word_list_dictionary() {
    let mut trie = HuaTrie::new();
    let report = load_words(&mut trie, Cursor::new(WORD_LIST), false).unwrap();

    assert_eq!(report.added, 8);
    assert_eq!(report.duplicates, 4);
    assert_eq!(report.rejected, 0);

    let stats = trie.stats();
    assert_eq!(stats.distinct_words, 8);
    assert_eq!(stats.total_words, 12);
    assert_eq!(stats.most_common, 3);

    // "the" itself is not a candidate below "the"; "re" (2) beats the rest
    assert_eq!(trie.autocomplete("the"), "re");
    assert_eq!(trie.autocomplete("th"), "e");
    assert_eq!(trie.autocomplete("do"), "n't");
    assert_eq!(trie.frequency("DON'T"), 2);

    assert_eq!(trie.word_distance("there", "these"), Some(4));
    assert_eq!(trie.word_distance("the", "theory"), Some(3));
    assert_eq!(trie.word_distance("the", "thy"), None);
}

#[test]
fn test_subtree_statistics() {
    let mut trie = HuaTrie::new();
    load_words(&mut trie, Cursor::new(WORD_LIST), false).unwrap();

    let the = trie.lookup("the");
    // the, then, there, they, these, theory
    assert_eq!(trie.word_count(the), 9);
    assert_eq!(trie.most_common_frequency(the), 3);
    assert_eq!(trie.most_common_frequency(trie.lookup("there")), 2);
    assert_eq!(trie.node_count(trie.lookup("then")), 1);
}

#[test]
fn test_rejections_are_distinguishable() {
    let mut trie = HuaTrie::new();
    assert!(trie.insert("word"));

    assert!(!trie.insert("word"));
    assert!(!trie.insert("w0rd"));
    assert_eq!(trie.insert_word("word"), InsertOutcome::Duplicate);
    assert_eq!(trie.insert_word("w0rd"), InsertOutcome::Invalid);
    assert_eq!(
        trie.try_insert("w0rd"),
        Err(HuaTrieError::InvalidCharacter { ch: '0', position: 1 })
    );
    assert_eq!(trie.frequency("word"), 3);
}

#[test]
fn test_build_from_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    std::fs::write(&path, WORD_LIST).unwrap();

    let config = DictionaryConfig {
        word_list: Some(path),
        ..DictionaryConfig::default()
    };
    let (trie, report) = build_dictionary(&config, None).unwrap();
    assert_eq!(report.added, 8);
    assert_eq!(trie.autocomplete("won"), "'t");
}

#[test]
fn test_shared_dictionary_readers_and_writers() {
    let trie = SharedHuaTrie::new();
    let barrier = Arc::new(Barrier::new(5));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let trie = trie.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..100 {
                trie.insert("popular");
                trie.insert("pop");
            }
        }));
    }

    let reader = trie.clone();
    let reader_barrier = Arc::clone(&barrier);
    let read_handle = thread::spawn(move || {
        reader_barrier.wait();
        for _ in 0..100 {
            let suggestion = reader.autocomplete("po");
            assert!(suggestion.is_empty() || suggestion == "p" || suggestion == "pular");
        }
    });

    for handle in handles {
        handle.join().unwrap();
    }
    read_handle.join().unwrap();

    assert_eq!(trie.frequency("popular"), 400);
    assert_eq!(trie.frequency("pop"), 400);
    // equal frequency: "p" < "pular"
    assert_eq!(trie.autocomplete("po"), "p");
}

#[test]
fn test_destroy_releases_everything() {
    let mut trie = HuaTrie::new();
    load_words(&mut trie, Cursor::new(WORD_LIST), false).unwrap();
    let handle = trie.lookup("there");

    trie.destroy();

    assert_eq!(trie.total_nodes(), 0);
    assert_eq!(trie.total_words(), 0);
    assert_eq!(trie.most_common(), 0);
    assert_eq!(trie.node_count(handle), 0);
    assert!(trie.lookup("there").is_none());
    assert_eq!(trie.autocomplete("th"), "");
    assert_eq!(trie.try_insert("there"), Err(HuaTrieError::Destroyed));
}
