//! Acceptance checks for the Hua Trie, runnable as a standalone binary.
//!
//! Each check returns `true` on success; the binary exits non-zero if any
//! check fails.

use hua_dict_lib::config::LogConfig;
use hua_dict_lib::data_structures::hua_trie::{HuaTrie, InsertOutcome};
use hua_dict_lib::logging::init_logging;
use tracing::{error, info};

/// The reference insertion sequence with its node and word counts.
fn check_reference_scenario() -> bool {
    let mut trie = HuaTrie::new();

    let steps: [(&str, bool, usize, u64); 4] = [
        ("computer", true, 9, 1),
        ("computer", false, 9, 2),
        ("compute", true, 9, 3),
        ("CompuTer's", true, 11, 4),
    ];

    for (word, expected, nodes, words) in steps {
        let added = trie.insert(word);
        if added != expected || trie.total_nodes() != nodes || trie.total_words() != words {
            error!(
                word,
                added,
                nodes = trie.total_nodes(),
                words = trie.total_words(),
                "Unexpected state after insert"
            );
            return false;
        }
    }

    trie.frequency("computer") == 2
        && trie.autocomplete("comp") == "uter"
        && trie.autocomplete("comput") == "er"
        && trie.autocomplete("computer'") == "s"
}

/// Lookup folds case and requires a complete word.
fn check_lookup() -> bool {
    let mut trie = HuaTrie::new();
    trie.insert("CompuTer's");
    trie.lookup("computer's").is_some()
        && trie.lookup("CompuTer's").is_some()
        && trie.lookup("computer").is_none()
}

/// Words with characters outside the alphabet are rejected.
fn check_invalid_words() -> bool {
    let mut trie = HuaTrie::new();
    trie.insert("computer");
    let before = trie.stats();

    let outcome = trie.insert_word("compu123");
    outcome == InsertOutcome::Invalid
        && trie.lookup("compu123").is_none()
        && trie.total_words() == before.total_words
        && trie.total_nodes() == before.nodes
}

/// Distance between two entries.
fn check_distance() -> bool {
    let mut trie = HuaTrie::new();
    trie.insert("computer");
    trie.insert("compute");
    trie.distance(trie.lookup("computer"), trie.lookup("compute")) == 1
        && trie.distance(trie.lookup("computer"), None) == 0
}

/// Teardown leaves an empty dictionary.
fn check_destroy() -> bool {
    let mut trie = HuaTrie::new();
    trie.insert("computer");
    trie.destroy();
    trie.total_nodes() == 0 && trie.total_words() == 0 && trie.autocomplete("c").is_empty()
}

fn main() {
    if let Err(e) = init_logging(&LogConfig::default()) {
        eprintln!("{e}");
    }

    let checks: [(&str, fn() -> bool); 5] = [
        ("Reference scenario", check_reference_scenario),
        ("Case-insensitive lookup", check_lookup),
        ("Invalid words", check_invalid_words),
        ("Distance", check_distance),
        ("Destroy", check_destroy),
    ];

    let mut failed = 0;
    for (name, check) in checks {
        if check() {
            info!(check = name, "PASSED");
        } else {
            error!(check = name, "FAILED");
            failed += 1;
        }
    }

    info!(passed = checks.len() - failed, failed, "Self-test finished");
    if failed > 0 {
        std::process::exit(1);
    }
}
