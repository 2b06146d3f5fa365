//! Word-list loading.
//!
//! A word list is plain text with one word per line. Surrounding whitespace
//! is trimmed and blank lines are ignored. Every line counts as one
//! insertion, so repeated lines raise a word's frequency.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::hua_trie::{HuaTrie, HuaTrieConfig};
use crate::error::config::ConfigError;
use crate::error::{HuaError, HuaResult};

/// Summary of a word-list load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Words that were new to the dictionary.
    pub added: usize,
    /// Words that were already present.
    pub duplicates: usize,
    /// Lines that were rejected and skipped.
    pub rejected: usize,
}

/// Inserts every word read from `reader` into `trie`.
///
/// With `skip_invalid` set, rejected words are logged and counted. Otherwise
/// the first rejected word stops the load with [`HuaError::WordList`];
/// words inserted before it stay in the dictionary.
pub fn load_words<R: BufRead>(
    trie: &mut HuaTrie,
    reader: R,
    skip_invalid: bool,
) -> HuaResult<LoadReport> {
    let mut report = LoadReport::default();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match trie.try_insert(word) {
            Ok(outcome) if outcome.is_added() => report.added += 1,
            Ok(_) => report.duplicates += 1,
            Err(source) if skip_invalid => {
                warn!(line = n + 1, word, error = %source, "Skipping word");
                report.rejected += 1;
            }
            Err(source) => return Err(HuaError::WordList { line: n + 1, source }),
        }
    }

    debug!(?report, "Loaded word list");
    Ok(report)
}

/// Opens `path` and loads it into `trie`; see [`load_words`].
pub fn load_word_file<P: AsRef<Path>>(
    trie: &mut HuaTrie,
    path: P,
    skip_invalid: bool,
) -> HuaResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let report = load_words(trie, BufReader::new(file), skip_invalid)?;
    info!(
        path = %path.display(),
        added = report.added,
        duplicates = report.duplicates,
        rejected = report.rejected,
        "Word list loaded"
    );
    Ok(report)
}

/// Builds a dictionary as described by `config`, reading `path` or, if it
/// is `None`, the configured word list.
pub fn build_dictionary(
    config: &DictionaryConfig,
    path: Option<&Path>,
) -> HuaResult<(HuaTrie, LoadReport)> {
    let path = path
        .or(config.word_list.as_deref())
        .ok_or_else(|| ConfigError::MissingValue("dictionary.word_list".to_string()))?;

    let mut trie = HuaTrie::with_config(HuaTrieConfig::from(config));
    let report = load_word_file(&mut trie, path, config.skip_invalid)?;
    Ok((trie, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::hua_trie::HuaTrieError;
    use std::io::Cursor;

    #[test]
    fn test_load_counts_outcomes() {
        let input = "computer\ncomputer\n  compute  \n\ncompu123\nCompuTer's\n";
        let mut trie = HuaTrie::new();
        let report = load_words(&mut trie, Cursor::new(input), true).unwrap();

        assert_eq!(
            report,
            LoadReport {
                added: 3,
                duplicates: 1,
                rejected: 1,
            }
        );
        assert_eq!(trie.total_words(), 4);
        assert_eq!(trie.frequency("computer"), 2);
    }

    #[test]
    fn test_strict_load_stops_at_first_rejection() {
        let input = "alpha\nbe ta\ngamma\n";
        let mut trie = HuaTrie::new();
        let err = load_words(&mut trie, Cursor::new(input), false).unwrap_err();

        match err {
            HuaError::WordList { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, HuaTrieError::InvalidCharacter { ch: ' ', position: 2 });
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(trie.contains("alpha"));
        assert!(!trie.contains("gamma"));
    }

    #[test]
    fn test_load_word_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "one\ntwo\ntwo\n").unwrap();

        let mut trie = HuaTrie::new();
        let report = load_word_file(&mut trie, &path, true).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.duplicates, 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut trie = HuaTrie::new();
        let err = load_word_file(&mut trie, "/definitely/not/here.txt", true).unwrap_err();
        assert!(matches!(err, HuaError::Io(_)));
    }

    #[test]
    fn test_build_dictionary_uses_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "short\nmuchlonger\n").unwrap();

        let config = DictionaryConfig {
            word_list: Some(path),
            max_word_length: Some(5),
            skip_invalid: true,
        };
        let (trie, report) = build_dictionary(&config, None).unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(report.rejected, 1);
        assert!(trie.contains("short"));
        assert_eq!(trie.config().max_word_length, Some(5));
    }

    #[test]
    fn test_build_dictionary_without_word_list() {
        let err = build_dictionary(&DictionaryConfig::default(), None).unwrap_err();
        assert!(matches!(
            err,
            HuaError::Config(ConfigError::MissingValue(ref key)) if key == "dictionary.word_list"
        ));
    }
}
