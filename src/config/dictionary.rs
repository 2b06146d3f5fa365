//! Dictionary configuration module.
//!
//! This module defines how the dictionary is built: where its word list
//! lives, how long a word may be, and how rejected words are treated while
//! loading.

use super::{ConfigResult, Validate};
use crate::data_structures::hua_trie::HuaTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Word list loaded when no list is given on the command line
    pub word_list: Option<PathBuf>,

    /// Longest accepted word in characters (None for no limit)
    pub max_word_length: Option<usize>,

    /// Whether rejected words are skipped (true) or abort the load (false)
    pub skip_invalid: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            max_word_length: None,
            skip_invalid: true,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.word_list {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "word_list must not be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl From<&DictionaryConfig> for HuaTrieConfig {
    fn from(config: &DictionaryConfig) -> Self {
        Self {
            max_word_length: config.max_word_length,
        }
    }
}
