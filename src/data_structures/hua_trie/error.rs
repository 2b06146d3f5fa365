//! Error types for the Hua Trie.
//!
//! This module defines the reasons an insertion into the trie can be rejected.

/// Errors that can occur in Hua Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum HuaTrieError {
    /// Error when an empty word is provided.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word contains a character outside the dictionary alphabet.
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Character offset of the offending character within the word.
        position: usize,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word of length {len} exceeds maximum word length of {max}")]
    WordTooLong {
        /// Length of the rejected word in characters.
        len: usize,
        /// The maximum allowed length.
        max: usize,
    },

    /// Error when the trie has been torn down with `destroy`.
    #[error("Dictionary has been destroyed")]
    Destroyed,

    /// Error when no further node can be allocated.
    #[error("Node arena exhausted after {0} nodes")]
    CapacityExhausted(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuaTrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = HuaTrieError::InvalidCharacter { ch: '1', position: 5 };
        assert_eq!(err.to_string(), "Invalid character '1' at position 5");

        let err = HuaTrieError::WordTooLong { len: 12, max: 10 };
        assert_eq!(
            err.to_string(),
            "Word of length 12 exceeds maximum word length of 10"
        );

        let err = HuaTrieError::Destroyed;
        assert_eq!(err.to_string(), "Dictionary has been destroyed");
    }
}
