//! Data structures for Hua Dict.
//!
//! This module contains the dictionary engine and its thread-safe wrapper.

pub mod hua_trie;

// Re-export common data structures
pub use hua_trie::{HuaTrie, HuaTrieError, HuaTrieResult, InsertOutcome, SharedHuaTrie};
