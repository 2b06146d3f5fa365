//! Hua Trie Implementation
//!
//! This module provides a frequency-counting prefix dictionary built on a
//! fixed-branching character trie. Words are made of Latin letters (case is
//! folded) and apostrophes. Every insertion of a word bumps its frequency,
//! which drives the ranking used by autocomplete.
//!
//! # Example
//!
//! ```
//! use hua_dict_lib::data_structures::hua_trie::HuaTrie;
//!
//! let mut trie = HuaTrie::new();
//! assert!(trie.insert("computer"));
//! assert!(!trie.insert("computer"));
//! assert!(trie.insert("compute"));
//!
//! assert!(trie.lookup("COMPUTER").is_some());
//! assert_eq!(trie.autocomplete("comp"), "uter");
//! assert_eq!(trie.distance(trie.lookup("computer"), trie.lookup("compute")), 1);
//! ```
//!
//! # Layout
//!
//! All nodes live in one arena owned by the trie. Children and parents are
//! stored as arena indices, so the upward link never owns anything and the
//! whole graph is released at once when the arena is dropped.

mod alphabet;
mod autocomplete;
mod distance;
mod error;
mod node;
mod shared;
mod stats;

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

pub use alphabet::{char_for, slot_for, ALPHABET_SIZE, APOSTROPHE_SLOT};
pub use autocomplete::Completion;
pub use error::HuaTrieError;
pub use node::{NodeId, NodeView};
pub use shared::SharedHuaTrie;
pub use stats::DictionaryStats;

use node::{NodeIndex, TrieNode};

/// Result type for Hua Trie operations
pub type HuaTrieResult<T> = Result<T, HuaTrieError>;

/// Configuration options for the Hua Trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuaTrieConfig {
    /// Longest word accepted by insertion, `None` for no limit
    pub max_word_length: Option<usize>,
}

/// Result of inserting a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The word was not present before and now has frequency 1.
    Added,
    /// The word was already present; its frequency was incremented.
    Duplicate,
    /// The word was rejected and its frequency is unchanged.
    Invalid,
}

impl InsertOutcome {
    /// Returns `true` only for [`InsertOutcome::Added`].
    pub fn is_added(self) -> bool {
        matches!(self, InsertOutcome::Added)
    }
}

impl From<InsertOutcome> for bool {
    fn from(outcome: InsertOutcome) -> Self {
        outcome.is_added()
    }
}

/// Hua Trie is a prefix dictionary counting how often each word was inserted.
///
/// Key features:
/// * Case-insensitive insertion and lookup
/// * Aggregate statistics over any subtree
/// * Tree distance between two entries via their nearest common ancestor
/// * Frequency-ranked autocomplete
///
/// The trie is single-threaded; wrap it in a [`SharedHuaTrie`] to share it
/// between threads.
#[derive(Debug, Clone)]
pub struct HuaTrie {
    /// Node arena; the root is always at index 0 while it exists
    nodes: Vec<TrieNode>,

    /// Root index, `None` once the trie has been destroyed
    root: Option<NodeIndex>,

    /// Renewed on every teardown so stale handles stop resolving
    epoch: u64,

    /// Configuration options
    config: HuaTrieConfig,
}

impl HuaTrie {
    /// Creates a new empty `HuaTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// A new `HuaTrie` holding only a root node.
    pub fn new() -> Self {
        Self::with_config(HuaTrieConfig::default())
    }

    /// Creates a new empty `HuaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: HuaTrieConfig) -> Self {
        Self {
            nodes: vec![TrieNode::new(None)],
            root: Some(0),
            epoch: next_epoch(),
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &HuaTrieConfig {
        &self.config
    }

    /// Returns a handle to the root, or `None` once the trie is destroyed.
    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|index| self.handle(index))
    }

    /// Returns `true` after [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a snapshot of the node behind `id`, if it still exists.
    pub fn node(&self, id: NodeId) -> Option<NodeView> {
        let index = self.resolve(id)?;
        let node = &self.nodes[index as usize];
        Some(NodeView {
            is_terminal: node.is_terminal,
            frequency: node.frequency,
            depth: self.depth_of(index),
            parent: node.parent.map(|p| self.handle(p)),
        })
    }

    /// Inserts a word, reporting why it was rejected if it was.
    ///
    /// Nodes created for the valid characters before an invalid one remain
    /// in the trie as non-terminal prefix nodes.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(InsertOutcome::Added)` - The word is new.
    /// * `Ok(InsertOutcome::Duplicate)` - The word existed; its frequency was incremented.
    /// * `Err(HuaTrieError)` - The word was rejected.
    ///
    /// Rejections always come back as errors, never as
    /// `Ok(InsertOutcome::Invalid)`.
    pub fn try_insert(&mut self, word: &str) -> HuaTrieResult<InsertOutcome> {
        let root = self.root.ok_or(HuaTrieError::Destroyed)?;
        if word.is_empty() {
            return Err(HuaTrieError::EmptyWord);
        }

        if let Some(max) = self.config.max_word_length {
            let len = word.chars().count();
            if len > max {
                return Err(HuaTrieError::WordTooLong { len, max });
            }
        }

        let mut current = root;
        for (position, ch) in word.chars().enumerate() {
            let slot = slot_for(ch).ok_or(HuaTrieError::InvalidCharacter { ch, position })?;
            let next = self.nodes[current as usize].children[slot];
            current = match next {
                Some(child) => child,
                None => self.alloc_child(current, slot)?,
            };
        }

        let node = &mut self.nodes[current as usize];
        if node.is_terminal {
            node.frequency = node.frequency.saturating_add(1);
            Ok(InsertOutcome::Duplicate)
        } else {
            node.is_terminal = true;
            node.frequency = 1;
            Ok(InsertOutcome::Added)
        }
    }

    /// Inserts a word and returns the three-way outcome.
    pub fn insert_word(&mut self, word: &str) -> InsertOutcome {
        match self.try_insert(word) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(word, error = %e, "Rejected word");
                InsertOutcome::Invalid
            }
        }
    }

    /// Inserts a word.
    ///
    /// # Returns
    ///
    /// `true` if the word was newly added. `false` both when the word was
    /// already present (its frequency is still incremented) and when it was
    /// rejected; use [`insert_word`](Self::insert_word) to tell them apart.
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_word(word).is_added()
    }

    /// Looks up a complete word.
    ///
    /// Creates nothing. Returns `None` for words containing characters
    /// outside the alphabet, for missing paths, and for paths that are only
    /// a prefix of some other word.
    pub fn lookup(&self, word: &str) -> Option<NodeId> {
        let index = self.walk(word)?;
        self.nodes[index as usize]
            .is_terminal
            .then(|| self.handle(index))
    }

    /// Checks if a word exists in the trie.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Returns how many times `word` was inserted, 0 if it never was.
    pub fn frequency(&self, word: &str) -> u32 {
        self.walk(word)
            .map(|index| self.nodes[index as usize].frequency)
            .unwrap_or(0)
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        match self.root {
            Some(root) => {
                let root = &self.nodes[root as usize];
                root.occupied().next().is_none() && !root.is_terminal
            }
            None => true,
        }
    }

    /// Releases every node. Afterwards the root is absent, all queries
    /// report an empty dictionary and insertions fail with
    /// [`HuaTrieError::Destroyed`].
    pub fn destroy(&mut self) {
        debug!(nodes = self.nodes.len(), "Destroying dictionary");
        self.nodes = Vec::new();
        self.root = None;
        self.epoch = next_epoch();
    }

    /// Clears all entries, leaving a fresh empty root.
    pub fn clear(&mut self) {
        self.nodes = vec![TrieNode::new(None)];
        self.root = Some(0);
        self.epoch = next_epoch();
    }

    /// Walks the path spelled by `word` without creating nodes.
    pub(crate) fn walk(&self, word: &str) -> Option<NodeIndex> {
        word.chars().try_fold(self.root?, |current, ch| {
            self.nodes[current as usize].children[slot_for(ch)?]
        })
    }

    /// Resolves a handle to an arena index if it belongs to the live arena.
    pub(crate) fn resolve(&self, id: NodeId) -> Option<NodeIndex> {
        (id.epoch == self.epoch && (id.index as usize) < self.nodes.len()).then_some(id.index)
    }

    pub(crate) fn handle(&self, index: NodeIndex) -> NodeId {
        NodeId {
            index,
            epoch: self.epoch,
        }
    }

    fn alloc_child(&mut self, parent: NodeIndex, slot: usize) -> HuaTrieResult<NodeIndex> {
        let len = self.nodes.len();
        let index =
            NodeIndex::try_from(len).map_err(|_| HuaTrieError::CapacityExhausted(len))?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| HuaTrieError::CapacityExhausted(len))?;
        self.nodes.push(TrieNode::new(Some(parent)));
        self.nodes[parent as usize].children[slot] = Some(index);
        Ok(index)
    }
}

/// Epochs are unique across every trie in the process, so a handle never
/// resolves in a trie other than the one that issued it.
fn next_epoch() -> u64 {
    static NEXT_EPOCH: AtomicU64 = AtomicU64::new(0);
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

impl Default for HuaTrie {
    fn default() -> Self {
        Self::new()
    }
}
