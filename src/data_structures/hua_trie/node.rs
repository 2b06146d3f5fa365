//! Node implementation for the Hua Trie.
//!
//! Nodes live in the trie's arena and refer to each other by arena index.
//! Children are owned through the arena; the parent index is a plain
//! back-reference used only for walking upwards.

use super::alphabet::ALPHABET_SIZE;

/// Index of a node inside the arena.
pub(crate) type NodeIndex = u32;

/// Handle to a node of a particular [`HuaTrie`](super::HuaTrie).
///
/// Handles carry the epoch of the arena that issued them. They resolve to
/// nothing in any other trie, and in their own trie once it is destroyed or
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: NodeIndex,
    pub(crate) epoch: u64,
}

/// A node in the Hua Trie.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    /// One slot per alphabet symbol
    pub children: [Option<NodeIndex>; ALPHABET_SIZE],

    /// Node one edge closer to the root, `None` for the root
    pub parent: Option<NodeIndex>,

    /// Whether the path to this node spells an inserted word
    pub is_terminal: bool,

    /// Number of times the word ending here was inserted
    pub frequency: u32,
}

impl TrieNode {
    /// Creates a new non-terminal node hanging off `parent`.
    pub fn new(parent: Option<NodeIndex>) -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            parent,
            is_terminal: false,
            frequency: 0,
        }
    }

    /// Iterates over `(slot, child)` for every occupied slot in slot order.
    pub fn occupied(&self) -> impl DoubleEndedIterator<Item = (usize, NodeIndex)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(slot, child)| child.map(|c| (slot, c)))
    }
}

/// Read-only snapshot of a node, returned by [`HuaTrie::node`](super::HuaTrie::node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeView {
    /// Whether a complete word ends at this node.
    pub is_terminal: bool,
    /// Insertion count of that word, 0 when not terminal.
    pub frequency: u32,
    /// Number of edges between this node and the root.
    pub depth: usize,
    /// The parent node, `None` for the root.
    pub parent: Option<NodeId>,
}
