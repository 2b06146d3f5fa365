//! Aggregate statistics over a subtree.
//!
//! All traversals use an explicit stack, so very long words cannot exhaust
//! the call stack.

use serde::Serialize;

use super::node::{NodeIndex, TrieNode};
use super::{HuaTrie, NodeId};

/// Whole-dictionary summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    /// Number of nodes, including the root.
    pub nodes: usize,
    /// Number of distinct words.
    pub distinct_words: usize,
    /// Number of word occurrences, counting duplicates.
    pub total_words: u64,
    /// Highest frequency of a single word.
    pub most_common: u32,
}

impl HuaTrie {
    /// Counts the nodes in the subtree rooted at `root`, itself included.
    ///
    /// Returns 0 for an absent or stale root.
    pub fn node_count(&self, root: Option<NodeId>) -> usize {
        let mut count = 0;
        self.for_each_in_subtree(root, |_| count += 1);
        count
    }

    /// Sums the frequencies of every word in the subtree rooted at `root`.
    pub fn word_count(&self, root: Option<NodeId>) -> u64 {
        let mut count = 0;
        self.for_each_in_subtree(root, |node| count += u64::from(node.frequency));
        count
    }

    /// Returns the highest frequency of any word in the subtree rooted at
    /// `root`, 0 if it holds no words.
    pub fn most_common_frequency(&self, root: Option<NodeId>) -> u32 {
        let mut highest = 0u32;
        self.for_each_in_subtree(root, |node| highest = highest.max(node.frequency));
        highest
    }

    /// Counts the distinct words in the subtree rooted at `root`.
    pub fn distinct_word_count(&self, root: Option<NodeId>) -> usize {
        let mut count = 0;
        self.for_each_in_subtree(root, |node| {
            if node.is_terminal {
                count += 1;
            }
        });
        count
    }

    /// Total number of nodes in the dictionary, 0 once destroyed.
    pub fn total_nodes(&self) -> usize {
        self.node_count(self.root())
    }

    /// Total number of word occurrences in the dictionary.
    pub fn total_words(&self) -> u64 {
        self.word_count(self.root())
    }

    /// Number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.distinct_word_count(self.root())
    }

    /// Highest single-word frequency in the dictionary.
    pub fn most_common(&self) -> u32 {
        self.most_common_frequency(self.root())
    }

    /// Collects every statistic in a single pass.
    pub fn stats(&self) -> DictionaryStats {
        let mut stats = DictionaryStats::default();
        self.for_each_in_subtree(self.root(), |node| {
            stats.nodes += 1;
            if node.is_terminal {
                stats.distinct_words += 1;
                stats.total_words += u64::from(node.frequency);
                stats.most_common = stats.most_common.max(node.frequency);
            }
        });
        stats
    }

    fn for_each_in_subtree<F>(&self, root: Option<NodeId>, mut visit: F)
    where
        F: FnMut(&TrieNode),
    {
        let Some(start) = root.and_then(|id| self.resolve(id)) else {
            return;
        };

        let mut stack: Vec<NodeIndex> = vec![start];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index as usize];
            visit(node);
            stack.extend(node.occupied().map(|(_, child)| child));
        }
    }
}
