//! Tree distance between two trie nodes.

use super::node::NodeIndex;
use super::{HuaTrie, NodeId};

impl HuaTrie {
    /// Returns the number of edges on the path between two nodes.
    ///
    /// The path goes through the nearest common ancestor of the two nodes.
    /// If either node is absent (or stale) the result is 0, which is also the
    /// distance between a node and itself. Use
    /// [`word_distance`](Self::word_distance) to tell the two apart.
    pub fn distance(&self, a: Option<NodeId>, b: Option<NodeId>) -> u32 {
        self.meet(a, b).map_or(0, |(_, distance)| distance)
    }

    /// Returns the nearest common ancestor of two nodes.
    pub fn common_ancestor(&self, a: Option<NodeId>, b: Option<NodeId>) -> Option<NodeId> {
        self.meet(a, b).map(|(ancestor, _)| self.handle(ancestor))
    }

    /// Returns the distance between two inserted words, or `None` if either
    /// word is not in the dictionary.
    pub fn word_distance(&self, a: &str, b: &str) -> Option<u32> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        Some(self.distance(Some(a), Some(b)))
    }

    /// Number of edges between `index` and the root.
    pub(crate) fn depth_of(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = self.nodes[index as usize].parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent as usize].parent;
        }
        depth
    }

    /// Climbs both nodes to their nearest common ancestor, returning it
    /// together with the number of edges climbed.
    fn meet(&self, a: Option<NodeId>, b: Option<NodeId>) -> Option<(NodeIndex, u32)> {
        let mut a = self.resolve(a?)?;
        let mut b = self.resolve(b?)?;

        let mut depth_a = self.depth_of(a);
        let mut depth_b = self.depth_of(b);
        let mut distance = 0u32;

        while depth_a > depth_b {
            a = self.nodes[a as usize].parent?;
            depth_a -= 1;
            distance += 1;
        }
        while depth_b > depth_a {
            b = self.nodes[b as usize].parent?;
            depth_b -= 1;
            distance += 1;
        }

        // Equal depths: both reach the root together at the latest.
        while a != b {
            a = self.nodes[a as usize].parent?;
            b = self.nodes[b as usize].parent?;
            distance += 2;
        }

        Some((a, distance))
    }
}
