//! Frequency-ranked autocomplete.
//!
//! Every word strictly below the prefix node is a candidate. The candidate
//! with the highest frequency wins; ties go to the lexicographically
//! smallest completion. The whole subtree is always enumerated.

use super::alphabet::char_for;
use super::node::NodeIndex;
use super::HuaTrie;

/// The best completion of a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Characters to append to the prefix to form the word.
    pub suffix: String,
    /// How many times the completed word was inserted.
    pub frequency: u32,
}

impl Completion {
    fn outranks(&self, frequency: u32, suffix: &str) -> bool {
        frequency > self.frequency || (frequency == self.frequency && suffix < self.suffix.as_str())
    }
}

impl HuaTrie {
    /// Returns the suffix completing `prefix` into the best-ranked word.
    ///
    /// Returns an empty string when `prefix` contains a character outside
    /// the alphabet, when no word starts with it, or when no word extends
    /// it beyond itself.
    pub fn autocomplete(&self, prefix: &str) -> String {
        self.best_completion(prefix)
            .map(|completion| completion.suffix)
            .unwrap_or_default()
    }

    /// Returns the best-ranked completion of `prefix` along with its frequency.
    ///
    /// The prefix node itself does not need to be a word and is never a
    /// candidate.
    pub fn best_completion(&self, prefix: &str) -> Option<Completion> {
        let start = self.walk(prefix)?;

        let mut best: Option<Completion> = None;
        let mut path = String::new();
        // (node, depth below the prefix node, edge label)
        let mut stack: Vec<(NodeIndex, usize, char)> = Vec::new();
        self.push_children(start, 1, &mut stack);

        while let Some((index, depth, ch)) = stack.pop() {
            // Alphabet is ASCII, so byte length equals depth.
            path.truncate(depth - 1);
            path.push(ch);

            let node = &self.nodes[index as usize];
            if node.is_terminal {
                let better = best
                    .as_ref()
                    .map_or(true, |current| current.outranks(node.frequency, &path));
                if better {
                    best = Some(Completion {
                        suffix: path.clone(),
                        frequency: node.frequency,
                    });
                }
            }

            self.push_children(index, depth + 1, &mut stack);
        }

        best
    }

    fn push_children(&self, index: NodeIndex, depth: usize, stack: &mut Vec<(NodeIndex, usize, char)>) {
        // Reversed so slots pop in alphabet order.
        stack.extend(
            self.nodes[index as usize]
                .occupied()
                .rev()
                .map(|(slot, child)| (child, depth, char_for(slot))),
        );
    }
}
