//! Thread-safe handle around a [`HuaTrie`].
//!
//! The trie itself makes no concurrency promises. `SharedHuaTrie` adds a
//! single reader-writer lock: insertions and teardown take the write lock,
//! every query takes the read lock.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{
    Completion, DictionaryStats, HuaTrie, HuaTrieConfig, HuaTrieResult, InsertOutcome, NodeId,
};

/// A cloneable, lock-protected dictionary shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedHuaTrie {
    inner: Arc<RwLock<HuaTrie>>,
}

impl SharedHuaTrie {
    /// Creates an empty shared dictionary with default configuration.
    pub fn new() -> Self {
        Self::from_trie(HuaTrie::new())
    }

    /// Creates an empty shared dictionary with the given configuration.
    pub fn with_config(config: HuaTrieConfig) -> Self {
        Self::from_trie(HuaTrie::with_config(config))
    }

    /// Wraps an existing dictionary.
    pub fn from_trie(trie: HuaTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts a word; see [`HuaTrie::insert`].
    pub fn insert(&self, word: &str) -> bool {
        self.inner.write().insert(word)
    }

    /// Inserts a word; see [`HuaTrie::insert_word`].
    pub fn insert_word(&self, word: &str) -> InsertOutcome {
        self.inner.write().insert_word(word)
    }

    /// Inserts a word; see [`HuaTrie::try_insert`].
    pub fn try_insert(&self, word: &str) -> HuaTrieResult<InsertOutcome> {
        self.inner.write().try_insert(word)
    }

    /// Looks up a word; see [`HuaTrie::lookup`].
    ///
    /// The returned handle stays meaningful until the dictionary is
    /// destroyed or cleared.
    pub fn lookup(&self, word: &str) -> Option<NodeId> {
        self.inner.read().lookup(word)
    }

    /// Checks if a word exists.
    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    /// Returns the frequency of a word.
    pub fn frequency(&self, word: &str) -> u32 {
        self.inner.read().frequency(word)
    }

    /// Distance between two nodes; see [`HuaTrie::distance`].
    pub fn distance(&self, a: Option<NodeId>, b: Option<NodeId>) -> u32 {
        self.inner.read().distance(a, b)
    }

    /// Distance between two words; see [`HuaTrie::word_distance`].
    pub fn word_distance(&self, a: &str, b: &str) -> Option<u32> {
        self.inner.read().word_distance(a, b)
    }

    /// Best completion suffix; see [`HuaTrie::autocomplete`].
    pub fn autocomplete(&self, prefix: &str) -> String {
        self.inner.read().autocomplete(prefix)
    }

    /// Best completion with frequency; see [`HuaTrie::best_completion`].
    pub fn best_completion(&self, prefix: &str) -> Option<Completion> {
        self.inner.read().best_completion(prefix)
    }

    /// Whole-dictionary statistics.
    pub fn stats(&self) -> DictionaryStats {
        self.inner.read().stats()
    }

    /// Releases every node; see [`HuaTrie::destroy`].
    pub fn destroy(&self) {
        self.inner.write().destroy();
    }

    /// Runs `f` with shared access to the underlying dictionary.
    pub fn with_read<R>(&self, f: impl FnOnce(&HuaTrie) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` with exclusive access to the underlying dictionary.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut HuaTrie) -> R) -> R {
        f(&mut self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;

    /// Concurrent writers inserting overlapping words must agree on the
    /// final frequencies.
    #[test]
    fn test_shared_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;

        let trie = SharedHuaTrie::new();
        let barrier = Arc::new(Barrier::new(THREAD_COUNT));

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|thread_id| {
                let trie = trie.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for j in 0..OPS_PER_THREAD {
                        // letters only: thread-specific word plus a shared one
                        let word = format!("w{}x{}", letter(thread_id), letter(j));
                        assert!(trie.insert(&word));
                        trie.insert("shared");
                        let _ = trie.autocomplete("w");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trie.frequency("shared"), (THREAD_COUNT * OPS_PER_THREAD) as u32);
        let stats = trie.stats();
        assert_eq!(stats.distinct_words, THREAD_COUNT * OPS_PER_THREAD + 1);
        assert_eq!(stats.total_words, 2 * (THREAD_COUNT * OPS_PER_THREAD) as u64);
        assert_eq!(trie.autocomplete("sha"), "red");
    }

    fn letter(n: usize) -> String {
        // base-26 spelling so every index maps to a distinct letter string
        let mut n = n;
        let mut out = String::new();
        loop {
            out.push((b'a' + (n % 26) as u8) as char);
            n /= 26;
            if n == 0 {
                break;
            }
        }
        out
    }

    #[test]
    fn test_destroy_through_handle() {
        let trie = SharedHuaTrie::new();
        trie.insert("alpha");
        let other = trie.clone();
        other.destroy();
        assert_eq!(trie.stats(), DictionaryStats::default());
        assert!(!trie.insert("alpha"));
        assert!(trie.with_read(|t| t.is_destroyed()));
    }

    #[test]
    fn test_handles_across_lock() {
        let trie = SharedHuaTrie::new();
        trie.insert("computer");
        trie.insert("compute");
        let a = trie.lookup("computer");
        let b = trie.lookup("compute");
        assert_eq!(trie.distance(a, b), 1);
        assert_eq!(trie.word_distance("computer", "compute"), Some(1));
        trie.with_write(|t| t.clear());
        assert_eq!(trie.distance(a, b), 0);
    }
}
