//! Strategy-aware front door over the trie, plus dictionary loading.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::string_strategy::StringStrategy;
use crate::trie::Trie;

/// A spell checker that runs every word through a [`StringStrategy`] before
/// handing it to the trie.
pub struct SpellChecker<T: StringStrategy> {
    trie: Trie,
    word_count: usize,
    string_strategy: T,
}

impl<T: StringStrategy> SpellChecker<T> {
    pub fn new() -> Self {
        SpellChecker {
            trie: Trie::new(),
            word_count: 0,
            string_strategy: T::new(),
        }
    }

    /// Add one dictionary entry.
    pub fn insert(&mut self, word: &str) {
        let prepared = self.string_strategy.prepare(word);
        self.trie.insert(&prepared);
        self.word_count += 1;
    }

    /// Whether the exact word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&self.string_strategy.prepare(word))
    }

    /// Spelling suggestions for a word; see [`Trie::correct`].
    pub fn correct(&self, word: &str) -> BTreeSet<String> {
        self.trie.correct(&self.string_strategy.prepare(word))
    }

    /// Load a word list with one entry per line, skipping blank lines.
    /// Returns the number of entries read.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut loaded = 0;

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            self.insert(word);
            loaded += 1;
            if loaded % 10_000 == 0 {
                debug!("load progress: {loaded} words");
            }
        }

        debug!(
            "loaded {loaded} words into {} nodes",
            self.trie.node_count()
        );
        Ok(loaded)
    }

    /// Number of entries inserted so far, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of trie nodes allocated so far.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}

impl<T: StringStrategy> Default for SpellChecker<T> {
    fn default() -> Self {
        Self::new()
    }
}
