//! The trie dictionary and its fuzzy correction search.

use std::collections::BTreeSet;

use crate::node::Node;

pub(crate) const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

pub(crate) fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Lowercase a word and drop everything outside the 26-letter alphabet.
/// Inserting `"don't"` and `"dont"` produces the same path.
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// An in-memory dictionary keyed by letter paths.
///
/// Built once by bulk insertion, then only read. There is no deletion; the
/// node count only grows, and inserting a word twice changes nothing.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
    node_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of non-root nodes allocated so far.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Add a word. Case is folded and non-alphabetic characters are skipped,
    /// so they consume no tree level. Every visited node keeps the normalized
    /// prefix spelled by its path, which is what correction results return.
    pub fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        let mut prefix = String::new();
        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            let c = c.to_ascii_lowercase();
            prefix.push(c);
            if current.child(c).is_none() {
                *current.child_slot(c) = Some(Box::new(Node::new()));
                self.node_count += 1;
            }
            current = current
                .child_slot(c)
                .as_deref_mut()
                .expect("child was just ensured");
            current.word = prefix.clone();
        }
        current.is_endpoint = true;
    }

    /// Exact lookup with the same case folding and skipping as `insert`.
    /// A word that is only a prefix of longer entries is reported absent.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = &self.root;
        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            match current.child(c) {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.is_endpoint
    }

    /// Spelling suggestions for a word.
    ///
    /// An exact match short-circuits to a singleton set. Otherwise the fuzzy
    /// traversal runs from the root and collects every dictionary word
    /// reachable under the known-error model: a vowel in the query may stand
    /// for any vowel, and a doubled letter in the query may collapse to a
    /// single one. Unmatched queries yield the empty set; `correct` never
    /// fails.
    pub fn correct(&self, word: &str) -> BTreeSet<String> {
        let query = normalize(word);
        let mut results = BTreeSet::new();
        if self.contains(&query) {
            results.insert(query);
            return results;
        }
        self.fuzzy_search(&query, &self.root, &mut results);
        results
    }

    /// Depth-first walk over the unconsumed query suffix and the current
    /// node. Every recursive call shortens the suffix by one or two
    /// characters, so depth is bounded by the query length.
    fn fuzzy_search(&self, suffix: &str, node: &Node, results: &mut BTreeSet<String>) {
        let Some(c) = suffix.chars().next() else {
            // Query consumed. An endpoint here is a hit, anything else is a
            // dead leaf of the search, not a failure.
            if node.is_endpoint {
                results.insert(node.word.clone());
            }
            return;
        };

        // The suffix is normalized ASCII, so byte slicing is in bounds.
        let rest = &suffix[1..];

        if let Some(child) = node.child(c) {
            self.fuzzy_search(rest, child, results);
            if rest.starts_with(c) {
                // The query doubled this letter; consume both against one
                // tree level.
                self.fuzzy_search(&suffix[2..], child, results);
            }
        }

        if is_vowel(c) {
            // A typed vowel may stand for any vowel that continues here,
            // whether or not the typed one does.
            for v in VOWELS {
                if let Some(vowel_child) = node.child(v) {
                    self.fuzzy_search(rest, vowel_child, results);
                }
            }
        }
        // A consonant with no matching child ends this path silently.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word);
        }
        trie
    }

    fn set_of(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn insert_then_contains() {
        let trie = trie_of(&["cat"]);
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("c"));
        assert!(!trie.contains("cats"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let trie = trie_of(&["CaT"]);
        assert!(trie.contains("cat"));
        assert!(trie.contains("CAT"));
    }

    #[test]
    fn prefix_without_endpoint_is_absent() {
        let trie = trie_of(&["cast"]);
        assert!(!trie.contains("cas"));
        assert!(trie.contains("cast"));
    }

    #[test]
    fn non_alphabetic_characters_consume_no_level() {
        let mut trie = trie_of(&["don't"]);
        assert!(trie.contains("dont"));
        assert!(trie.contains("don't"));

        let count = trie.node_count();
        trie.insert("dont");
        assert_eq!(trie.node_count(), count);
    }

    #[test]
    fn duplicate_insertion_allocates_nothing() {
        let mut trie = trie_of(&["cat"]);
        assert_eq!(trie.node_count(), 3);
        trie.insert("cat");
        assert_eq!(trie.node_count(), 3);
        trie.insert("cot");
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn correct_short_circuits_on_exact_match() {
        let trie = trie_of(&["receive", "recieve"]);
        assert!(trie.contains("receive"));
        assert!(trie.contains("recieve"));
        assert_eq!(trie.correct("recieve"), set_of(&["recieve"]));
    }

    #[test]
    fn correct_substitutes_vowels() {
        let trie = trie_of(&["cat", "cot", "cut", "cast"]);
        assert_eq!(trie.correct("cit"), set_of(&["cat", "cot", "cut"]));
    }

    #[test]
    fn correct_handles_missing_vowel_child() {
        // 'e' has no continuation under 'c' at all; the substitution still
        // runs over the vowels that do continue.
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.correct("cet"), set_of(&["cat"]));
    }

    #[test]
    fn correct_collapses_doubled_vowel() {
        let trie = trie_of(&["book"]);
        assert_eq!(trie.correct("boook"), set_of(&["book"]));
    }

    #[test]
    fn correct_collapses_doubled_consonant() {
        let trie = trie_of(&["book", "bet"]);
        assert_eq!(trie.correct("bookk"), set_of(&["book"]));
        assert_eq!(trie.correct("bett"), set_of(&["bet"]));
    }

    #[test]
    fn correct_does_not_restore_missing_duplicates() {
        // "bok" would need an inserted duplicate to reach "book"; that typo
        // direction is not part of the model.
        let trie = trie_of(&["book"]);
        assert_eq!(trie.correct("bok"), BTreeSet::new());
    }

    #[test]
    fn correct_unknown_word_yields_empty_set() {
        let trie = trie_of(&["cat"]);
        assert!(trie.correct("xyz").is_empty());
    }

    #[test]
    fn correct_empty_query_yields_empty_set() {
        let trie = trie_of(&["cat"]);
        assert!(trie.correct("").is_empty());
        assert!(trie.correct("123").is_empty());
    }

    #[test]
    fn correct_is_idempotent() {
        let trie = trie_of(&["cat", "cot", "cut"]);
        let first = trie.correct("cit");
        let second = trie.correct("cit");
        assert_eq!(first, second);
    }

    #[test]
    fn correct_query_is_case_insensitive() {
        let trie = trie_of(&["cat", "cot", "cut"]);
        assert_eq!(trie.correct("CIT"), set_of(&["cat", "cot", "cut"]));
    }

    #[test]
    fn results_use_normalized_words() {
        // Suggestions come from the stored per-node prefixes, which are
        // already lowercased and stripped.
        let trie = trie_of(&["CAT"]);
        assert_eq!(trie.correct("cit"), set_of(&["cat"]));
    }

    #[test]
    fn empty_trie_reports_nothing() {
        let trie = Trie::new();
        assert_eq!(trie.node_count(), 0);
        assert!(!trie.contains(""));
        assert!(!trie.contains("cat"));
        assert!(trie.correct("cat").is_empty());
    }
}
