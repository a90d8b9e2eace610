//! Trie-backed prefix dictionary
//!
//! Nodes live in a flat arena and refer to children by index. Keys are
//! folded to lower case on both insert and query.

use super::{PrefixOracle, PrefixStatus};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, usize>,
    terminal: bool,
}

/// Prefix tree of dictionary words
#[derive(Debug, Clone)]
pub struct TrieDictionary {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for TrieDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieDictionary {
    const ROOT: usize = 0;

    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Add a word, ignoring surrounding whitespace
    ///
    /// Returns `false` if the word was empty or already present.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::{PrefixOracle, PrefixStatus, TrieDictionary};
    ///
    /// let mut dict = TrieDictionary::new();
    /// assert!(dict.insert("Care"));
    /// assert!(!dict.insert("care"));
    ///
    /// assert_eq!(dict.query("CAR"), PrefixStatus::PrefixOnly);
    /// assert_eq!(dict.query("care"), PrefixStatus::WordOnly);
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }

        let mut current = Self::ROOT;
        for ch in word.chars().flat_map(char::to_lowercase) {
            current = match self.nodes[current].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.word_count += 1;
        true
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Walk the trie along `candidate`
    fn find(&self, candidate: &str) -> Option<&TrieNode> {
        candidate
            .chars()
            .flat_map(char::to_lowercase)
            .try_fold(&self.nodes[Self::ROOT], |node, ch| {
                node.children.get(&ch).map(|&next| &self.nodes[next])
            })
    }
}

impl PrefixOracle for TrieDictionary {
    fn query(&self, candidate: &str) -> PrefixStatus {
        self.find(candidate).map_or(PrefixStatus::None, |node| {
            PrefixStatus::from_flags(node.terminal, !node.children.is_empty())
        })
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Self::new();
        for word in iter {
            dict.insert(word.as_ref());
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TrieDictionary {
        ["cat", "car", "care", "dog"].into_iter().collect()
    }

    #[test]
    fn query_classifies_all_statuses() {
        let dict = sample();
        assert_eq!(dict.query("ca"), PrefixStatus::PrefixOnly);
        assert_eq!(dict.query("cat"), PrefixStatus::WordOnly);
        assert_eq!(dict.query("car"), PrefixStatus::WordAndPrefix);
        assert_eq!(dict.query("care"), PrefixStatus::WordOnly);
        assert_eq!(dict.query("cab"), PrefixStatus::None);
        assert_eq!(dict.query("cares"), PrefixStatus::None);
    }

    #[test]
    fn query_is_case_insensitive() {
        let dict = sample();
        assert_eq!(dict.query("CAR"), PrefixStatus::WordAndPrefix);
        assert_eq!(dict.query("DoG"), PrefixStatus::WordOnly);
    }

    #[test]
    fn empty_candidate_is_prefix_of_everything() {
        assert_eq!(sample().query(""), PrefixStatus::PrefixOnly);
        assert_eq!(TrieDictionary::new().query(""), PrefixStatus::None);
    }

    #[test]
    fn insert_counts_distinct_words() {
        let mut dict = TrieDictionary::new();
        assert!(dict.is_empty());
        assert!(dict.insert("tree"));
        assert!(dict.insert("tre"));
        assert!(!dict.insert("TREE"));
        assert!(!dict.insert("   "));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn insert_trims_whitespace() {
        let mut dict = TrieDictionary::new();
        dict.insert("  oak\r");
        assert_eq!(dict.query("oak"), PrefixStatus::WordOnly);
    }

    #[test]
    fn contains_word_via_reference() {
        let dict = sample();
        let oracle: &dyn PrefixOracle = &dict;
        assert!(oracle.contains_word("dog"));
        assert!(!oracle.contains_word("do"));

        fn lookup(oracle: impl PrefixOracle, word: &str) -> bool {
            oracle.contains_word(word)
        }
        assert!(lookup(&dict, "care"));
    }
}
