//! Prefix dictionaries
//!
//! The search engine consults a dictionary only through [`PrefixOracle`],
//! which classifies a candidate string as absent, a prefix, a word, or both.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use trie::TrieDictionary;

/// Classification of a candidate string against a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixStatus {
    /// Neither a word nor the prefix of any word
    None,
    /// Proper prefix of at least one word, but not a word itself
    PrefixOnly,
    /// A word that is not the prefix of any longer word
    WordOnly,
    /// A word that is also the prefix of a longer word
    WordAndPrefix,
}

impl PrefixStatus {
    #[inline]
    #[must_use]
    pub const fn from_flags(is_word: bool, is_prefix: bool) -> Self {
        match (is_word, is_prefix) {
            (false, false) => Self::None,
            (false, true) => Self::PrefixOnly,
            (true, false) => Self::WordOnly,
            (true, true) => Self::WordAndPrefix,
        }
    }

    /// True for `WordOnly` and `WordAndPrefix`
    #[inline]
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::WordOnly | Self::WordAndPrefix)
    }

    /// True for `PrefixOnly` and `WordAndPrefix`
    #[inline]
    #[must_use]
    pub const fn is_prefix(self) -> bool {
        matches!(self, Self::PrefixOnly | Self::WordAndPrefix)
    }
}

/// Dictionary lookup used to prune searches
///
/// Implementations must be case-insensitive and should answer in
/// O(candidate length).
pub trait PrefixOracle {
    /// Classify `candidate` against the dictionary
    fn query(&self, candidate: &str) -> PrefixStatus;

    /// True if `word` is a complete dictionary word
    fn contains_word(&self, word: &str) -> bool {
        self.query(word).is_word()
    }
}

impl<T: PrefixOracle + ?Sized> PrefixOracle for &T {
    fn query(&self, candidate: &str) -> PrefixStatus {
        (**self).query(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_all_four_statuses() {
        assert_eq!(PrefixStatus::from_flags(false, false), PrefixStatus::None);
        assert_eq!(
            PrefixStatus::from_flags(false, true),
            PrefixStatus::PrefixOnly
        );
        assert_eq!(PrefixStatus::from_flags(true, false), PrefixStatus::WordOnly);
        assert_eq!(
            PrefixStatus::from_flags(true, true),
            PrefixStatus::WordAndPrefix
        );
    }

    #[test]
    fn word_and_prefix_predicates() {
        assert!(!PrefixStatus::None.is_word());
        assert!(!PrefixStatus::None.is_prefix());
        assert!(!PrefixStatus::PrefixOnly.is_word());
        assert!(PrefixStatus::PrefixOnly.is_prefix());
        assert!(PrefixStatus::WordOnly.is_word());
        assert!(!PrefixStatus::WordOnly.is_prefix());
        assert!(PrefixStatus::WordAndPrefix.is_word());
        assert!(PrefixStatus::WordAndPrefix.is_prefix());
    }

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_contains_common_words() {
        for word in ["cat", "car", "care", "tree", "stone"] {
            assert!(DICTIONARY.contains(&word), "missing '{word}'");
        }
    }
}
