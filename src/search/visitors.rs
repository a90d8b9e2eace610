//! Visitors implementing each search mode

use super::traversal::{Visit, Visitor};
use crate::core::{Path, Tile};
use crate::dictionary::PrefixOracle;
use rustc_hash::FxHashSet;

/// Which word lengths a dictionary search reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Any length from the bound upwards
    AtLeast(usize),
    /// Exactly this many letters
    Exactly(usize),
}

impl LengthRule {
    #[inline]
    const fn accepts(self, len: usize) -> bool {
        match self {
            Self::AtLeast(min) => len >= min,
            Self::Exactly(target) => len == target,
        }
    }

    #[inline]
    const fn may_extend(self, len: usize) -> bool {
        match self {
            Self::AtLeast(_) => true,
            Self::Exactly(target) => len < target,
        }
    }

    /// Shared pruning rule: keep going only while the dictionary allows it
    #[inline]
    fn next_step(self, is_prefix: bool, len: usize) -> Visit {
        if is_prefix && self.may_extend(len) {
            Visit::Descend
        } else {
            Visit::Prune
        }
    }
}

/// Collects every distinct dictionary word on the board
pub struct WordCollector<'o, O: ?Sized> {
    oracle: &'o O,
    rule: LengthRule,
    found: FxHashSet<String>,
}

impl<'o, O: PrefixOracle + ?Sized> WordCollector<'o, O> {
    pub fn new(oracle: &'o O, rule: LengthRule) -> Self {
        Self {
            oracle,
            rule,
            found: FxHashSet::default(),
        }
    }

    pub fn into_words(self) -> FxHashSet<String> {
        self.found
    }
}

impl<O: PrefixOracle + ?Sized> Visitor for WordCollector<'_, O> {
    fn visit(&mut self, prefix: &str, path: &[Tile]) -> Visit {
        let status = self.oracle.query(prefix);
        let len = path.len();

        if status.is_word() && self.rule.accepts(len) && !self.found.contains(prefix) {
            self.found.insert(prefix.to_string());
        }

        self.rule.next_step(status.is_prefix(), len)
    }
}

/// Stops at the first dictionary word satisfying the rule
pub struct FirstWord<'o, O: ?Sized> {
    oracle: &'o O,
    rule: LengthRule,
    word: Option<String>,
}

impl<'o, O: PrefixOracle + ?Sized> FirstWord<'o, O> {
    pub const fn new(oracle: &'o O, rule: LengthRule) -> Self {
        Self {
            oracle,
            rule,
            word: None,
        }
    }

    pub fn into_word(self) -> Option<String> {
        self.word
    }
}

impl<O: PrefixOracle + ?Sized> Visitor for FirstWord<'_, O> {
    fn visit(&mut self, prefix: &str, path: &[Tile]) -> Visit {
        let status = self.oracle.query(prefix);
        let len = path.len();

        if status.is_word() && self.rule.accepts(len) {
            self.word = Some(prefix.to_string());
            return Visit::Halt;
        }

        self.rule.next_step(status.is_prefix(), len)
    }
}

/// Follows exact letter matches against a target word, no dictionary involved
pub struct LetterMatcher {
    target: Vec<char>,
    path: Option<Path>,
}

impl LetterMatcher {
    /// Target is folded to lower case
    pub fn new(word: &str) -> Self {
        Self {
            target: word.chars().flat_map(char::to_lowercase).collect(),
            path: None,
        }
    }

    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn into_path(self) -> Option<Path> {
        self.path
    }
}

impl Visitor for LetterMatcher {
    fn visit(&mut self, prefix: &str, path: &[Tile]) -> Visit {
        let depth = path.len();
        let expected = self.target.get(depth - 1).copied();

        if expected.is_none() || prefix.chars().next_back() != expected {
            return Visit::Prune;
        }

        if depth == self.target.len() {
            self.path = Some(path.to_vec());
            Visit::Halt
        } else {
            Visit::Descend
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_least_rule() {
        let rule = LengthRule::AtLeast(3);
        assert!(!rule.accepts(2));
        assert!(rule.accepts(3));
        assert!(rule.accepts(9));
        assert!(rule.may_extend(100));
    }

    #[test]
    fn exactly_rule_stops_at_target() {
        let rule = LengthRule::Exactly(4);
        assert!(!rule.accepts(3));
        assert!(rule.accepts(4));
        assert!(!rule.accepts(5));
        assert!(rule.may_extend(3));
        assert!(!rule.may_extend(4));
    }

    #[test]
    fn next_step_requires_prefix() {
        let rule = LengthRule::AtLeast(3);
        assert_eq!(rule.next_step(true, 1), Visit::Descend);
        assert_eq!(rule.next_step(false, 1), Visit::Prune);
        assert_eq!(LengthRule::Exactly(2).next_step(true, 2), Visit::Prune);
    }

    #[test]
    fn letter_matcher_folds_case() {
        let matcher = LetterMatcher::new("CaT");
        assert_eq!(matcher.target, vec!['c', 'a', 't']);
        assert_eq!(matcher.target_len(), 3);
    }

    #[test]
    fn letter_matcher_prunes_mismatch() {
        let mut matcher = LetterMatcher::new("cat");
        let path = [Tile::new(0, 0)];
        assert_eq!(matcher.visit("c", &path), Visit::Descend);
        assert_eq!(matcher.visit("x", &path), Visit::Prune);
    }

    #[test]
    fn letter_matcher_records_path_on_completion() {
        let mut matcher = LetterMatcher::new("at");
        let path = [Tile::new(0, 1), Tile::new(0, 2)];
        assert_eq!(matcher.visit("at", &path), Visit::Halt);
        assert_eq!(matcher.into_path(), Some(path.to_vec()));
    }
}
