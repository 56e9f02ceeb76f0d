//! Sub-word generation
//!
//! A sub-word is any dictionary word, other than the source word itself, that
//! can be spelled from a subset of the source word's letters in any order.
//! The search backtracks over the remaining letters while walking the prefix
//! trie in step, so a branch ends as soon as no dictionary word starts with
//! the letters chosen so far.

use super::WordStore;
use super::trie::{NodeId, PrefixIndex};
use crate::core::LetterBag;
use log::warn;
use std::collections::BTreeSet;

/// Minimum sub-word length when the caller does not pick one
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Longest source word the generator will explore
pub const DEFAULT_MAX_WORD_LENGTH: usize = 32;

/// Enumerates sub-words against a shared dictionary
#[derive(Debug, Clone, Copy)]
pub struct SubwordGenerator<'a> {
    store: &'a WordStore,
    max_word_length: usize,
}

impl<'a> SubwordGenerator<'a> {
    #[must_use]
    pub const fn new(store: &'a WordStore) -> Self {
        Self {
            store,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }

    /// Cap the source word length; longer words yield no sub-words
    #[must_use]
    pub const fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }

    /// Shared membership check against the dictionary
    #[inline]
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        self.store.exists(word)
    }

    /// All sub-words of `word` with at least `min_length` letters
    ///
    /// `min_length` defaults to [`DEFAULT_MIN_LENGTH`]; zero yields nothing.
    /// A blank word, one shorter than `min_length`, one containing anything
    /// but ASCII letters, or one longer than the configured maximum yields
    /// nothing as well.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::{SubwordGenerator, WordStore};
    ///
    /// let store = WordStore::from_slice(&["yellow", "yell", "owl", "low", "wool", "lo"]);
    /// let generator = SubwordGenerator::new(&store);
    ///
    /// let words: Vec<&str> = generator.generate("yellow", None).into_iter().collect();
    /// assert_eq!(words, ["low", "owl", "yell"]);
    /// ```
    #[must_use]
    pub fn generate(&self, word: &str, min_length: Option<usize>) -> BTreeSet<&'a str> {
        let min_length = min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        if min_length == 0 || word.trim().is_empty() {
            return BTreeSet::new();
        }

        let Some(mut letters) = LetterBag::from_word(word) else {
            return BTreeSet::new();
        };
        if letters.len() < min_length {
            return BTreeSet::new();
        }
        if letters.len() > self.max_word_length {
            warn!(
                "Refusing sub-word search for {}-letter word (limit {})",
                letters.len(),
                self.max_word_length
            );
            return BTreeSet::new();
        }

        let source = word.to_ascii_lowercase();
        let mut search = Search {
            store: self.store,
            trie: self.store.prefixes(),
            min_length,
            source: &source,
            spelled: String::with_capacity(source.len()),
            found: BTreeSet::new(),
        };
        search.explore(PrefixIndex::ROOT, &mut letters);
        search.found
    }
}

/// Backtracking state for one `generate` call
struct Search<'a, 's> {
    store: &'a WordStore,
    trie: &'a PrefixIndex,
    min_length: usize,
    source: &'s str,
    spelled: String,
    found: BTreeSet<&'a str>,
}

impl<'a> Search<'a, '_> {
    /// Depth never exceeds the number of letters in the source word.
    fn explore(&mut self, node: NodeId, letters: &mut LetterBag) {
        if self.spelled.len() >= self.min_length && self.spelled != self.source {
            let entries = self.store.entries();
            self.found
                .extend(self.trie.terminals(node).iter().map(|&id| entries[id].display()));
        }

        // Branch on distinct letters only so repeated letters do not revisit
        // the same spelling. Snapshot them since the bag changes below.
        let mut choices = [0u8; 26];
        let mut count = 0;
        for letter in letters.distinct() {
            choices[count] = letter;
            count += 1;
        }

        for &letter in &choices[..count] {
            let Some(next) = self.trie.child(node, char::from(letter)) else {
                continue;
            };

            let taken = letters.take(letter);
            debug_assert!(taken, "distinct letters are always available");
            self.spelled.push(char::from(letter));
            self.explore(next, letters);
            self.spelled.pop();
            letters.put_back(letter);
        }
    }
}
