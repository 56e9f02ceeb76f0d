//! Indexed, read-only dictionary
//!
//! The store is built once from a word provider and never mutated afterwards,
//! so it can be shared by reference across threads. Every query matches on
//! lowercase keys and answers with the dictionary's own spelling.

use super::trie::PrefixIndex;
use crate::core::DictWord;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{DictionaryError, WORDS};
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Map `a..=z` (either case) to a bucket slot
fn letter_slot(ch: char) -> Option<usize> {
    let lower = ch.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| usize::from(lower as u8 - b'a'))
}

/// In-memory dictionary with exact, length, prefix and edge-letter indices
#[derive(Debug)]
pub struct WordStore {
    entries: Vec<DictWord>,
    members: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
    by_first: [Vec<usize>; 26],
    by_last: [Vec<usize>; 26],
    prefixes: PrefixIndex,
}

impl WordStore {
    /// Build every index in one pass over the words
    ///
    /// Entries with an identical spelling are kept once; spellings that differ
    /// only by case stay separate and share one key.
    #[must_use]
    pub fn new<I: IntoIterator<Item = DictWord>>(words: I) -> Self {
        let mut store = Self {
            entries: Vec::new(),
            members: FxHashSet::default(),
            by_length: FxHashMap::default(),
            by_first: std::array::from_fn(|_| Vec::new()),
            by_last: std::array::from_fn(|_| Vec::new()),
            prefixes: PrefixIndex::new(),
        };

        let mut seen: FxHashSet<String> = FxHashSet::default();
        for word in words {
            if !seen.insert(word.display().to_string()) {
                continue;
            }
            store.index(word);
        }

        debug!(
            "Indexed {} words ({} distinct keys, {} trie nodes)",
            store.entries.len(),
            store.members.len(),
            store.prefixes.node_count()
        );
        store
    }

    fn index(&mut self, word: DictWord) {
        let id = self.entries.len();

        self.members.insert(word.key().to_string());
        self.by_length.entry(word.char_len()).or_default().push(id);
        if let Some(slot) = word.first_char().and_then(letter_slot) {
            self.by_first[slot].push(id);
        }
        if let Some(slot) = word.last_char().and_then(letter_slot) {
            self.by_last[slot].push(id);
        }
        self.prefixes.insert(word.key(), id);

        self.entries.push(word);
    }

    /// Build a store from string tokens
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::WordStore;
    ///
    /// let store = WordStore::from_slice(&["Otto", "owl", "low"]);
    /// assert!(store.exists("OTTO"));
    /// assert!(!store.exists("lowly"));
    /// ```
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        Self::new(words_from_slice(words))
    }

    /// Build a store from the dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let store = Self::from_slice(WORDS);
        info!("Loaded embedded dictionary with {} words", store.len());
        store
    }

    /// Load and index a newline-delimited word list
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the file cannot be read or has no words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let store = Self::new(load_from_file(path)?);
        info!("Loaded {} words from {}", store.len(), path.display());
        Ok(store)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in load order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[DictWord] {
        &self.entries
    }

    /// The prefix trie; entry ids index into [`Self::entries`]
    #[inline]
    #[must_use]
    pub const fn prefixes(&self) -> &PrefixIndex {
        &self.prefixes
    }

    fn displays<'i>(&self, ids: impl IntoIterator<Item = &'i usize>) -> BTreeSet<&str> {
        ids.into_iter()
            .map(|&id| self.entries[id].display())
            .collect()
    }

    /// Exact, case-insensitive membership
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        !word.is_empty() && self.members.contains(&word.to_lowercase())
    }

    /// Every word starting with `prefix`
    ///
    /// Empty, blank or non-alphabetic prefixes match nothing.
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::WordStore;
    ///
    /// let store = WordStore::from_slice(&["prefix", "Press", "repress"]);
    /// let words = store.words_with_prefix("PRE");
    /// assert_eq!(words.into_iter().collect::<Vec<_>>(), ["Press", "prefix"]);
    /// assert!(store.words_with_prefix("p1").is_empty());
    /// ```
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str) -> BTreeSet<&str> {
        if prefix.trim().is_empty() || !prefix.chars().all(char::is_alphabetic) {
            return BTreeSet::new();
        }

        self.prefixes
            .find(&prefix.to_lowercase())
            .map(|node| self.displays(&self.prefixes.subtree(node)))
            .unwrap_or_default()
    }

    /// Words matching every supplied criterion
    ///
    /// With no criterion at all nothing is returned rather than the whole
    /// dictionary. Edge letters outside `a..=z` never match.
    #[must_use]
    pub fn search(
        &self,
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    ) -> BTreeSet<&str> {
        if start.is_none() && end.is_none() && length.is_none() {
            return BTreeSet::new();
        }

        let start_slot = match start.map(letter_slot) {
            Some(None) => return BTreeSet::new(),
            slot => slot.flatten(),
        };
        let end_slot = match end.map(letter_slot) {
            Some(None) => return BTreeSet::new(),
            slot => slot.flatten(),
        };

        let mut buckets: Vec<&[usize]> = Vec::with_capacity(3);
        if let Some(slot) = start_slot {
            buckets.push(&self.by_first[slot]);
        }
        if let Some(slot) = end_slot {
            buckets.push(&self.by_last[slot]);
        }
        if let Some(len) = length {
            buckets.push(self.by_length.get(&len).map_or(&[][..], Vec::as_slice));
        }

        let Some(smallest) = buckets.iter().min_by_key(|b| b.len()) else {
            return BTreeSet::new();
        };

        let matches = smallest.iter().filter(|&&id| {
            let word = &self.entries[id];
            start_slot.is_none_or(|s| word.first_char().and_then(letter_slot) == Some(s))
                && end_slot.is_none_or(|s| word.last_char().and_then(letter_slot) == Some(s))
                && length.is_none_or(|len| word.char_len() == len)
        });
        self.displays(matches)
    }

    /// Pick a word uniformly at random
    ///
    /// With a `length`, only words of exactly that many characters are
    /// candidates. Returns `None` when there are no candidates.
    pub fn random_word<R: Rng + ?Sized>(&self, length: Option<usize>, rng: &mut R) -> Option<&str> {
        match length {
            Some(len) => {
                let id = *self.by_length.get(&len)?.choose(rng)?;
                Some(self.entries[id].display())
            }
            None => self.entries.choose(rng).map(DictWord::display),
        }
    }

    /// Number of words per length, shortest first
    #[must_use]
    pub fn lengths(&self) -> BTreeMap<usize, usize> {
        self.by_length
            .iter()
            .map(|(&len, ids)| (len, ids.len()))
            .collect()
    }
}
