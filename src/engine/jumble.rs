//! Engine facade
//!
//! Bundles the dictionary, the sub-word generator, the game factory and an
//! owned random generator behind the engine's public operations.

use super::config::EngineConfig;
use super::factory::{GameError, GameFactory};
use super::palindrome::palindromes;
use super::scramble::scramble;
use super::subwords::SubwordGenerator;
use super::WordStore;
use crate::core::GameState;
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

/// Word puzzle engine over a shared dictionary
///
/// The dictionary is borrowed read-only; only the random generator is owned,
/// so several engines may share one store.
pub struct Jumble<'a, R: Rng = StdRng> {
    store: &'a WordStore,
    subwords: SubwordGenerator<'a>,
    factory: GameFactory<'a>,
    rng: R,
}

impl<'a> Jumble<'a, StdRng> {
    /// Create an engine from a configuration
    #[must_use]
    pub fn from_config(store: &'a WordStore, config: &EngineConfig) -> Self {
        let subwords = SubwordGenerator::new(store).with_max_word_length(config.max_word_length);
        Self {
            store,
            subwords,
            factory: GameFactory::new(store).with_subwords(subwords),
            rng: config.rng(),
        }
    }
}

impl<'a, R: Rng> Jumble<'a, R> {
    /// Create an engine with default settings and the given generator
    ///
    /// # Examples
    /// ```
    /// use jumble::engine::{Jumble, WordStore};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let store = WordStore::from_slice(&["yellow", "yell", "owl", "level"]);
    /// let mut engine = Jumble::new(&store, StdRng::seed_from_u64(1));
    ///
    /// assert!(engine.exists("Yell"));
    /// assert_eq!(engine.retrieve_palindrome_words().len(), 1);
    ///
    /// let state = engine.create_game_state(Some(6), None).unwrap();
    /// assert_eq!(state.original(), "yellow");
    /// assert_eq!(state.sub_words().len(), 2);
    /// ```
    pub fn new(store: &'a WordStore, rng: R) -> Self {
        let subwords = SubwordGenerator::new(store);
        Self {
            store,
            subwords,
            factory: GameFactory::new(store),
            rng,
        }
    }

    /// The dictionary this engine reads
    #[inline]
    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    /// The sub-word generator, shareable across threads
    #[inline]
    #[must_use]
    pub const fn subwords(&self) -> SubwordGenerator<'a> {
        self.subwords
    }

    /// Randomly reorder a word's letters, differing from it when possible
    pub fn scramble(&mut self, word: &str) -> String {
        scramble(word, &mut self.rng)
    }

    /// Every palindrome in the dictionary
    #[must_use]
    pub fn retrieve_palindrome_words(&self) -> BTreeSet<&'a str> {
        palindromes(self.store)
    }

    /// A random word, optionally of an exact length
    pub fn pick_one_random_word(&mut self, length: Option<usize>) -> Option<&'a str> {
        self.store.random_word(length, &mut self.rng)
    }

    /// Case-insensitive dictionary membership
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        self.store.exists(word)
    }

    /// Every word starting with `prefix`
    #[must_use]
    pub fn words_matching_prefix(&self, prefix: &str) -> BTreeSet<&'a str> {
        self.store.words_with_prefix(prefix)
    }

    /// Words matching every supplied criterion
    #[must_use]
    pub fn search_words(
        &self,
        start: Option<char>,
        end: Option<char>,
        length: Option<usize>,
    ) -> BTreeSet<&'a str> {
        self.store.search(start, end, length)
    }

    /// Sub-words of `word` with at least `min_length` letters (default 3)
    #[must_use]
    pub fn generate_sub_words(&self, word: &str, min_length: Option<usize>) -> BTreeSet<&'a str> {
        self.subwords.generate(word, min_length)
    }

    /// Build a new game round
    ///
    /// # Errors
    ///
    /// Returns `GameError` for invalid parameters or when no word of the
    /// requested length exists.
    pub fn create_game_state(
        &mut self,
        length: Option<usize>,
        min_length: Option<usize>,
    ) -> Result<GameState, GameError> {
        self.factory.create(length, min_length, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn engine(store: &WordStore) -> Jumble<'_> {
        let config = EngineConfig {
            seed: Some(2024),
            ..EngineConfig::default()
        };
        Jumble::from_config(store, &config)
    }

    #[test]
    fn operations_over_embedded_dictionary() {
        let store = WordStore::embedded();
        let mut engine = engine(&store);

        assert!(engine.exists("yellow"));
        assert!(!engine.exists("xyzzy"));

        let pre = engine.words_matching_prefix("pre");
        assert!(!pre.is_empty());
        assert!(pre.iter().all(|w| w.to_lowercase().starts_with("pre")));

        let ae = engine.search_words(Some('a'), Some('e'), None);
        assert!(ae.iter().all(|w| {
            let lower = w.to_lowercase();
            lower.starts_with('a') && lower.ends_with('e')
        }));

        let five = engine.search_words(None, None, Some(5));
        assert!(!five.is_empty());
        assert!(five.iter().all(|w| w.chars().count() == 5));

        let word = engine.pick_one_random_word(Some(6)).unwrap();
        assert_eq!(word.chars().count(), 6);
    }

    #[test]
    fn yellow_sub_words_from_embedded_dictionary() {
        let store = WordStore::embedded();
        let engine = engine(&store);
        let found = engine.generate_sub_words("yellow", Some(3));
        for expected in [
            "low", "lowly", "lye", "ole", "owe", "owl", "well", "welly", "woe", "yell", "yeow",
            "yew", "yowl",
        ] {
            assert!(found.contains(expected), "missing {expected}");
        }
        assert!(!found.contains("yellow"));
        assert!(!found.contains("Yellow"));
    }

    #[test]
    fn game_state_invariants() {
        let store = WordStore::embedded();
        let mut engine = engine(&store);

        for _ in 0..20 {
            let state = engine.create_game_state(Some(6), Some(3)).unwrap();
            assert_eq!(state.original().chars().count(), 6);
            assert!(state.sub_words().values().all(|&g| !g));
            assert!(state.sub_words().keys().all(|w| w.chars().count() >= 3));
            assert!(state.sub_words().keys().all(|w| w != state.original()));

            let mut original: Vec<char> = state.original().chars().collect();
            let mut scrambled: Vec<char> = state.scrambled().chars().collect();
            original.sort_unstable();
            scrambled.sort_unstable();
            assert_eq!(original, scrambled);
            assert_ne!(state.scrambled(), state.original());
        }
    }

    #[test]
    fn game_state_validation() {
        let store = WordStore::embedded();
        let mut engine = engine(&store);
        assert_eq!(
            engine.create_game_state(Some(2), Some(3)),
            Err(GameError::LengthTooShort(2))
        );
        assert!(matches!(
            engine.create_game_state(Some(5), Some(6)),
            Err(GameError::MinLengthExceedsLength { .. })
        ));
        assert_eq!(
            engine.create_game_state(None, None),
            Err(GameError::MissingLength)
        );
    }

    #[test]
    fn seeded_engines_agree() {
        let store = WordStore::embedded();
        let mut a = engine(&store);
        let mut b = engine(&store);
        assert_eq!(a.scramble("elephant"), b.scramble("elephant"));
        assert_eq!(a.pick_one_random_word(None), b.pick_one_random_word(None));
    }

    #[test]
    fn custom_generator() {
        let store = WordStore::from_slice(&["ab"]);
        let mut engine = Jumble::new(&store, StdRng::seed_from_u64(0));
        assert_eq!(engine.scramble("ab"), "ba");
        assert_eq!(engine.pick_one_random_word(None), Some("ab"));
        assert!(engine.store().exists("AB"));
    }
}
