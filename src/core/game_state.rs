//! Per-round puzzle payload
//!
//! A `GameState` is produced once by the game factory; afterwards only the
//! guessed flags change as the player finds sub-words.

use serde::Serialize;
use std::collections::BTreeMap;

/// Target word, its scrambled form and the discoverable sub-words
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    original: String,
    scrambled: String,
    sub_words: BTreeMap<String, bool>,
}

/// What happened when the player submitted a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A sub-word that had not been found yet
    Correct,
    /// A sub-word the player already found
    AlreadyGuessed,
    /// Not one of this round's sub-words
    NotASubword,
}

impl GameState {
    /// Build a fresh round with every sub-word unguessed
    #[must_use]
    pub fn new<I>(original: String, scrambled: String, sub_words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            original,
            scrambled,
            sub_words: sub_words.into_iter().map(|w| (w.into(), false)).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    /// Sub-words in sorted order with their guessed flags
    #[inline]
    #[must_use]
    pub const fn sub_words(&self) -> &BTreeMap<String, bool> {
        &self.sub_words
    }

    /// Record a guess
    ///
    /// Sub-words are matched exactly first, then case-insensitively, so a
    /// player typing `bob` finds the dictionary's `Bob`. Among case variants
    /// an unguessed one is preferred.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::{GameState, GuessOutcome};
    ///
    /// let mut state = GameState::new("yellow".into(), "lowley".into(), ["owl", "yell"]);
    /// assert_eq!(state.guess("owl"), GuessOutcome::Correct);
    /// assert_eq!(state.guess("OWL"), GuessOutcome::AlreadyGuessed);
    /// assert_eq!(state.guess("yellow"), GuessOutcome::NotASubword);
    /// assert_eq!(state.remaining(), 1);
    /// ```
    pub fn guess(&mut self, word: &str) -> GuessOutcome {
        let word = word.trim();
        let key = if self.sub_words.contains_key(word) {
            Some(word.to_string())
        } else {
            let lowered = word.to_lowercase();
            let mut matches = self
                .sub_words
                .iter()
                .filter(|(k, _)| k.to_lowercase() == lowered);
            // case variants such as `Bob` and `bob`: fill an unguessed one first
            let first = matches.next();
            first
                .into_iter()
                .chain(matches)
                .find(|&(_, &guessed)| !guessed)
                .or(first)
                .map(|(k, _)| k.clone())
        };

        match key.and_then(|k| self.sub_words.get_mut(&k)) {
            Some(guessed) if *guessed => GuessOutcome::AlreadyGuessed,
            Some(guessed) => {
                *guessed = true;
                GuessOutcome::Correct
            }
            None => GuessOutcome::NotASubword,
        }
    }

    /// Number of sub-words found so far
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.sub_words.values().filter(|&&g| g).count()
    }

    /// Number of sub-words still hidden
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sub_words.len() - self.guessed_count()
    }

    /// Whether every sub-word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sub_words.values().all(|&g| g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameState {
        GameState::new(
            "yellow".to_string(),
            "wolley".to_string(),
            ["yell", "owl", "low", "Bob"],
        )
    }

    #[test]
    fn new_state_all_unguessed() {
        let state = sample();
        assert_eq!(state.original(), "yellow");
        assert_eq!(state.scrambled(), "wolley");
        assert_eq!(state.sub_words().len(), 4);
        assert!(state.sub_words().values().all(|&g| !g));
        assert_eq!(state.guessed_count(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn sub_words_sorted() {
        let state = sample();
        let keys: Vec<&str> = state.sub_words().keys().map(String::as_str).collect();
        assert_eq!(keys, ["Bob", "low", "owl", "yell"]);
    }

    #[test]
    fn guess_marks_word() {
        let mut state = sample();
        assert_eq!(state.guess("yell"), GuessOutcome::Correct);
        assert_eq!(state.sub_words().get("yell"), Some(&true));
        assert_eq!(state.guess("yell"), GuessOutcome::AlreadyGuessed);
        assert_eq!(state.guessed_count(), 1);
        assert_eq!(state.remaining(), 3);
    }

    #[test]
    fn guess_case_insensitive() {
        let mut state = sample();
        assert_eq!(state.guess("bob"), GuessOutcome::Correct);
        assert_eq!(state.sub_words().get("Bob"), Some(&true));
    }

    #[test]
    fn guess_fills_case_variants_in_turn() {
        let mut state = GameState::new("bobs".to_string(), "sbob".to_string(), ["Bob", "bob"]);
        assert_eq!(state.guess("BOB"), GuessOutcome::Correct);
        assert_eq!(state.guess("BOB"), GuessOutcome::Correct);
        assert!(state.is_complete());
        assert_eq!(state.guess("BOB"), GuessOutcome::AlreadyGuessed);
    }

    #[test]
    fn exact_match_wins_over_case_variant() {
        let mut state = GameState::new("bobs".to_string(), "sbob".to_string(), ["Bob", "bob"]);
        assert_eq!(state.guess("bob"), GuessOutcome::Correct);
        assert_eq!(state.sub_words().get("bob"), Some(&true));
        assert_eq!(state.sub_words().get("Bob"), Some(&false));
        assert_eq!(state.guess("bob"), GuessOutcome::AlreadyGuessed);
    }

    #[test]
    fn guess_unknown_word() {
        let mut state = sample();
        assert_eq!(state.guess("zebra"), GuessOutcome::NotASubword);
        assert_eq!(state.guess(""), GuessOutcome::NotASubword);
        assert_eq!(state.guessed_count(), 0);
    }

    #[test]
    fn completes_after_all_guesses() {
        let mut state = sample();
        for word in ["yell", "owl", "low", "Bob"] {
            state.guess(word);
        }
        assert!(state.is_complete());
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn empty_round_is_complete() {
        let state = GameState::new("aaa".to_string(), "aaa".to_string(), Vec::<String>::new());
        assert!(state.is_complete());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let state = GameState::new("owl".to_string(), "low".to_string(), ["low"]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"original":"owl","scrambled":"low","subWords":{"low":false}}"#
        );
    }
}
