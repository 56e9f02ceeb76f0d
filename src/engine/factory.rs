//! Game round assembly
//!
//! Validates round parameters, picks a target word, scrambles it and lists
//! its sub-words.

use super::scramble::scramble;
use super::subwords::{DEFAULT_MIN_LENGTH, SubwordGenerator};
use super::WordStore;
use crate::core::GameState;
use log::debug;
use rand::Rng;
use std::fmt;

/// Shortest target word a round may use
pub const MIN_TARGET_LENGTH: usize = 3;

/// Error type for rounds that cannot be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    MissingLength,
    InvalidMinLength(usize),
    LengthTooShort(usize),
    MinLengthExceedsLength { min_length: usize, length: usize },
    NoWordOfLength(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLength => write!(f, "Word length must be given"),
            Self::InvalidMinLength(min) => {
                write!(f, "Invalid minimum length {min}, expected a positive integer")
            }
            Self::LengthTooShort(len) => {
                write!(
                    f,
                    "Invalid word length {len}, expected at least {MIN_TARGET_LENGTH}"
                )
            }
            Self::MinLengthExceedsLength { min_length, length } => write!(
                f,
                "Minimum length {min_length} exceeds word length {length}"
            ),
            Self::NoWordOfLength(len) => {
                write!(f, "No dictionary word has {len} letters")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl GameError {
    /// Whether the caller supplied bad parameters, as opposed to the
    /// dictionary lacking a suitable word
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::NoWordOfLength(_))
    }
}

/// Check round parameters and fill in the default minimum length
///
/// Checks run in a fixed order: length present, minimum length positive,
/// length at least [`MIN_TARGET_LENGTH`], minimum length not above length.
///
/// # Errors
///
/// Returns the first `GameError` validation failure.
///
/// # Examples
/// ```
/// use jumble::engine::{GameError, validate_round};
///
/// assert_eq!(validate_round(Some(6), None), Ok((6, 3)));
/// assert_eq!(validate_round(Some(2), Some(3)), Err(GameError::LengthTooShort(2)));
/// ```
pub const fn validate_round(
    length: Option<usize>,
    min_length: Option<usize>,
) -> Result<(usize, usize), GameError> {
    let Some(length) = length else {
        return Err(GameError::MissingLength);
    };
    let min_length = match min_length {
        None => DEFAULT_MIN_LENGTH,
        Some(0) => return Err(GameError::InvalidMinLength(0)),
        Some(min) => min,
    };
    if length < MIN_TARGET_LENGTH {
        return Err(GameError::LengthTooShort(length));
    }
    if min_length > length {
        return Err(GameError::MinLengthExceedsLength { min_length, length });
    }
    Ok((length, min_length))
}

/// Builds game rounds from a shared dictionary
#[derive(Debug, Clone, Copy)]
pub struct GameFactory<'a> {
    store: &'a WordStore,
    subwords: SubwordGenerator<'a>,
}

impl<'a> GameFactory<'a> {
    #[must_use]
    pub const fn new(store: &'a WordStore) -> Self {
        Self {
            store,
            subwords: SubwordGenerator::new(store),
        }
    }

    /// Use a differently configured sub-word generator
    #[must_use]
    pub const fn with_subwords(mut self, subwords: SubwordGenerator<'a>) -> Self {
        self.subwords = subwords;
        self
    }

    /// Create a round around a random word of exactly `length` letters
    ///
    /// # Errors
    ///
    /// Returns a validation `GameError` for bad parameters, or
    /// `GameError::NoWordOfLength` if the dictionary has no such word.
    pub fn create<R: Rng + ?Sized>(
        &self,
        length: Option<usize>,
        min_length: Option<usize>,
        rng: &mut R,
    ) -> Result<GameState, GameError> {
        let (length, min_length) = validate_round(length, min_length)?;

        let original = self
            .store
            .random_word(Some(length), rng)
            .ok_or(GameError::NoWordOfLength(length))?;
        let scrambled = scramble(original, rng);
        let sub_words = self.subwords.generate(original, Some(min_length));

        debug!(
            "New round: {length} letters, {} sub-words of {min_length}+ letters",
            sub_words.len()
        );
        Ok(GameState::new(original.to_string(), scrambled, sub_words))
    }
}
