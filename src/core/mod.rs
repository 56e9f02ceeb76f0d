//! Core domain types for the jumble engine
//!
//! Plain data types with no knowledge of indices or randomness: dictionary
//! entries, the letter multiset used by sub-word search, and the game state.

mod game_state;
mod letters;
mod word;

pub use game_state::{GameState, GuessOutcome};
pub use letters::LetterBag;
pub use word::{DictWord, WordError};
