//! Word puzzle engine
//!
//! The indexed dictionary plus the algorithms that read it: scrambling,
//! palindrome discovery, sub-word generation and game round assembly.

mod config;
mod factory;
mod jumble;
pub mod palindrome;
pub mod scramble;
mod store;
pub mod subwords;
pub mod trie;

pub use config::EngineConfig;
pub use factory::{GameError, GameFactory, MIN_TARGET_LENGTH, validate_round};
pub use jumble::Jumble;
pub use palindrome::palindromes;
pub use scramble::scramble;
pub use store::WordStore;
pub use subwords::{DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_LENGTH, SubwordGenerator};
