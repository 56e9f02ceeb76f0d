//! Word lists for the jumble engine
//!
//! Provides the embedded default dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::DictionaryError;
