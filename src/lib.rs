//! Jumble
//!
//! A dictionary-backed word puzzle engine: scrambles words, finds palindromes,
//! answers prefix and pattern lookups, enumerates sub-words and deals game rounds.
//!
//! # Quick Start
//!
//! ```rust
//! use jumble::engine::{Jumble, WordStore};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Index the dictionary once
//! let store = WordStore::from_slice(&["yellow", "yell", "owl", "low", "Otto"]);
//!
//! // Engines borrow the store and own their random generator
//! let mut engine = Jumble::new(&store, StdRng::seed_from_u64(42));
//!
//! let state = engine.create_game_state(Some(6), None).unwrap();
//! assert_eq!(state.original(), "yellow");
//! assert_eq!(state.sub_words().len(), 3);
//! assert!(engine.retrieve_palindrome_words().contains("Otto"));
//! ```

// Core domain types
pub mod core;

// Dictionary indices and puzzle algorithms
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
