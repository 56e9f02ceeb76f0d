//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_exists, print_game_state, print_game_state_json, print_scramble,
    print_word_set,
};
