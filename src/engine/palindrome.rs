//! Palindrome discovery

use super::WordStore;
use crate::core::DictWord;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Every dictionary word that reads the same backwards
///
/// Matching ignores case and single-character words; results keep the
/// dictionary's spelling.
#[must_use]
pub fn palindromes(store: &WordStore) -> BTreeSet<&str> {
    store
        .entries()
        .par_iter()
        .filter(|word| word.is_palindrome())
        .map(DictWord::display)
        .collect()
}
