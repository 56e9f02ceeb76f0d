//! Letter scrambling
//!
//! Shuffles a word's characters with a caller-supplied generator until the
//! result differs from the input.

use rand::Rng;
use rand::seq::SliceRandom;

/// Whether any arrangement of `chars` differs from `chars` itself
///
/// True exactly when at least two distinct characters are present.
fn has_other_arrangement(chars: &[char]) -> bool {
    chars.windows(2).any(|pair| pair[0] != pair[1])
}

/// Randomly reorder the characters of `word`
///
/// Words of length 0 or 1, and words made of a single repeated character,
/// come back unchanged. Any other word comes back as a different permutation
/// of the same characters.
///
/// # Examples
/// ```
/// use jumble::engine::scramble;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let scrambled = scramble("elephant", &mut rng);
/// assert_ne!(scrambled, "elephant");
///
/// let mut sorted: Vec<char> = scrambled.chars().collect();
/// sorted.sort_unstable();
/// assert_eq!(sorted.into_iter().collect::<String>(), "aeehlnpt");
///
/// assert_eq!(scramble("aaa", &mut rng), "aaa");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if !has_other_arrangement(&chars) {
        return word.to_string();
    }

    loop {
        chars.shuffle(rng);
        if !chars.iter().copied().eq(word.chars()) {
            return chars.into_iter().collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(word: &str) -> Vec<char> {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn short_words_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scramble("", &mut rng), "");
        assert_eq!(scramble("a", &mut rng), "a");
        assert_eq!(scramble("é", &mut rng), "é");
    }

    #[test]
    fn identical_letters_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scramble("aa", &mut rng), "aa");
        assert_eq!(scramble("zzzzzzz", &mut rng), "zzzzzzz");
    }

    #[test]
    fn two_letters_swap() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scramble("ab", &mut rng), "ba");
        assert_eq!(scramble("Aa", &mut rng), "aA");
    }

    #[test]
    fn repeated_letters_still_move() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let scrambled = scramble("aab", &mut rng);
            assert_ne!(scrambled, "aab");
            assert_eq!(sorted(&scrambled), sorted("aab"));
        }
    }

    #[test]
    fn same_seed_same_result() {
        let a = scramble("elephant", &mut StdRng::seed_from_u64(11));
        let b = scramble("elephant", &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn detects_other_arrangement() {
        assert!(!has_other_arrangement(&[]));
        assert!(!has_other_arrangement(&['x']));
        assert!(!has_other_arrangement(&['x', 'x', 'x']));
        assert!(has_other_arrangement(&['x', 'x', 'y']));
    }

    proptest! {
        #[test]
        fn scramble_is_a_different_permutation(word in "[a-zA-Z]{2,12}", seed: u64) {
            prop_assume!(has_other_arrangement(&word.chars().collect::<Vec<_>>()));
            let scrambled = scramble(&word, &mut StdRng::seed_from_u64(seed));
            prop_assert_ne!(&scrambled, &word);
            prop_assert_eq!(sorted(&scrambled), sorted(&word));
        }

        #[test]
        fn uniform_words_come_back(letter in "[a-z]", len in 0usize..10, seed: u64) {
            let word = letter.repeat(len);
            prop_assert_eq!(scramble(&word, &mut StdRng::seed_from_u64(seed)), word);
        }
    }
}
