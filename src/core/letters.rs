//! Letter multiset for sub-word search
//!
//! Tracks how many of each ASCII letter are still available while the
//! sub-word generator backtracks through a source word.

const ALPHABET: usize = 26;

/// Counts of the letters `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterBag {
    counts: [u8; ALPHABET],
    total: usize,
}

impl LetterBag {
    /// Build a bag from a word made only of ASCII letters
    ///
    /// Letters are folded to lowercase. Returns `None` for empty input, any
    /// other character, or more than 255 copies of one letter.
    ///
    /// # Examples
    /// ```
    /// use jumble::core::LetterBag;
    ///
    /// let bag = LetterBag::from_word("Yellow").unwrap();
    /// assert_eq!(bag.count(b'l'), 2);
    /// assert_eq!(bag.len(), 6);
    ///
    /// assert!(LetterBag::from_word("o'clock").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        if word.is_empty() {
            return None;
        }

        let mut bag = Self::default();
        for byte in word.bytes() {
            if !byte.is_ascii_alphabetic() {
                return None;
            }
            let slot = &mut bag.counts[usize::from(byte.to_ascii_lowercase() - b'a')];
            *slot = slot.checked_add(1)?;
            bag.total += 1;
        }
        Some(bag)
    }

    /// Number of letters left in the bag
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Whether every letter has been taken
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Remaining copies of a lowercase ASCII letter
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        letter
            .checked_sub(b'a')
            .and_then(|i| self.counts.get(usize::from(i)))
            .copied()
            .unwrap_or(0)
    }

    /// Distinct letters still available, in alphabetical order
    pub fn distinct(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(|&letter| self.count(letter) > 0)
    }

    /// Remove one copy of `letter`
    ///
    /// Returns `false` and leaves the bag unchanged if none is left.
    pub fn take(&mut self, letter: u8) -> bool {
        match letter.checked_sub(b'a').map(usize::from) {
            Some(i) if i < ALPHABET && self.counts[i] > 0 => {
                self.counts[i] -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return one copy of `letter` taken earlier
    pub fn put_back(&mut self, letter: u8) {
        match letter.checked_sub(b'a').map(usize::from) {
            Some(i) if i < ALPHABET => {
                self.counts[i] += 1;
                self.total += 1;
            }
            _ => {}
        }
    }
}
