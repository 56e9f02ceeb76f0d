//! Dictionary word representation
//!
//! A `DictWord` keeps the token exactly as the word list spelled it (for display)
//! next to its lowercase key (for matching and indexing).

use std::fmt;

/// A single dictionary entry
///
/// Equality and hashing consider the display form, so `Bob` and `bob` are two
/// distinct entries that share the key `bob`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictWord {
    display: String,
    key: String,
    char_len: usize,
}

/// Error type for tokens that cannot become dictionary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl DictWord {
    /// Create a new entry from a raw word-list token
    ///
    /// Surrounding whitespace is trimmed; the remaining token is kept verbatim for
    /// display and lowercased for the key.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The token is empty after trimming
    /// - The token contains inner whitespace
    ///
    /// # Examples
    /// ```
    /// use jumble::core::DictWord;
    ///
    /// let word = DictWord::new("  Hannah ").unwrap();
    /// assert_eq!(word.display(), "Hannah");
    /// assert_eq!(word.key(), "hannah");
    ///
    /// assert!(DictWord::new("   ").is_err());
    /// assert!(DictWord::new("two words").is_err());
    /// ```
    pub fn new(token: &str) -> Result<Self, WordError> {
        let display = token.trim();

        if display.is_empty() {
            return Err(WordError::Empty);
        }

        if display.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let key = display.to_lowercase();
        let char_len = key.chars().count();

        Ok(Self {
            display: display.to_string(),
            key,
            char_len,
        })
    }

    /// The token as supplied by the word list
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The lowercase matching key
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Length of the key in characters
    #[inline]
    #[must_use]
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    /// First character of the key
    #[inline]
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.key.chars().next()
    }

    /// Last character of the key
    #[inline]
    #[must_use]
    pub fn last_char(&self) -> Option<char> {
        self.key.chars().next_back()
    }

    /// Whether the key reads the same in both directions
    ///
    /// Single characters do not count as palindromes.
    #[must_use]
    pub fn is_palindrome(&self) -> bool {
        self.char_len > 1 && self.key.chars().eq(self.key.chars().rev())
    }
}

impl fmt::Display for DictWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = DictWord::new("crane").unwrap();
        assert_eq!(word.display(), "crane");
        assert_eq!(word.key(), "crane");
        assert_eq!(word.char_len(), 5);
    }

    #[test]
    fn word_creation_keeps_display_casing() {
        let word = DictWord::new("McIntosh").unwrap();
        assert_eq!(word.display(), "McIntosh");
        assert_eq!(word.key(), "mcintosh");
    }

    #[test]
    fn word_creation_trims() {
        let word = DictWord::new("\tlevel \r").unwrap();
        assert_eq!(word.display(), "level");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(DictWord::new(""), Err(WordError::Empty));
        assert_eq!(DictWord::new("  "), Err(WordError::Empty));
        assert_eq!(
            DictWord::new("ice cream"),
            Err(WordError::ContainsWhitespace)
        );
    }

    #[test]
    fn word_edge_chars() {
        let word = DictWord::new("Yellow").unwrap();
        assert_eq!(word.first_char(), Some('y'));
        assert_eq!(word.last_char(), Some('w'));
    }

    #[test]
    fn word_char_len_counts_chars_not_bytes() {
        let word = DictWord::new("café").unwrap();
        assert_eq!(word.char_len(), 4);
    }

    #[test]
    fn palindrome_detection() {
        assert!(DictWord::new("level").unwrap().is_palindrome());
        assert!(DictWord::new("Hannah").unwrap().is_palindrome());
        assert!(DictWord::new("noon").unwrap().is_palindrome());
        assert!(!DictWord::new("a").unwrap().is_palindrome());
        assert!(!DictWord::new("yellow").unwrap().is_palindrome());
    }

    #[test]
    fn word_equality_uses_display() {
        let lower = DictWord::new("bob").unwrap();
        let upper = DictWord::new("Bob").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(lower.key(), upper.key());
    }

    #[test]
    fn word_display() {
        let word = DictWord::new("Otto").unwrap();
        assert_eq!(format!("{word}"), "Otto");
    }
}
