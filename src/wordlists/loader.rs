//! Word list loading utilities
//!
//! Turns newline-delimited word lists (files, readers, or embedded constants)
//! into dictionary entries. Blank lines and malformed tokens are skipped.

use crate::core::DictWord;
use log::debug;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error type for dictionaries that cannot be loaded
#[derive(Debug)]
pub enum DictionaryError {
    /// The source could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The source was readable but held no usable words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Word list contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read, and
/// `DictionaryError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use jumble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<DictWord>, DictionaryError> {
    let path = path.as_ref();
    let io_error = |source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let words = load_from_reader(BufReader::new(file)).map_err(io_error)?;

    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(words)
}

/// Read one word per line from any buffered reader
///
/// # Errors
///
/// Returns the first I/O error raised by the reader.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<DictWord>> {
    let mut words = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match DictWord::new(&line) {
            Ok(word) => words.push(word),
            Err(e) => debug!("Skipping word list line {}: {e}", number + 1),
        }
    }
    Ok(words)
}

/// Convert embedded string slice to dictionary entries
///
/// # Examples
/// ```
/// use jumble::wordlists::loader::words_from_slice;
/// use jumble::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<DictWord> {
    slice.iter().filter_map(|&s| DictWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "Slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].display(), "crane");
        assert_eq!(words[1].display(), "Slate");
        assert_eq!(words[1].key(), "slate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "", "two words", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].display(), "crane");
        assert_eq!(words[1].display(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn reader_trims_and_skips_blank_lines() {
        let input = Cursor::new("owl\r\n\n  low \n\t\nyell\n");
        let words = load_from_reader(input).unwrap();

        let displays: Vec<&str> = words.iter().map(DictWord::display).collect();
        assert_eq!(displays, ["owl", "low", "yell"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here/words.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn blank_file_is_empty_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\n   \n\t\n").unwrap();

        let result = load_from_file(file.path());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn file_words_are_loaded_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"owl\n\nHannah\ntwo words\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let displays: Vec<&str> = words.iter().map(DictWord::display).collect();
        assert_eq!(displays, ["owl", "Hannah"]);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
