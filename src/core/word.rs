//! Guess and target word representation
//!
//! A Word is a non-empty run of ASCII letters, normalized to uppercase.

use std::fmt;
use thiserror::Error;

/// A validated, uppercase word
///
/// The length is not fixed here; a game fixes it through its target word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use glitch_wordle::core::Word;
    ///
    /// let word = Word::new("glitch").unwrap();
    /// assert_eq!(word.text(), "GLITCH");
    ///
    /// assert!(Word::new("gl1tch").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                found: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True for a word with no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("GLITCH").unwrap();
        assert_eq!(word.text(), "GLITCH");
        assert_eq!(word.chars(), b"GLITCH");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("glitch").unwrap().text(), "GLITCH");
        assert_eq!(Word::new("GlItCh").unwrap().text(), "GLITCH");
        assert_eq!(Word::new("  glitch\n").unwrap().text(), "GLITCH");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("glïtch"), Err(WordError::NonAscii));
        assert_eq!(Word::new("gl1tch"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gli tch"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("glitch", 6).is_ok());
        assert_eq!(
            Word::with_length("crane", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn word_display() {
        let word = Word::new("glitch").unwrap();
        assert_eq!(format!("{word}"), "GLITCH");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("glitch").unwrap(), Word::new("GLITCH").unwrap());
        assert_ne!(Word::new("glitch").unwrap(), Word::new("switch").unwrap());
    }
}
