//! Dictionary of accepted guesses

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Membership test for guesses
///
/// The game only ever asks whether a word is acceptable.
pub trait Dictionary {
    /// True if `word` is an accepted guess
    fn contains(&self, word: &str) -> bool;

    /// True if no word would ever be accepted
    fn is_empty(&self) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

/// Hash set of uppercase words sharing one length
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    word_len: usize,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from words, keeping only those with `word_len` letters
    ///
    /// # Examples
    /// ```
    /// use glitch_wordle::core::Word;
    /// use glitch_wordle::game::{Dictionary, WordSet};
    ///
    /// let words = ["glitch", "crane", "switch"].map(|w| Word::new(w).unwrap());
    /// let set = WordSet::new(6, words);
    ///
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("glitch"));
    /// assert!(!set.contains("crane"));
    /// ```
    pub fn new(word_len: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let words = words
            .into_iter()
            .filter(|word| word.len() == word_len)
            .map(|word| word.text().to_string())
            .collect();

        Self { word_len, words }
    }

    /// Build a set from raw strings, skipping anything that is not a valid word
    pub fn from_strs<'a>(word_len: usize, words: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(word_len, words.into_iter().filter_map(|w| Word::new(w).ok()))
    }

    /// Letters per word
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordSet {
    fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_ascii_uppercase())
        }
    }

    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
