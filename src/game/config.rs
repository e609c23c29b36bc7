//! Per-game configuration

use crate::core::Word;
use thiserror::Error;

/// Target word used when nothing else is configured
pub const DEFAULT_TARGET: &str = "GLITCH";

/// Guesses allowed when nothing else is configured
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Setup problems detected once, when a game is constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("At least one guess must be allowed")]
    NoGuesses,
    #[error("Dictionary is empty")]
    EmptyDictionary,
    #[error("Target word '{0}' is not in the dictionary")]
    TargetNotInDictionary(String),
}

/// Fixed parameters of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    target: Word,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a configuration; the guess length is the target's length
    ///
    /// # Errors
    /// Returns `ConfigError::NoGuesses` if `max_guesses` is zero.
    pub fn new(target: Word, max_guesses: usize) -> Result<Self, ConfigError> {
        if max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }
        Ok(Self {
            target,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Letters per guess
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_len_follows_target() {
        let config = GameConfig::new(Word::new(DEFAULT_TARGET).unwrap(), DEFAULT_MAX_GUESSES)
            .unwrap();
        assert_eq!(config.word_len(), 6);
        assert_eq!(config.max_guesses(), 6);
        assert_eq!(config.target().text(), "GLITCH");
    }

    #[test]
    fn zero_guesses_rejected() {
        assert_eq!(
            GameConfig::new(Word::new("crane").unwrap(), 0),
            Err(ConfigError::NoGuesses)
        );
    }
}
