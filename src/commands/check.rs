//! Single-guess check command
//!
//! Evaluates one guess against the target without playing a game.

use crate::core::{EvaluatedGuess, Word, WordError};
use crate::game::Dictionary;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: EvaluatedGuess,
    /// Whether a game would accept this guess
    pub in_dictionary: bool,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if the guess is not a word of the target's length.
pub fn check_guess<D: Dictionary>(
    guess: &str,
    target: &Word,
    dictionary: &D,
) -> Result<CheckResult, WordError> {
    let word = Word::with_length(guess, target.len())?;
    let in_dictionary = dictionary.contains(word.text());

    Ok(CheckResult {
        guess: EvaluatedGuess::new(word, target),
        in_dictionary,
    })
}
