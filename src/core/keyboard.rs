//! Keyboard status aggregation
//!
//! Folds every evaluated guess into the best status seen per letter.

use super::{EvaluatedGuess, Feedback, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// Best-known status for each letter guessed so far
///
/// A letter's status only ever moves up in priority
/// (see [`LetterStatus::rank`]); a later, worse result never replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the statuses of one guess
    ///
    /// # Examples
    /// ```
    /// use glitch_wordle::core::{KeyboardStatus, LetterStatus, Word, evaluate};
    ///
    /// let target = Word::new("glitch").unwrap();
    /// let mut keyboard = KeyboardStatus::new();
    ///
    /// let first = Word::new("glitch").unwrap();
    /// keyboard.update(&first, &evaluate(&first, &target));
    ///
    /// // The second L of "allies" is absent, but L stays correct
    /// let second = Word::new("allies").unwrap();
    /// keyboard.update(&second, &evaluate(&second, &target));
    /// assert_eq!(keyboard.get('l'), Some(LetterStatus::Correct));
    /// ```
    pub fn update(&mut self, word: &Word, feedback: &Feedback) {
        debug_assert_eq!(word.len(), feedback.len(), "feedback length differs from word");

        for (&letter, &status) in word.chars().iter().zip(feedback.statuses()) {
            if !status.is_evaluated() {
                continue;
            }
            self.letters
                .entry(letter)
                .and_modify(|current| {
                    if status.outranks(*current) {
                        *current = status;
                    }
                })
                .or_insert(status);
        }
    }

    /// Merge an evaluated guess
    pub fn record(&mut self, guess: &EvaluatedGuess) {
        self.update(guess.word(), guess.feedback());
    }

    /// Status of a letter, case-insensitive; `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Number of distinct letters seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn record(keyboard: &mut KeyboardStatus, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let feedback = evaluate(&guess, &Word::new(target).unwrap());
        keyboard.update(&guess, &feedback);
    }

    #[test]
    fn starts_empty() {
        let keyboard = KeyboardStatus::new();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.get('a'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardStatus::new();
        record(&mut keyboard, "planet", "glitch");
        assert_eq!(keyboard.get('L'), Some(LetterStatus::Correct));

        // L in a wrong position, then L repeated past the target's count
        record(&mut keyboard, "lizard", "glitch");
        record(&mut keyboard, "allies", "glitch");
        assert_eq!(keyboard.get('L'), Some(LetterStatus::Correct));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut keyboard = KeyboardStatus::new();
        record(&mut keyboard, "planet", "glitch");
        assert_eq!(keyboard.get('T'), Some(LetterStatus::Present));

        record(&mut keyboard, "switch", "glitch");
        assert_eq!(keyboard.get('T'), Some(LetterStatus::Correct));
    }

    #[test]
    fn best_status_wins_within_one_guess() {
        let mut keyboard = KeyboardStatus::new();
        // First L is exact, second L finds nothing left to claim
        record(&mut keyboard, "allies", "glitch");
        assert_eq!(keyboard.get('L'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.get('I'), Some(LetterStatus::Present));
        assert_eq!(keyboard.get('A'), Some(LetterStatus::Absent));
    }

    #[test]
    fn present_does_not_downgrade_correct() {
        let mut keyboard = KeyboardStatus::new();
        record(&mut keyboard, "allies", "glitch");
        record(&mut keyboard, "switch", "glitch");
        assert_eq!(keyboard.get('I'), Some(LetterStatus::Correct));

        record(&mut keyboard, "stripe", "glitch");
        assert_eq!(keyboard.get('I'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.get('T'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.get('R'), Some(LetterStatus::Absent));
    }

    #[test]
    fn explicit_lower_priority_update_is_ignored() {
        let mut keyboard = KeyboardStatus::new();
        record(&mut keyboard, "abc", "abc");
        // Every letter misplaced against CAB
        record(&mut keyboard, "abc", "cab");
        assert_eq!(keyboard.get('a'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.get('b'), Some(LetterStatus::Correct));
        assert_eq!(keyboard.len(), 3);
    }

    #[test]
    fn non_letters_have_no_status() {
        let keyboard = KeyboardStatus::new();
        assert_eq!(keyboard.get('1'), None);
        assert_eq!(keyboard.get('é'), None);
    }
}
