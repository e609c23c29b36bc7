//! Guess evaluation and feedback representation
//!
//! Feedback is one [`LetterStatus`] per position of the guess. Repeated letters
//! are credited at most as many times as they occur in the target.

use super::{LetterStatus, Word};
use std::fmt;

/// Per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Statuses in position order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as emoji squares, e.g. "🟨🟩⬛⬛🟨🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `target`
///
/// Both words must have the same length; the game checks this before calling.
///
/// # Algorithm
/// 1. Every position starts absent and no target position is claimed
/// 2. First pass: exact matches become correct and claim their target position
/// 3. Second pass: each remaining letter claims the leftmost unclaimed equal
///    letter in the target and becomes present; otherwise it stays absent
///
/// # Examples
/// ```
/// use glitch_wordle::core::{Word, evaluate};
///
/// let guess = Word::new("erase").unwrap();
/// let target = Word::new("speed").unwrap();
///
/// // E(present) R(absent) A(absent) S(present) E(present)
/// assert_eq!(evaluate(&guess, &target).to_string(), "P--PP");
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

    let guess = guess.chars();
    let target = target.chars();
    let mut statuses = vec![LetterStatus::Absent; target.len()];
    let mut claimed = vec![false; target.len()];

    // First pass must finish before any displaced match can claim a position
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            statuses[i] = LetterStatus::Correct;
            claimed[i] = true;
        }
    }

    for (i, &letter) in guess.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }

        if let Some(j) = (0..target.len()).find(|&j| !claimed[j] && target[j] == letter) {
            statuses[i] = LetterStatus::Present;
            claimed[j] = true;
        }
    }

    Feedback(statuses)
}

/// A submitted guess together with its feedback
///
/// Created once at submission time and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    word: Word,
    feedback: Feedback,
}

impl EvaluatedGuess {
    /// Evaluate `word` against `target` and keep both
    #[must_use]
    pub fn new(word: Word, target: &Word) -> Self {
        let feedback = evaluate(&word, target);
        Self { word, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Letters paired with their statuses, in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.word
            .chars()
            .iter()
            .copied()
            .zip(self.feedback.statuses().iter().copied())
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved()
    }
}
