//! Per-letter status values
//!
//! `Correct`, `Present` and `Absent` come out of guess evaluation.
//! `Active` and `Empty` only describe unsubmitted grid cells.

use std::fmt;

/// Status of a single letter, either in a grid cell or on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter sits at the same position in the target
    Correct,
    /// Letter is in the target at another, unclaimed position
    Present,
    /// Letter is not in the target, or all its occurrences are already claimed
    Absent,
    /// Typed into the current row but not submitted
    Active,
    /// No letter yet
    Empty,
}

impl LetterStatus {
    /// Keyboard priority rank; lower wins
    ///
    /// Correct (0) > Present (1) > Absent (2) > Empty (3).
    /// `Active` never reaches the keyboard and ranks last.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 0,
            Self::Present => 1,
            Self::Absent => 2,
            Self::Empty => 3,
            Self::Active => 4,
        }
    }

    /// True if `self` should replace `other` in the keyboard map
    #[inline]
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.rank() < other.rank()
    }

    /// Whether this status is produced by guess evaluation
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// Emoji square used in shareable output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟨',
            Self::Present => '🟩',
            Self::Absent => '⬛',
            Self::Active | Self::Empty => '⬜',
        }
    }

    /// Single-character code: `C`, `P`, `-`, `*`, `.`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => '-',
            Self::Active => '*',
            Self::Empty => '.',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Active => "active",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_order_is_fixed() {
        assert!(LetterStatus::Correct.outranks(LetterStatus::Present));
        assert!(LetterStatus::Present.outranks(LetterStatus::Absent));
        assert!(LetterStatus::Absent.outranks(LetterStatus::Empty));
        assert!(!LetterStatus::Absent.outranks(LetterStatus::Correct));
        assert!(!LetterStatus::Present.outranks(LetterStatus::Present));
    }

    #[test]
    fn only_evaluation_statuses_are_evaluated() {
        assert!(LetterStatus::Correct.is_evaluated());
        assert!(LetterStatus::Present.is_evaluated());
        assert!(LetterStatus::Absent.is_evaluated());
        assert!(!LetterStatus::Active.is_evaluated());
        assert!(!LetterStatus::Empty.is_evaluated());
    }

    #[test]
    fn display_names() {
        assert_eq!(LetterStatus::Correct.to_string(), "correct");
        assert_eq!(LetterStatus::Absent.to_string(), "absent");
    }
}
