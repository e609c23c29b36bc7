//! Text shared by the terminal front-ends

use crate::core::Word;
use crate::game::{Phase, Rejection};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Severity of the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Normal,
    Warning,
    Critical,
    Failure,
}

/// Status banner shown above the grid
///
/// Escalates as guesses are used up.
#[must_use]
pub const fn status_banner(phase: Phase, guesses_used: usize) -> (&'static str, BannerLevel) {
    match phase {
        Phase::Lost => ("SYSTEM MALFUNCTION", BannerLevel::Failure),
        Phase::Won => ("SYSTEM RESTORED", BannerLevel::Normal),
        Phase::Playing if guesses_used >= 5 => ("SYSTEM CRITICAL", BannerLevel::Critical),
        Phase::Playing if guesses_used >= 3 => ("SYSTEM BUG DETECTED", BannerLevel::Warning),
        Phase::Playing => ("SYSTEM NORMAL", BannerLevel::Normal),
    }
}

/// Title and message of a transient alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertText {
    pub title: &'static str,
    pub message: String,
}

/// Alert for a refused submission; `None` for inputs after the end
#[must_use]
pub fn rejection_alert(rejection: &Rejection) -> Option<AlertText> {
    let message = match rejection {
        Rejection::IncompleteGuess { .. } => "Not enough letters",
        Rejection::UnknownWord(_) => "Unknown Command",
        Rejection::GameOver => return None,
    };
    Some(AlertText {
        title: "System Error",
        message: message.to_string(),
    })
}

/// Alert for reaching a terminal phase; `None` while playing
#[must_use]
pub fn outcome_alert(phase: Phase, target: &Word) -> Option<AlertText> {
    match phase {
        Phase::Won => Some(AlertText {
            title: "Decrypted!",
            message: "Malfunction Resolved".to_string(),
        }),
        Phase::Lost => Some(AlertText {
            title: "System Failure",
            message: format!("Word was {target}"),
        }),
        Phase::Playing => None,
    }
}

/// Format elapsed seconds as `MM:SS`
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
