//! Core domain types for the guessing game
//!
//! Pure types and functions: words, letter statuses, guess evaluation and
//! keyboard aggregation. Nothing here performs I/O or holds game state.

mod feedback;
mod keyboard;
mod status;
mod word;

pub use feedback::{EvaluatedGuess, Feedback, evaluate};
pub use keyboard::KeyboardStatus;
pub use status::LetterStatus;
pub use word::{Word, WordError};
