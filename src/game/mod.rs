//! Game state machine and its collaborators
//!
//! [`Game`] applies the evaluator and keyboard aggregator from [`crate::core`]
//! to a stream of inputs, checking each guess against a [`Dictionary`].

mod config;
mod dictionary;
mod state;

pub use config::{ConfigError, DEFAULT_MAX_GUESSES, DEFAULT_TARGET, GameConfig};
pub use dictionary::{Dictionary, WordSet};
pub use state::{Game, GameEvent, Input, Phase, Rejection, Submission};
