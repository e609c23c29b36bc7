//! Glitch Wordle
//!
//! Word-guessing game engine with a ratatui front-end: two-pass guess
//! evaluation, keyboard status aggregation and a play/won/lost state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use glitch_wordle::core::{Word, evaluate};
//!
//! let guess = Word::new("erase").unwrap();
//! let target = Word::new("speed").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! assert_eq!(feedback.to_string(), "P--PP");
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Settings file
pub mod settings;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
