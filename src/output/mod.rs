//! Terminal output formatting
//!
//! Display utilities for the line-mode front-ends and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_banner, write_history, write_keyboard};
