//! Interactive TUI interface
//!
//! Renders the game with ratatui and feeds crossterm key presses into it.

mod app;
mod rendering;

pub use app::{App, Cell, GridRow, Notice, grid_rows, run_tui};
