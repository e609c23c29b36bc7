//! Simple line-mode play
//!
//! Text-based game without the TUI: one guess per line.

use crate::game::{Dictionary, Game, Input, Phase};
use crate::output::formatters::{outcome_alert, rejection_alert};
use crate::output::{write_banner, write_history, write_keyboard};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run a game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary>(game: &mut Game<D>) -> Result<Phase> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, stdin.lock(), &mut stdout.lock())
}

/// Play a game reading guesses from `input` and writing to `out`
///
/// Stops when the game ends, on `:q`, or at end of input.
/// `:k` prints the keyboard. Returns the phase the game stopped in.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<D: Dictionary, R: BufRead, W: Write>(
    game: &mut Game<D>,
    mut input: R,
    out: &mut W,
) -> Result<Phase> {
    let word_len = game.config().word_len();
    let max_guesses = game.config().max_guesses();

    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║        GAMESHIFT  ·  Wordle Finale     ║")?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {word_len}-letter word in {max_guesses} tries. Yellow = right spot, green = wrong spot."
    )?;
    writeln!(out, "Commands: ':k' keyboard, ':q' quit\n")?;

    let mut line = String::new();
    while game.phase() == Phase::Playing {
        write_banner(out, game.phase(), game.history().len())?;
        write!(out, "Guess {}/{max_guesses}: ", game.history().len() + 1)?;
        out.flush().context("failed to flush output")?;

        line.clear();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            break;
        }

        let entry = line.trim();
        match entry {
            ":q" | ":quit" => break,
            ":k" | ":keys" => {
                write_keyboard(out, game.keyboard())?;
                continue;
            }
            _ => {}
        }

        if entry.chars().count() > word_len {
            writeln!(out, "{}", "System Error: Too many letters".red())?;
            continue;
        }

        if !entry.chars().all(|ch| ch.is_ascii_alphabetic()) {
            writeln!(out, "{}", "System Error: Letters only".red())?;
            continue;
        }

        while game.pop_letter() {}
        for letter in entry.chars() {
            game.apply(Input::Letter(letter))?;
        }

        match game.apply(Input::Submit) {
            Ok(_) => {
                writeln!(out)?;
                write_history(out, game.history(), max_guesses)?;
                writeln!(out)?;
            }
            Err(rejection) => {
                while game.pop_letter() {}
                if let Some(alert) = rejection_alert(&rejection) {
                    writeln!(out, "{}", format!("{}: {}", alert.title, alert.message).red())?;
                }
            }
        }
    }

    if let Some(alert) = outcome_alert(game.phase(), game.target()) {
        write_banner(out, game.phase(), game.history().len())?;
        let text = format!("{}  {}", alert.title, alert.message);
        let text = if game.phase() == Phase::Won {
            text.green().bold()
        } else {
            text.red().bold()
        };
        writeln!(out, "\n{text}\n")?;
    }

    Ok(game.phase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, WordSet};
    use std::io::Cursor;

    fn new_game(max_guesses: usize) -> Game<WordSet> {
        let config = GameConfig::new(Word::new("glitch").unwrap(), max_guesses).unwrap();
        let words = WordSet::from_strs(6, ["glitch", "branch", "stripe", "switch"]);
        Game::new(config, words).unwrap()
    }

    fn play(game: &mut Game<WordSet>, script: &str) -> (Phase, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let phase = play_lines(game, Cursor::new(script.to_string()), &mut out).unwrap();
        (phase, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_script() {
        let mut game = new_game(6);
        let (phase, text) = play(&mut game, "planet\nglitch\n");

        assert_eq!(phase, Phase::Won);
        assert!(text.contains("System Error: Unknown Command"));
        assert!(text.contains("Decrypted!  Malfunction Resolved"));
        assert!(text.contains("SYSTEM RESTORED"));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn losing_script_reveals_target() {
        let mut game = new_game(3);
        let (phase, text) = play(&mut game, "branch\nstripe\nswitch\n");

        assert_eq!(phase, Phase::Lost);
        assert!(text.contains("Word was GLITCH"));
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn short_and_long_entries_rejected() {
        let mut game = new_game(6);
        let (phase, text) = play(&mut game, "gli\nglitches\n:q\n");

        assert_eq!(phase, Phase::Playing);
        assert!(text.contains("Not enough letters"));
        assert!(text.contains("Too many letters"));
        assert!(game.history().is_empty());
        assert_eq!(game.buffer(), "");
    }

    #[test]
    fn entries_with_non_letters_rejected() {
        let mut game = new_game(6);
        let (phase, text) = play(&mut game, "gl1tch\nbr-nch\n:q\n");

        assert_eq!(phase, Phase::Playing);
        assert_eq!(text.matches("Letters only").count(), 2);
        assert!(!text.contains("Not enough letters"));
        assert!(game.history().is_empty());
    }

    #[test]
    fn end_of_input_stops() {
        let mut game = new_game(6);
        let (phase, _) = play(&mut game, "branch\n");
        assert_eq!(phase, Phase::Playing);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn keyboard_command() {
        let mut game = new_game(6);
        let (_, text) = play(&mut game, ":k\n:q\n");
        assert!(text.contains(" A  S  D "));
    }
}
