//! Coloured terminal output for the line-mode front-ends

use super::formatters::{BannerLevel, status_banner};
use crate::commands::CheckResult;
use crate::core::{EvaluatedGuess, KeyboardStatus, LetterStatus};
use crate::game::Phase;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Paint one letter the way its status is shown on the board
///
/// Correct letters are yellow and misplaced ones green.
#[must_use]
pub fn paint_letter(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let cell = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => cell.black().on_yellow().bold(),
        Some(LetterStatus::Present) => cell.black().on_green().bold(),
        Some(LetterStatus::Absent) => cell.bright_black(),
        Some(LetterStatus::Active) => cell.white().on_magenta(),
        Some(LetterStatus::Empty) | None => cell.white(),
    }
}

/// Paint a submitted guess as a row of cells
#[must_use]
pub fn paint_guess(guess: &EvaluatedGuess) -> String {
    guess
        .letters()
        .map(|(letter, status)| paint_letter(char::from(letter), Some(status)).to_string())
        .collect()
}

/// Write the numbered history, one row per guess
///
/// # Errors
/// Returns any error from the writer.
pub fn write_history<W: Write>(
    out: &mut W,
    history: &[EvaluatedGuess],
    max_guesses: usize,
) -> io::Result<()> {
    for (i, guess) in history.iter().enumerate() {
        writeln!(
            out,
            "  {}/{max_guesses}  {}  {}",
            i + 1,
            paint_guess(guess),
            guess.feedback().to_emoji()
        )?;
    }
    Ok(())
}

/// Write the keyboard with every guessed letter coloured
///
/// # Errors
/// Returns any error from the writer.
pub fn write_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardStatus) -> io::Result<()> {
    for (indent, row) in super::formatters::KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|letter| paint_letter(letter, keyboard.get(letter)).to_string())
            .collect();
        writeln!(out, "  {}{keys}", " ".repeat(indent))?;
    }
    Ok(())
}

/// Write the status banner for the current phase
///
/// # Errors
/// Returns any error from the writer.
pub fn write_banner<W: Write>(out: &mut W, phase: Phase, guesses_used: usize) -> io::Result<()> {
    let (text, level) = status_banner(phase, guesses_used);
    let banner = format!("  {text}  ");
    let banner = match level {
        BannerLevel::Normal => banner.black().on_green(),
        BannerLevel::Warning => banner.black().on_yellow(),
        BannerLevel::Critical | BannerLevel::Failure => banner.white().on_magenta().bold(),
    };
    writeln!(out, "{banner}")
}

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against a {}-letter target",
        result.guess.word().text().bright_yellow().bold(),
        result.guess.word().len()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}  {}", paint_guess(&result.guess), result.guess.feedback().to_emoji());

    if !result.in_dictionary {
        println!("\n{}", "Note: not in the dictionary, the game would refuse it".yellow());
    }

    if result.guess.is_solved() {
        println!("\n{}", "✅ That is the word!".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn history_rows_are_numbered() {
        colored::control::set_override(false);
        let target = Word::new("glitch").unwrap();
        let history = vec![
            EvaluatedGuess::new(Word::new("switch").unwrap(), &target),
            EvaluatedGuess::new(Word::new("glitch").unwrap(), &target),
        ];

        let mut out = Vec::new();
        write_history(&mut out, &history, 6).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1/6"));
        assert!(text.contains("2/6"));
        assert!(text.contains(" S  W  I  T  C  H "));
        assert!(text.contains("🟨🟨🟨🟨🟨🟨"));
    }

    #[test]
    fn keyboard_lists_all_rows() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_keyboard(&mut out, &KeyboardStatus::new()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), 3);
        assert!(text.contains(" Q  W  E "));
        assert!(text.contains(" Z  X  C "));
    }

    #[test]
    fn banner_text() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_banner(&mut out, Phase::Lost, 6).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("SYSTEM MALFUNCTION"));
    }
}
