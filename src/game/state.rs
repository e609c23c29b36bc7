//! Turn-based game state machine
//!
//! [`Game`] owns the current guess buffer, the guess history and the keyboard
//! map. Front-ends drive it with discrete inputs and read it back through
//! shared references; it knows nothing about time or rendering.

use super::config::{ConfigError, GameConfig};
use super::dictionary::Dictionary;
use crate::core::{EvaluatedGuess, KeyboardStatus, Word};
use thiserror::Error;
use tracing::{debug, info};

/// Lifecycle stage of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost are terminal
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Submit,
}

/// Why a submission (or any input after the end) was refused
///
/// A rejection never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters")]
    IncompleteGuess { expected: usize, found: usize },
    #[error("Unknown word")]
    UnknownWord(String),
    #[error("Game is already over")]
    GameOver,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub guess: EvaluatedGuess,
    /// Phase after this guess
    pub phase: Phase,
}

/// Notification sent to subscribers after state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent<'a> {
    /// A guess was accepted; `number` counts from 1
    Guessed {
        number: usize,
        guess: &'a EvaluatedGuess,
    },
    Won {
        guesses: usize,
    },
    Lost,
}

type Observer = Box<dyn FnMut(&GameEvent<'_>)>;

/// One game against a fixed target
pub struct Game<D> {
    config: GameConfig,
    dictionary: D,
    phase: Phase,
    history: Vec<EvaluatedGuess>,
    buffer: String,
    keyboard: KeyboardStatus,
    observers: Vec<Observer>,
}

impl<D: Dictionary> Game<D> {
    /// Start a new game
    ///
    /// # Errors
    /// Returns `ConfigError` if the dictionary is empty or does not contain the
    /// target, since such a game could never be won.
    ///
    /// # Examples
    /// ```
    /// use glitch_wordle::core::Word;
    /// use glitch_wordle::game::{Game, GameConfig, Phase, WordSet};
    ///
    /// let config = GameConfig::new(Word::new("glitch").unwrap(), 6).unwrap();
    /// let mut game = Game::new(config, WordSet::from_strs(6, ["glitch"])).unwrap();
    ///
    /// "glitch".chars().for_each(|ch| {
    ///     game.push_letter(ch);
    /// });
    /// let submission = game.submit().unwrap();
    /// assert_eq!(submission.phase, Phase::Won);
    /// ```
    pub fn new(config: GameConfig, dictionary: D) -> Result<Self, ConfigError> {
        if dictionary.is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        if !dictionary.contains(config.target().text()) {
            return Err(ConfigError::TargetNotInDictionary(
                config.target().text().to_string(),
            ));
        }

        info!(
            word_len = config.word_len(),
            max_guesses = config.max_guesses(),
            "game started"
        );

        Ok(Self {
            history: Vec::with_capacity(config.max_guesses()),
            buffer: String::with_capacity(config.word_len()),
            config,
            dictionary,
            phase: Phase::Playing,
            keyboard: KeyboardStatus::new(),
            observers: Vec::new(),
        })
    }

    /// Register a callback for accepted guesses and terminal transitions
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent<'_>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Append a letter to the current guess
    ///
    /// Ignored once the game is over, when the buffer is full, or for
    /// anything but an ASCII letter. Returns whether the buffer changed.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.phase.is_over()
            || self.buffer.len() >= self.config.word_len()
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.buffer.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the current guess
    ///
    /// Ignored once the game is over or when the buffer is empty.
    pub fn pop_letter(&mut self) -> bool {
        if self.phase.is_over() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the current guess
    ///
    /// # Errors
    /// Checked in order, each leaving the game untouched:
    /// - `Rejection::GameOver` if the game has ended
    /// - `Rejection::IncompleteGuess` if the buffer is not full
    /// - `Rejection::UnknownWord` if the dictionary does not contain it
    pub fn submit(&mut self) -> Result<Submission, Rejection> {
        if self.phase.is_over() {
            return Err(Rejection::GameOver);
        }

        let expected = self.config.word_len();
        if self.buffer.len() != expected {
            debug!(found = self.buffer.len(), expected, "incomplete guess");
            return Err(Rejection::IncompleteGuess {
                expected,
                found: self.buffer.len(),
            });
        }

        if !self.dictionary.contains(&self.buffer) {
            debug!(guess = %self.buffer, "unknown word");
            return Err(Rejection::UnknownWord(self.buffer.clone()));
        }

        // Buffer holds only ASCII letters, so this cannot fail in practice
        let word =
            Word::new(&self.buffer).map_err(|_| Rejection::UnknownWord(self.buffer.clone()))?;
        let guess = EvaluatedGuess::new(word, self.config.target());

        self.keyboard.record(&guess);
        self.history.push(guess.clone());
        self.buffer.clear();

        // Loss is checked after the append: the last allowed guess can still win
        self.phase = if guess.is_solved() {
            Phase::Won
        } else if self.history.len() >= self.config.max_guesses() {
            Phase::Lost
        } else {
            Phase::Playing
        };

        info!(
            number = self.history.len(),
            solved = guess.is_solved(),
            phase = ?self.phase,
            "guess accepted"
        );
        self.notify(&guess);

        Ok(Submission {
            guess,
            phase: self.phase,
        })
    }

    /// Route one input event to the matching operation
    ///
    /// Letter and backspace inputs that change nothing are not errors.
    ///
    /// # Errors
    /// Returns `Rejection::GameOver` for any input after the game has ended,
    /// and whatever [`Game::submit`] returns for `Input::Submit`.
    pub fn apply(&mut self, input: Input) -> Result<Option<Submission>, Rejection> {
        if self.phase.is_over() {
            return Err(Rejection::GameOver);
        }

        match input {
            Input::Letter(letter) => {
                self.push_letter(letter);
                Ok(None)
            }
            Input::Backspace => {
                self.pop_letter();
                Ok(None)
            }
            Input::Submit => self.submit().map(Some),
        }
    }

    fn notify(&mut self, guess: &EvaluatedGuess) {
        if self.observers.is_empty() {
            return;
        }

        let number = self.history.len();
        let mut events = vec![GameEvent::Guessed { number, guess }];
        match self.phase {
            Phase::Won => events.push(GameEvent::Won { guesses: number }),
            Phase::Lost => events.push(GameEvent::Lost),
            Phase::Playing => {}
        }

        for observer in &mut self.observers {
            for event in &events {
                observer(event);
            }
        }
    }
}

impl<D> Game<D> {
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Accepted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[EvaluatedGuess] {
        &self.history
    }

    /// Letters typed for the next guess
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The target word; front-ends reveal it only after a loss
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        self.config.target()
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.config.max_guesses().saturating_sub(self.history.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::WordSet;
    use std::cell::RefCell;
    use std::rc::Rc;

    const WORDS: &[&str] = &[
        "glitch", "branch", "stripe", "frozen", "marble", "castle", "pillow",
    ];

    fn new_game() -> Game<WordSet> {
        let config = GameConfig::new(Word::new("glitch").unwrap(), 6).unwrap();
        Game::new(config, WordSet::from_strs(6, WORDS.iter().copied())).unwrap()
    }

    fn type_word<D: Dictionary>(game: &mut Game<D>, word: &str) {
        for ch in word.chars() {
            game.push_letter(ch);
        }
    }

    fn guess<D: Dictionary>(game: &mut Game<D>, word: &str) -> Result<Submission, Rejection> {
        type_word(game, word);
        game.submit()
    }

    #[test]
    fn starts_playing_and_empty() {
        let game = new_game();
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.history().is_empty());
        assert_eq!(game.buffer(), "");
        assert!(game.keyboard().is_empty());
        assert_eq!(game.guesses_remaining(), 6);
    }

    #[test]
    fn unknown_word_then_win_scenario() {
        let mut game = new_game();

        type_word(&mut game, "PLANET");
        assert_eq!(game.buffer(), "PLANET");

        assert_eq!(
            game.submit(),
            Err(Rejection::UnknownWord("PLANET".to_string()))
        );
        assert_eq!(game.buffer(), "PLANET");
        assert!(game.history().is_empty());

        for _ in 0..6 {
            assert!(game.pop_letter());
        }
        let submission = guess(&mut game, "GLITCH").unwrap();

        assert_eq!(submission.phase, Phase::Won);
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.history().len(), 1);
        assert_eq!(
            game.history()[0].feedback().count(LetterStatus::Correct),
            6
        );

        assert!(!game.push_letter('A'));
        assert_eq!(game.buffer(), "");
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn loss_after_exactly_max_guesses() {
        let mut game = new_game();
        let misses = ["branch", "stripe", "frozen", "marble", "castle"];

        for (i, word) in misses.iter().enumerate() {
            let submission = guess(&mut game, word).unwrap();
            assert_eq!(submission.phase, Phase::Playing, "lost early at guess {}", i + 1);
        }
        assert_eq!(game.guesses_remaining(), 1);

        let last = guess(&mut game, "pillow").unwrap();
        assert_eq!(last.phase, Phase::Lost);
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.guesses_remaining(), 0);
    }

    #[test]
    fn last_guess_can_still_win() {
        let mut game = new_game();
        for word in ["branch", "stripe", "frozen", "marble", "castle"] {
            guess(&mut game, word).unwrap();
        }
        assert_eq!(guess(&mut game, "glitch").unwrap().phase, Phase::Won);
    }

    #[test]
    fn buffer_is_bounded() {
        let mut game = new_game();
        type_word(&mut game, "branch");
        assert!(!game.push_letter('X'));
        assert_eq!(game.buffer().len(), 6);
        assert_eq!(game.buffer(), "BRANCH");
    }

    #[test]
    fn non_letters_ignored_and_case_normalized() {
        let mut game = new_game();
        assert!(!game.push_letter('1'));
        assert!(!game.push_letter(' '));
        assert!(!game.push_letter('é'));
        assert!(game.push_letter('g'));
        assert_eq!(game.buffer(), "G");
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut game = new_game();
        assert!(!game.pop_letter());
        assert_eq!(game.buffer(), "");
    }

    #[test]
    fn incomplete_guess_rejected_without_change() {
        let mut game = new_game();
        type_word(&mut game, "gli");
        assert_eq!(
            game.submit(),
            Err(Rejection::IncompleteGuess {
                expected: 6,
                found: 3
            })
        );
        assert_eq!(game.buffer(), "GLI");
        assert!(game.history().is_empty());
        assert!(game.keyboard().is_empty());
    }

    #[test]
    fn incomplete_checked_before_dictionary() {
        let mut game = new_game();
        type_word(&mut game, "zz");
        assert!(matches!(
            game.submit(),
            Err(Rejection::IncompleteGuess { .. })
        ));
    }

    #[test]
    fn accepted_guess_updates_keyboard_and_clears_buffer() {
        let mut game = new_game();
        let submission = guess(&mut game, "stripe").unwrap();

        assert_eq!(submission.guess.feedback().to_string(), "-P-P--");
        assert_eq!(game.buffer(), "");
        assert_eq!(game.keyboard().get('T'), Some(LetterStatus::Present));
        assert_eq!(game.keyboard().get('S'), Some(LetterStatus::Absent));
        assert_eq!(game.guesses_remaining(), 5);
    }

    #[test]
    fn inputs_after_end_are_ignored() {
        let mut game = new_game();
        guess(&mut game, "glitch").unwrap();

        assert_eq!(game.submit(), Err(Rejection::GameOver));
        assert!(!game.pop_letter());
        assert_eq!(game.apply(Input::Letter('a')), Err(Rejection::GameOver));
        assert_eq!(game.apply(Input::Backspace), Err(Rejection::GameOver));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.buffer(), "");
    }

    #[test]
    fn apply_routes_inputs() {
        let mut game = new_game();
        for ch in "branchx".chars() {
            assert_eq!(game.apply(Input::Letter(ch)), Ok(None));
        }
        assert_eq!(game.buffer(), "BRANCH");

        game.apply(Input::Backspace).unwrap();
        assert_eq!(game.buffer(), "BRANC");
        assert!(game.apply(Input::Submit).is_err());

        game.apply(Input::Letter('h')).unwrap();
        let submission = game.apply(Input::Submit).unwrap().unwrap();
        assert_eq!(submission.phase, Phase::Playing);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn observers_see_guesses_and_terminal_event() {
        let mut game = new_game();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        game.subscribe(move |event| {
            let label = match event {
                GameEvent::Guessed { number, guess } => format!("{number}:{}", guess.word()),
                GameEvent::Won { guesses } => format!("won in {guesses}"),
                GameEvent::Lost => "lost".to_string(),
            };
            sink.borrow_mut().push(label);
        });

        type_word(&mut game, "planet");
        let _ = game.submit();
        for _ in 0..6 {
            game.pop_letter();
        }
        guess(&mut game, "branch").unwrap();
        guess(&mut game, "glitch").unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["1:BRANCH", "2:GLITCH", "won in 2"]
        );
    }

    #[test]
    fn rejection_messages() {
        let mut game = new_game();
        type_word(&mut game, "GLI");
        assert_eq!(game.submit().unwrap_err().to_string(), "Not enough letters");

        type_word(&mut game, "NET");
        assert_eq!(game.buffer(), "GLINET");
        assert_eq!(game.submit().unwrap_err().to_string(), "Unknown word");
        assert_eq!(Rejection::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn construction_validates_dictionary() {
        let config = GameConfig::new(Word::new("glitch").unwrap(), 6).unwrap();
        assert_eq!(
            Game::new(config.clone(), WordSet::from_strs(6, Vec::<&str>::new())).err(),
            Some(ConfigError::EmptyDictionary)
        );
        assert_eq!(
            Game::new(config, WordSet::from_strs(6, ["branch"])).err(),
            Some(ConfigError::TargetNotInDictionary("GLITCH".to_string()))
        );
    }
}
