//! TUI application state and logic

use crate::core::LetterStatus;
use crate::game::{Game, GameEvent, Input, Phase, WordSet};
use crate::output::formatters::{AlertText, outcome_alert, rejection_alert};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Transient alert with its own expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

/// One grid row; `current` marks the row being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub cells: Vec<Cell>,
    pub current: bool,
}

/// Build the full grid: submitted rows, the row being typed, then empty rows
#[must_use]
pub fn grid_rows<D>(game: &Game<D>) -> Vec<GridRow> {
    let word_len = game.config().word_len();
    let max_guesses = game.config().max_guesses();
    let mut rows: Vec<GridRow> = game
        .history()
        .iter()
        .map(|guess| GridRow {
            cells: guess
                .letters()
                .map(|(letter, status)| Cell {
                    letter: Some(char::from(letter)),
                    status,
                })
                .collect(),
            current: false,
        })
        .collect();

    if game.phase() == Phase::Playing && rows.len() < max_guesses {
        let typed: Vec<char> = game.buffer().chars().collect();
        let cells = (0..word_len)
            .map(|i| match typed.get(i) {
                Some(&letter) => Cell {
                    letter: Some(letter),
                    status: LetterStatus::Active,
                },
                None => Cell {
                    letter: None,
                    status: LetterStatus::Empty,
                },
            })
            .collect();
        rows.push(GridRow {
            cells,
            current: true,
        });
    }

    while rows.len() < max_guesses {
        rows.push(GridRow {
            cells: vec![
                Cell {
                    letter: None,
                    status: LetterStatus::Empty,
                };
                word_len
            ],
            current: false,
        });
    }

    rows
}

/// Application state
pub struct App {
    pub game: Game<WordSet>,
    pub should_quit: bool,
    started: Instant,
    finished: Option<Duration>,
    notice: Option<Notice>,
    notice_ttl: Duration,
    tick_rate: Duration,
}

impl App {
    #[must_use]
    pub fn new(mut game: Game<WordSet>, notice_ttl: Duration, tick_rate: Duration) -> Self {
        let started = Instant::now();

        // Stand-in for reporting a solved puzzle to the event server
        game.subscribe(move |event| match event {
            GameEvent::Won { guesses } => {
                info!(
                    guesses,
                    elapsed_secs = started.elapsed().as_secs(),
                    "puzzle solved"
                );
            }
            GameEvent::Lost => info!("puzzle failed"),
            GameEvent::Guessed { .. } => {}
        });

        Self {
            game,
            should_quit: false,
            started,
            finished: None,
            notice: None,
            notice_ttl,
            tick_rate,
        }
    }

    /// Time on the clock; stops when the game ends
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.finished
            .unwrap_or_else(|| now.saturating_duration_since(self.started))
    }

    /// Current alert; [`App::tick`] clears it once expired
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Drop the alert once its time is up; never touches the game
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|notice| notice.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Feed one input to the game and raise the matching alert
    pub fn handle_input(&mut self, input: Input, now: Instant) {
        match self.game.apply(input) {
            Ok(Some(submission)) => {
                if submission.phase.is_over() {
                    self.finished = Some(now.saturating_duration_since(self.started));
                }
                if let Some(alert) = outcome_alert(submission.phase, self.game.target()) {
                    self.post_notice(alert, now);
                }
            }
            Ok(None) => {}
            Err(rejection) => {
                if let Some(alert) = rejection_alert(&rejection) {
                    self.post_notice(alert, now);
                }
            }
        }
    }

    /// Map a key press to an input, or quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') | KeyCode::Enter if self.game.phase().is_over() => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.handle_input(Input::Submit, now),
            KeyCode::Backspace => self.handle_input(Input::Backspace, now),
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key.modifiers.intersects(
                        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                    ) =>
            {
                self.handle_input(Input::Letter(c), now);
            }
            _ => {}
        }
    }

    /// Replace any pending alert and restart the countdown
    fn post_notice(&mut self, alert: AlertText, now: Instant) {
        self.notice = Some(Notice {
            title: alert.title,
            message: alert.message,
            expires_at: now + self.notice_ttl,
        });
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, drawing or event reading fails.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.tick_rate())?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
