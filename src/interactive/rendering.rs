//! TUI rendering with ratatui
//!
//! Status banner, clock, guess grid, keyboard and the floating alert.

use super::app::{App, GridRow, grid_rows};
use crate::core::{KeyboardStatus, LetterStatus};
use crate::game::Phase;
use crate::output::formatters::{
    BannerLevel, KEYBOARD_ROWS, create_progress_bar, format_elapsed, status_banner,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::time::Instant;

const GOLD: Color = Color::Rgb(255, 215, 0);
const MINT: Color = Color::Rgb(80, 250, 123);
const PINK: Color = Color::Rgb(255, 0, 127);
const NIGHT: Color = Color::Rgb(42, 27, 78);
const PLUM: Color = Color::Rgb(72, 52, 117);
const VIOLET: Color = Color::Rgb(125, 76, 219);
const SLATE: Color = Color::Rgb(55, 65, 81);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let grid_lines = grid_height(app.game.config().max_guesses());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),       // Status banner
            Constraint::Length(3),       // Header
            Constraint::Length(3),       // Guesses + clock
            Constraint::Min(grid_lines), // Grid
            Constraint::Length(1),       // Legend
            Constraint::Length(7),       // Keyboard
            Constraint::Length(1),       // Help line
        ])
        .split(f.area());

    render_banner(f, app, chunks[0]);
    render_header(f, chunks[1]);
    render_stats(f, app, chunks[2], now);
    render_grid(f, &grid_rows(&app.game), chunks[3]);
    f.render_widget(
        Paragraph::new(legend_line()).alignment(Alignment::Center),
        chunks[4],
    );
    render_keyboard(f, app.game.keyboard(), chunks[5]);
    render_help(f, app, chunks[6]);

    render_notice(f, app);
}

/// Lines the grid needs: each row is one line of cells plus a spacer
fn grid_height(max_guesses: usize) -> u16 {
    u16::try_from(max_guesses.saturating_mul(2).saturating_add(1)).unwrap_or(u16::MAX)
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let (text, level) = status_banner(app.game.phase(), app.game.history().len());
    let style = match level {
        BannerLevel::Normal => Style::default().fg(Color::Black).bg(MINT),
        BannerLevel::Warning => Style::default().fg(Color::Black).bg(GOLD),
        BannerLevel::Critical | BannerLevel::Failure => Style::default()
            .fg(Color::White)
            .bg(PINK)
            .add_modifier(Modifier::SLOW_BLINK),
    };

    let banner = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

fn render_header(f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("GAME", Style::default().fg(Color::White)),
        Span::styled("SHIFT", Style::default().fg(PINK)),
        Span::raw("  "),
        Span::styled("Wordle Finale", Style::default().fg(Color::Rgb(224, 176, 255))),
    ]);

    let header = Paragraph::new(title)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(VIOLET)),
        );
    f.render_widget(header, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let used = app.game.history().len();
    let max_guesses = app.game.config().max_guesses();
    let guesses = Paragraph::new(format!(
        "{} {used}/{max_guesses}",
        create_progress_bar(used, max_guesses, max_guesses)
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(PINK)),
    );
    f.render_widget(guesses, chunks[0]);

    let clock = Paragraph::new(format_elapsed(app.elapsed(now).as_secs()))
        .style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(GOLD)),
        );
    f.render_widget(clock, chunks[1]);
}

fn cell_style(status: LetterStatus, current_row: bool) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(GOLD)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(MINT)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::DarkGray).bg(NIGHT),
        LetterStatus::Active => Style::default()
            .fg(Color::White)
            .bg(PINK)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Empty if current_row => Style::default().bg(PLUM),
        LetterStatus::Empty => Style::default().bg(Color::Rgb(20, 14, 38)),
    }
}

fn render_grid(f: &mut Frame, rows: &[GridRow], area: Rect) {
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        let mut spans = Vec::with_capacity(row.cells.len() * 2);
        for cell in &row.cells {
            let letter = cell.letter.unwrap_or(' ');
            spans.push(Span::styled(
                format!("  {letter}  "),
                cell_style(cell.status, row.current),
            ));
            spans.push(Span::raw(" "));
        }
        spans.pop();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .style(Style::default().fg(VIOLET)),
    );
    f.render_widget(grid, area);
}

/// Colour key for the grid
fn legend_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("   ", Style::default().bg(GOLD)),
        Span::styled(" Correct", Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled("   ", Style::default().bg(MINT)),
        Span::styled(" Wrong Pos", Style::default().fg(Color::White)),
    ])
}

fn key_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(GOLD),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(MINT),
        Some(LetterStatus::Absent) => Style::default().fg(Color::DarkGray).bg(SLATE),
        _ => Style::default().fg(Color::White).bg(VIOLET),
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardStatus, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        if i == last {
            spans.push(Span::styled(
                " ENTER ",
                Style::default().fg(Color::White).bg(PINK),
            ));
            spans.push(Span::raw(" "));
        }
        for letter in row.chars() {
            spans.push(Span::styled(
                format!(" {letter} "),
                key_style(keyboard.get(letter)),
            ));
            spans.push(Span::raw(" "));
        }
        if i == last {
            spans.push(Span::styled(
                " ⌫ ",
                Style::default().fg(Color::White).bg(PLUM),
            ));
        } else {
            spans.pop();
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let keys = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .style(Style::default().fg(Color::Black)),
    );
    f.render_widget(keys, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.game.phase() {
        Phase::Playing => "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
        Phase::Won | Phase::Lost => "Enter/q: Quit",
    };
    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_notice(f: &mut Frame, app: &App) {
    let Some(notice) = app.notice() else {
        return;
    };

    let width = (notice.message.len().max(notice.title.len()) + 8) as u16;
    let area = centered_rect(width, 4, f.area());

    let content = vec![
        Line::from(Span::styled(
            notice.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            notice.message.to_uppercase(),
            Style::default().fg(PINK),
        )),
    ];

    let alert = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(PINK).bg(Color::Black)),
    );

    f.render_widget(Clear, area);
    f.render_widget(alert, area);
}

/// Rectangle of at most `width` x `height`, centred horizontally, a third of the way down
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 3,
        width,
        height,
    }
}
