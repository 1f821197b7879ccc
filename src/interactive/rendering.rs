//! TUI rendering with ratatui
//!
//! Draws the tile board, an on-screen keyboard with letter hints, session
//! statistics and the message log.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::round::{Phase, TilePos, TileState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🔤 WORD GAME - {} letters", app.session.round().width());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let round = app.session.round();
    let active_row = (!round.is_over()).then(|| round.row());

    let mut lines = vec![Line::from("")];
    for row in 0..board.rows() {
        let revealed = app.revealed_tiles(row);
        let mut spans = Vec::with_capacity(board.cols() * 2);

        for col in 0..board.cols() {
            let Some(tile) = board.tile(TilePos::new(row, col)) else {
                continue;
            };
            let letter = tile.letter.map_or('·', |c| c.to_ascii_uppercase());

            let style = match tile.state {
                TileState::Judged(verdict) if col < revealed => verdict_style(verdict),
                TileState::Judged(_) | TileState::Occupied => {
                    let fg = if active_row == Some(row) && round.invalid_word() {
                        Color::Red
                    } else {
                        Color::White
                    };
                    Style::default()
                        .fg(fg)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                }
                TileState::Empty => Style::default().fg(Color::DarkGray),
            };

            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let title = match round.phase() {
        Phase::AwaitingInput => format!(" Guess {}/{} ", round.row() + 1, round.max_rows()),
        Phase::Won { attempts } => format!(" Solved in {attempts} "),
        Phase::Lost => format!(" {} ", round.secret().text().to_uppercase()),
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(6),    // Statistics
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_keyboard(f, &app.letter_hints(), chunks[0]);
    render_win_rate(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_keyboard(f: &mut Frame, hints: &FxHashMap<u8, Verdict>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let style = hints.get(&letter).map_or_else(
                        || Style::default().fg(Color::White),
                        |&verdict| verdict_style(verdict),
                    );
                    Span::styled(format!("{}", letter.to_ascii_uppercase() as char), style)
                })
                .flat_map(|key| [key, Span::raw(" ")])
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let gauge = Gauge::default()
        .block(Block::default().title(" Win Rate ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(stats.win_rate().clamp(0.0, 100.0) as u16)
        .label(format!(
            "{:.0}% of {} games",
            stats.win_rate(),
            stats.total_games
        ));
    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let rows = app.session.round().max_rows();
    let most = stats
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    let mut lines = vec![Line::from(format!(
        "Streak: {}   Best: {}",
        stats.current_streak, stats.max_streak
    ))];

    for attempts in 1..=rows {
        let count = stats.wins_in(attempts);
        let width = count * 16 / most;
        lines.push(Line::from(vec![
            Span::raw(format!("{attempts}: ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let level = Paragraph::new(format!("Level: {} letters", app.session.level()))
        .alignment(Alignment::Center);
    f.render_widget(level, chunks[0]);

    let help_text = if app.session.round().is_over() {
        "Enter: Continue | Tab: New Round | Esc: Quit"
    } else {
        "Type letters | Backspace: Erase | Enter: Submit | Tab: New Round | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
