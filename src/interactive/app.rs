//! TUI application state and logic

use crate::anim::Tween;
use crate::core::{Evaluation, Verdict, Word};
use crate::round::{InputEvent, Phase, RoundEvent, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};

/// Seconds for one tile to flip during a row reveal
pub const REVEAL_SECONDS_PER_TILE: f32 = 0.15;

const FRAME: Duration = Duration::from_millis(16);

/// Application state
pub struct App<'a> {
    pub session: Session<'a, StdRng>,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    pub should_quit: bool,
}

/// A scored row whose verdicts are being uncovered tile by tile
#[derive(Debug, Clone)]
pub struct Reveal {
    pub row: usize,
    pub tiles: Tween<f32>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a, StdRng>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            reveal: None,
            should_quit: false,
        };
        app.add_message("Type a word and press Enter.", MessageStyle::Info);
        app.announce_level();
        app
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new round cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.session.play_again()?;
                self.reveal = None;
                self.add_message("New round started.", MessageStyle::Info);
            }
            KeyCode::Enter if self.session.round().is_over() => self.continue_after_round()?,
            KeyCode::Enter => self.apply(InputEvent::Submit),
            KeyCode::Backspace => self.apply(InputEvent::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.apply(InputEvent::Letter(c));
            }
            _ => {}
        }

        Ok(())
    }

    fn apply(&mut self, event: InputEvent) {
        // Typing skips the pending reveal
        if self.is_revealing() && event != InputEvent::Backspace {
            self.finish_reveal();
        }

        match self.session.handle(event) {
            RoundEvent::InvalidWord { word } => {
                self.add_message(
                    &format!("'{}' is not in the word list", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            RoundEvent::Scored { row, .. } => self.start_reveal(row),
            RoundEvent::Won { attempts, .. } => {
                self.start_reveal(attempts - 1);
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                let next = if self.session.level_up_available() {
                    "Press Enter for the next level."
                } else {
                    "Press Enter to play again."
                };
                self.add_message(next, MessageStyle::Info);
            }
            RoundEvent::Lost { .. } => {
                self.start_reveal(self.session.round().max_rows() - 1);
                self.add_message(
                    &format!(
                        "Out of guesses! The word was {}",
                        self.session.round().secret().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press Enter to try again.", MessageStyle::Info);
            }
            RoundEvent::Ignored | RoundEvent::Typed { .. } | RoundEvent::Erased { .. } => {}
        }
    }

    fn continue_after_round(&mut self) -> Result<()> {
        let won = matches!(self.session.round().phase(), Phase::Won { .. });
        if won {
            self.session.next_level()?;
        } else {
            self.session.play_again()?;
        }
        self.reveal = None;
        self.announce_level();
        Ok(())
    }

    fn announce_level(&mut self) {
        let text = format!(
            "Level {}: guess the {}-letter word in {} tries.",
            self.session.level() - crate::core::MIN_LEN + 1,
            self.session.level(),
            self.session.round().max_rows()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    fn start_reveal(&mut self, row: usize) {
        let width = self.session.round().width() as f32;
        self.reveal = Some(Reveal {
            row,
            tiles: Tween::new(0.0, width, width * REVEAL_SECONDS_PER_TILE),
        });
    }

    fn finish_reveal(&mut self) {
        self.reveal = None;
    }

    /// Advance animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if let Some(reveal) = &mut self.reveal {
            reveal.tiles.update(dt);
            if reveal.tiles.is_finished() {
                self.reveal = None;
            }
        }
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// How many tiles of `row` show their verdict colors
    #[must_use]
    pub fn revealed_tiles(&self, row: usize) -> usize {
        match &self.reveal {
            Some(reveal) if reveal.row == row => reveal.tiles.value().floor() as usize,
            _ => usize::MAX,
        }
    }

    /// Best known verdict per letter, over fully revealed rows
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<u8, Verdict> {
        let history = self.session.round().history();
        let shown = match &self.reveal {
            Some(reveal) => &history[..reveal.row.min(history.len())],
            None => history,
        };
        letter_hints(shown)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Fold a guess history into the strongest verdict seen per letter
#[must_use]
pub fn letter_hints(history: &[(Word, Evaluation)]) -> FxHashMap<u8, Verdict> {
    let mut hints: FxHashMap<u8, Verdict> = FxHashMap::default();
    for (guess, evaluation) in history {
        for (&letter, &verdict) in guess.letters().iter().zip(evaluation.verdicts()) {
            hints
                .entry(letter)
                .and_modify(|best| {
                    if rank(verdict) > rank(*best) {
                        *best = verdict;
                    }
                })
                .or_insert(verdict);
        }
    }
    hints
}

const fn rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Absent => 0,
        Verdict::Present => 1,
        Verdict::Correct => 2,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key)?;
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::SessionConfig;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{Dictionary, Lexicon};
    use rand::SeedableRng;

    fn lexicon() -> Lexicon {
        Lexicon::new([
            Dictionary::new(
                4,
                words_from_slice(&["lake"]),
                words_from_slice(&["bond", "leak"]),
            ),
            Dictionary::new(
                5,
                words_from_slice(&["allot"]),
                words_from_slice(&["lolly"]),
            ),
        ])
    }

    fn app(lexicon: &Lexicon) -> App<'_> {
        let config = SessionConfig {
            start_length: 4,
            rows: 2,
        };
        let session = Session::new(lexicon, config, StdRng::seed_from_u64(2)).unwrap();
        App::new(session)
    }

    fn press(app: &mut App<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_fills_the_board() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        press(&mut app, KeyCode::Char('B'));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.session.board().row_text(0), "bo");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.board().row_text(0), "b");
    }

    #[test]
    fn scored_row_reveals_over_time() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        type_word(&mut app, "leak");

        assert!(app.is_revealing());
        assert_eq!(app.revealed_tiles(0), 0);
        assert_eq!(app.revealed_tiles(1), usize::MAX);
        assert!(app.letter_hints().is_empty());

        app.tick(REVEAL_SECONDS_PER_TILE * 2.5);
        assert_eq!(app.revealed_tiles(0), 2);

        app.tick(1.0);
        assert!(!app.is_revealing());
        assert_eq!(app.letter_hints().get(&b'l'), Some(&Verdict::Correct));
        assert_eq!(app.letter_hints().get(&b'e'), Some(&Verdict::Present));
    }

    #[test]
    fn typing_skips_pending_reveal() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        type_word(&mut app, "bond");
        assert!(app.is_revealing());

        press(&mut app, KeyCode::Char('l'));
        assert!(!app.is_revealing());
        assert_eq!(app.session.board().row_text(1), "l");
    }

    #[test]
    fn invalid_word_shows_message() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        type_word(&mut app, "zzzz");

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("ZZZZ"));
        assert!(app.session.round().invalid_word());
    }

    #[test]
    fn enter_after_win_moves_to_next_level() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        type_word(&mut app, "lake");
        assert!(app.session.round().is_over());
        assert_eq!(
            app.messages.last().unwrap().text,
            "Press Enter for the next level."
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.level(), 5);
        assert!(!app.is_revealing());
    }

    #[test]
    fn enter_after_loss_replays_level() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        type_word(&mut app, "bond");
        type_word(&mut app, "leak");
        assert_eq!(app.session.round().phase(), Phase::Lost);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.level(), 4);
        assert_eq!(app.session.stats().total_games, 1);
        assert!(!app.session.round().is_over());
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app(&lexicon);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.session.board().row_text(0), "");
    }

    #[test]
    fn hints_keep_strongest_verdict() {
        let secret = Word::new("lake").unwrap();
        let history: Vec<(Word, Evaluation)> = ["leak", "lake"]
            .iter()
            .map(|g| {
                let guess = Word::new(g).unwrap();
                let evaluation = Evaluation::calculate(&guess, &secret);
                (guess, evaluation)
            })
            .collect();

        let hints = letter_hints(&history);
        assert_eq!(hints.get(&b'e'), Some(&Verdict::Correct));
        assert_eq!(hints.get(&b'k'), Some(&Verdict::Correct));
        assert_eq!(hints.get(&b'z'), None);
    }

    #[test]
    fn message_log_is_bounded() {
        let lexicon = lexicon();
        let mut app = app(&lexicon);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
