//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{CODE_LENGTH, Color};
use crate::game::{PickSource, Round, SubmitOutcome};
use crate::output::formatters::{feedback_summary, guess_count_label};
use crate::scores::{ScoreBoard, ScoreRecord, ScoreSink};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub round: Round,
    /// Slot of the editable row that keys act on
    pub cursor: usize,
    pub scores: ScoreBoard,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    source: Box<dyn PickSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_started: usize,
    pub rounds_won: usize,
    pub total_guesses: u32,
}

impl Statistics {
    /// Average guesses over won rounds
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.rounds_won > 0).then(|| f64::from(self.total_guesses) / self.rounds_won as f64)
    }
}

impl App {
    /// Create the app with the random source the config describes
    ///
    /// # Errors
    ///
    /// Returns an error if the configured palette is too small for a round.
    pub fn new(config: GameConfig) -> Result<Self> {
        let source = config.pick_source();
        Self::with_source(config, source)
    }

    /// Create the app with an explicit random source
    ///
    /// # Errors
    ///
    /// Returns an error if the configured palette is too small for a round.
    pub fn with_source(config: GameConfig, mut source: Box<dyn PickSource>) -> Result<Self> {
        let round = Round::with_source(config.palette.clone(), source.as_mut())
            .context("cannot start a round")?;

        let mut app = Self {
            config,
            round,
            cursor: 0,
            scores: ScoreBoard::new(),
            messages: Vec::new(),
            stats: Statistics {
                rounds_started: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Editing,
            source,
        };
        app.add_message("Welcome! Crack the hidden 4-color code.", MessageStyle::Info);
        app.add_message(
            "Space cycles a slot, a color letter sets it, Enter submits.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = (self.cursor + CODE_LENGTH - 1) % CODE_LENGTH;
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1) % CODE_LENGTH;
    }

    /// Cycle the slot under the cursor to its next unused color
    pub fn cycle_current_slot(&mut self) {
        if let Some(row) = self.round.active_row() {
            self.round.cycle_color(row, self.cursor);
        }
    }

    /// Set the slot under the cursor and move to the next slot
    pub fn set_current_slot(&mut self, color: Color) {
        if !self.round.palette().contains(color) {
            self.add_message(
                &format!("{color} is not in this round's palette"),
                MessageStyle::Error,
            );
            return;
        }

        if let Some(row) = self.round.active_row()
            && self.round.select_color(row, self.cursor, color)
        {
            self.cursor = (self.cursor + 1).min(CODE_LENGTH - 1);
        }
    }

    pub fn submit(&mut self) {
        let Some(row) = self.round.active_row() else {
            return;
        };

        match self.round.submit_guess(row) {
            SubmitOutcome::Ignored => {
                self.add_message("Fill every slot before submitting!", MessageStyle::Error);
            }
            SubmitOutcome::Continue(feedback) => {
                self.cursor = 0;
                self.add_message(
                    &format!("Guess {}: {}", row + 1, feedback_summary(&feedback)),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won(score) => {
                self.stats.rounds_won += 1;
                self.stats.total_guesses += score.final_score;
                self.scores.record(ScoreRecord::new(
                    self.config.player.clone(),
                    self.round.palette().len(),
                    score,
                ));
                self.input_mode = InputMode::WinCelebration;

                let celebration = match score.final_score {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4..=5 => "👏 GREAT JOB! 👏",
                    _ => "🎊 CRACKED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!("Solved in {}", guess_count_label(score.final_score)),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new round or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_round(&mut self) {
        match self
            .round
            .restart_with(self.config.palette.clone(), self.source.as_mut())
        {
            Ok(()) => {
                self.cursor = 0;
                self.stats.rounds_started += 1;
                self.input_mode = InputMode::Editing;
                self.messages.clear();
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
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

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
            InputMode::Editing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right | KeyCode::Tab => self.move_cursor_right(),
                KeyCode::Char(' ') | KeyCode::Up => self.cycle_current_slot(),
                KeyCode::Enter => self.submit(),
                KeyCode::Char(c) => match Color::from_code(c) {
                    Some(color) => self.set_current_slot(color),
                    None => self.add_message(
                        &format!("'{c}' is not a color code"),
                        MessageStyle::Error,
                    ),
                },
                _ => {}
            },
        }
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

    if let Err(err) = res {
        tracing::error!(error = %err, "tui stopped");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
