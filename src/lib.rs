//! Mastermind
//!
//! A code-breaking puzzle: guess the hidden sequence of four colors.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Color, Palette};
//! use mastermind::game::{FinalScore, Round, ScriptedPicks, SubmitOutcome};
//!
//! // Secret drawn from palette positions 0, 1, 2, 3: Red, Green, Blue, Yellow
//! let palette = Palette::standard(6).unwrap();
//! let mut round = Round::with_source(palette, &mut ScriptedPicks::new([0, 1, 2, 3])).unwrap();
//!
//! let guess = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
//! for (slot, color) in guess.into_iter().enumerate() {
//!     round.select_color(0, slot, color);
//! }
//! assert_eq!(
//!     round.submit_guess(0),
//!     SubmitOutcome::Won(FinalScore { final_score: 1 })
//! );
//! ```

// Core domain types
pub mod core;

// Secret generation, color cycling and round flow
pub mod game;

// Score recording
pub mod scores;

// Session settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
