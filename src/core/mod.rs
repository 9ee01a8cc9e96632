//! Core domain types for Mastermind
//!
//! Colors, palettes, codes and the guess evaluator. Everything here is pure:
//! no randomness, no I/O, no shared state.

mod code;
mod color;
mod error;
mod feedback;
mod palette;

pub use code::{CODE_LENGTH, Guess, Secret};
pub use color::Color;
pub use error::{GameError, Result};
pub use feedback::{Feedback, Mark, evaluate};
pub use palette::Palette;
