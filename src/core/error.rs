//! Error type shared by the puzzle core

use super::Color;
use thiserror::Error;

/// Errors raised by palette construction, secret generation and guess evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("palette needs at least {min} colors, got {len}")]
    InvalidPalette { len: usize, min: usize },
    #[error("guess slot {slot} has no color")]
    IncompleteGuess { slot: usize },
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("color {0} appears more than once")]
    DuplicateColor(Color),
    #[error("only {max} standard colors exist, {requested} requested")]
    PaletteTooLarge { requested: usize, max: usize },
    #[error("picked index {index} is outside a palette of {len} colors")]
    PickOutOfRange { index: usize, len: usize },
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("a code must have exactly {expected} colors, got {len}")]
    InvalidCodeLength { len: usize, expected: usize },
}

pub type Result<T> = core::result::Result<T, GameError>;
