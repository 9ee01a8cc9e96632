//! Peg colors
//!
//! A `Color` is an opaque identifier compared only by equality. Rendering layers
//! decide how each one looks; the core never does.

use super::{GameError, Result};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// One of the ten standard peg colors, in palette order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Gray,
    Black,
    Orange,
    Pink,
}

impl Color {
    /// Single-letter code used for text input and compact output
    ///
    /// Codes are unique: `R G B Y C M A K O P`.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Cyan => 'C',
            Self::Magenta => 'M',
            Self::Gray => 'A',
            Self::Black => 'K',
            Self::Orange => 'O',
            Self::Pink => 'P',
        }
    }

    /// Look up a color by its letter code (case-insensitive)
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        Self::iter().find(|color| color.code() == code)
    }

    /// Parse either a letter code (`"r"`) or a full name (`"red"`)
    ///
    /// # Errors
    /// Returns `GameError::UnknownColor` if the input matches neither.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::parse("k").unwrap(), Color::Black);
    /// assert_eq!(Color::parse("Magenta").unwrap(), Color::Magenta);
    /// assert!(Color::parse("teal").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        if let (Some(single), None) = (chars.next(), chars.next())
            && let Some(color) = Self::from_code(single)
        {
            return Ok(color);
        }

        trimmed
            .parse::<Self>()
            .map_err(|_| GameError::UnknownColor(trimmed.to_string()))
    }
}
