//! Ordered color palettes

use super::{Color, GameError, Result};
use std::fmt;
use strum::{EnumCount, IntoEnumIterator};

/// Ordered, non-empty set of distinct colors available for a round
///
/// Order matters: the next-color picker cycles in palette order and falls back
/// to the first color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Number of colors in the standard palette
    pub const STANDARD_SIZE: usize = Color::COUNT;

    /// Build a palette from an ordered list of colors
    ///
    /// # Errors
    /// Returns `GameError::EmptyPalette` for an empty list and
    /// `GameError::DuplicateColor` if a color is listed twice.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GameError::EmptyPalette);
        }

        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(GameError::DuplicateColor(*color));
            }
        }

        Ok(Self { colors })
    }

    /// The first `size` colors of the standard palette
    ///
    /// # Errors
    /// Returns `GameError::EmptyPalette` for `size == 0` and
    /// `GameError::PaletteTooLarge` when more than ten colors are requested.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Palette};
    ///
    /// let palette = Palette::standard(5).unwrap();
    /// assert_eq!(palette.len(), 5);
    /// assert_eq!(palette.colors()[4], Color::Cyan);
    /// ```
    pub fn standard(size: usize) -> Result<Self> {
        if size > Self::STANDARD_SIZE {
            return Err(GameError::PaletteTooLarge {
                requested: size,
                max: Self::STANDARD_SIZE,
            });
        }
        Self::new(Color::iter().take(size).collect())
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// First color in palette order
    #[inline]
    #[must_use]
    pub fn first(&self) -> Color {
        // Non-empty by construction
        self.colors[0]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.colors.iter().map(|c| c.code()).collect();
        write!(f, "{codes}")
    }
}
