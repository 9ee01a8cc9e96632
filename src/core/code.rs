//! Guesses and secrets
//!
//! Both are four-color codes. A `Guess` is built slot by slot and may have
//! unset slots; a `Secret` is always complete.

use super::{Color, GameError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of colors in every secret and guess
pub const CODE_LENGTH: usize = 4;

/// Parse a code written as letter codes (`"RGBY"`) or separated names/codes
/// (`"red green b y"`, `"R,G,B,Y"`)
fn parse_colors(input: &str) -> Result<[Color; CODE_LENGTH]> {
    let trimmed = input.trim();
    let separated = trimmed.contains(|c: char| c.is_whitespace() || c == ',');

    let colors: Vec<Color> = if separated {
        trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Color::parse)
            .collect::<Result<_>>()?
    } else {
        trimmed
            .chars()
            .map(|c| Color::from_code(c).ok_or_else(|| GameError::UnknownColor(c.to_string())))
            .collect::<Result<_>>()?
    };

    let len = colors.len();
    colors
        .try_into()
        .map_err(|_| GameError::InvalidCodeLength {
            len,
            expected: CODE_LENGTH,
        })
}

fn write_codes(f: &mut fmt::Formatter<'_>, slots: impl Iterator<Item = Option<Color>>) -> fmt::Result {
    for slot in slots {
        match slot {
            Some(color) => write!(f, "{}", color.code())?,
            None => write!(f, "_")?,
        }
    }
    Ok(())
}

/// A guess under construction or submitted for evaluation
///
/// Slots may be unset and may repeat colors; only evaluation requires every
/// slot to be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Guess {
    slots: [Option<Color>; CODE_LENGTH],
}

impl Guess {
    /// A guess with every slot unset
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: [None; CODE_LENGTH],
        }
    }

    /// A complete guess
    #[must_use]
    pub const fn from_colors(colors: [Color; CODE_LENGTH]) -> Self {
        Self {
            slots: [
                Some(colors[0]),
                Some(colors[1]),
                Some(colors[2]),
                Some(colors[3]),
            ],
        }
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.slots
    }

    /// Color in `slot`, or `None` when unset or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.slots.get(slot).copied().flatten()
    }

    /// Set `slot` to `color`
    ///
    /// Returns false (and changes nothing) when `slot` is out of range.
    pub fn set(&mut self, slot: usize, color: Color) -> bool {
        match self.slots.get_mut(slot) {
            Some(entry) => {
                *entry = Some(color);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// All four colors, if every slot is set
    ///
    /// # Errors
    /// Returns `GameError::IncompleteGuess` naming the first unset slot.
    pub fn colors(&self) -> Result<[Color; CODE_LENGTH]> {
        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, (target, entry)) in colors.iter_mut().zip(self.slots).enumerate() {
            *target = entry.ok_or(GameError::IncompleteGuess { slot })?;
        }
        Ok(colors)
    }
}

impl From<[Color; CODE_LENGTH]> for Guess {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self::from_colors(colors)
    }
}

impl FromStr for Guess {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        parse_colors(s).map(Self::from_colors)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_codes(f, self.slots.iter().copied())
    }
}

/// The hidden code for a round
///
/// Generated secrets never repeat a color. Secrets built with `Secret::new`
/// (for checking a single guess) may.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret {
    colors: [Color; CODE_LENGTH],
}

impl Secret {
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self { colors }
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.colors
    }

    /// The guess that would win against this secret
    #[must_use]
    pub const fn as_guess(&self) -> Guess {
        Guess::from_colors(self.colors)
    }
}

impl FromStr for Secret {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        parse_colors(s).map(Self::new)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_codes(f, self.colors.iter().copied().map(Some))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    #[test]
    fn empty_guess_is_incomplete() {
        let guess = Guess::empty();
        assert!(!guess.is_complete());
        assert_eq!(guess.colors(), Err(GameError::IncompleteGuess { slot: 0 }));
        assert_eq!(guess.to_string(), "____");
    }

    #[test]
    fn set_fills_slots() {
        let mut guess = Guess::empty();
        assert!(guess.set(0, Red));
        assert!(guess.set(1, Red));
        assert!(guess.set(3, Blue));
        assert_eq!(guess.colors(), Err(GameError::IncompleteGuess { slot: 2 }));
        assert_eq!(guess.to_string(), "RR_B");

        assert!(guess.set(2, Green));
        assert!(guess.is_complete());
        assert_eq!(guess.colors().unwrap(), [Red, Red, Green, Blue]);
    }

    #[test]
    fn set_out_of_range_is_rejected() {
        let mut guess = Guess::empty();
        assert!(!guess.set(CODE_LENGTH, Red));
        assert_eq!(guess, Guess::empty());
        assert_eq!(guess.get(7), None);
    }

    #[test]
    fn parse_letter_codes() {
        let guess: Guess = "rgby".parse().unwrap();
        assert_eq!(guess, Guess::from_colors([Red, Green, Blue, Yellow]));

        let secret: Secret = "KOPA".parse().unwrap();
        assert_eq!(
            secret.colors(),
            &[Color::Black, Color::Orange, Color::Pink, Color::Gray]
        );
    }

    #[test]
    fn parse_separated_names() {
        let guess: Guess = "red, green blue Y".parse().unwrap();
        assert_eq!(guess, Guess::from_colors([Red, Green, Blue, Yellow]));
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(
            "RGB".parse::<Guess>(),
            Err(GameError::InvalidCodeLength {
                len: 3,
                expected: 4
            })
        );
        assert_eq!(
            "red red red red red".parse::<Secret>(),
            Err(GameError::InvalidCodeLength {
                len: 5,
                expected: 4
            })
        );
    }

    #[test]
    fn parse_unknown_code() {
        assert_eq!(
            "RGBX".parse::<Guess>(),
            Err(GameError::UnknownColor("X".to_string()))
        );
    }

    #[test]
    fn secret_allows_repeats_and_converts_to_guess() {
        let secret = Secret::new([Red, Red, Green, Blue]);
        assert_eq!(secret.to_string(), "RRGB");
        assert_eq!(secret.as_guess().colors().unwrap(), *secret.colors());
    }
}
