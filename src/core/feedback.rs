//! Guess evaluation
//!
//! Feedback holds one mark per guess position:
//! - Exact: right color, right position
//! - Present: color is in the secret elsewhere and not already credited
//! - Absent: color cannot be credited
//!
//! Marks stay aligned with guess positions; they are not sorted the way
//! physical Mastermind key pegs are.

use super::{CODE_LENGTH, Color, Guess, Result, Secret};
use rustc_hash::FxHashMap;
use std::fmt;

/// Result for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Compact symbol: `●` exact, `○` present, `·` absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '●',
            Self::Present => '○',
            Self::Absent => '·',
        }
    }
}

/// Feedback for an evaluated guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; CODE_LENGTH]);

impl Feedback {
    /// Four exact marks
    pub const WIN: Self = Self([Mark::Exact; CODE_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; CODE_LENGTH]) -> Self {
        Self(marks)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Mark every position whose color matches the secret as Exact
    /// 2. Count the secret colors left at non-exact positions
    /// 3. Walk the remaining guess positions in order: a color still available
    ///    in that count is Present and consumes one occurrence, otherwise Absent
    ///
    /// Step 3 is what keeps a repeated guess color from being credited more
    /// often than it occurs in the secret.
    ///
    /// # Errors
    /// Returns `GameError::IncompleteGuess` if any guess slot is unset.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Guess, Mark, Secret};
    ///
    /// let secret: Secret = "RRGB".parse().unwrap();
    /// let guess: Guess = "RGGG".parse().unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Exact, Mark::Absent, Mark::Exact, Mark::Absent]
    /// );
    /// ```
    pub fn calculate(guess: &Guess, secret: &Secret) -> Result<Self> {
        let guess = guess.colors()?;
        let secret = secret.colors();
        let mut marks = [Mark::Absent; CODE_LENGTH];

        // First pass: exact matches
        for (mark, (g, s)) in marks.iter_mut().zip(guess.iter().zip(secret)) {
            if g == s {
                *mark = Mark::Exact;
            }
        }

        // Secret colors not consumed by an exact match
        let mut remaining: FxHashMap<Color, u8> = FxHashMap::default();
        for (mark, &color) in marks.iter().zip(secret) {
            if *mark != Mark::Exact {
                *remaining.entry(color).or_insert(0) += 1;
            }
        }

        // Second pass: present colors, consuming one occurrence each
        for (mark, color) in marks.iter_mut().zip(guess) {
            if *mark == Mark::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&color)
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Ok(Self(marks))
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; CODE_LENGTH] {
        &self.0
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Exact)
    }

    #[must_use]
    pub fn count(&self, kind: Mark) -> usize {
        self.0.iter().filter(|&&mark| mark == kind).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `secret`; shorthand for [`Feedback::calculate`]
///
/// # Errors
/// Returns `GameError::IncompleteGuess` if any guess slot is unset.
pub fn evaluate(guess: &Guess, secret: &Secret) -> Result<Feedback> {
    Feedback::calculate(guess, secret)
}
