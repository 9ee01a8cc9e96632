//! Round state machine
//!
//! A round owns the secret and an ordered list of rows. Only the last row is
//! editable, and only until the round is won. Actions aimed at any other row,
//! or at a finished round, are ignored rather than reported as errors: they
//! come from stale UI input, not from programming mistakes.

use super::picker::next_color;
use super::secret::{PickSource, RngPicks, generate_secret_with};
use crate::core::{Color, Feedback, Guess, Palette, Result, Secret, evaluate};
use tracing::{debug, info};

/// One guess row and, once submitted, its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    guess: Guess,
    feedback: Option<Feedback>,
}

impl Row {
    const fn empty() -> Self {
        Self {
            guess: Guess::empty(),
            feedback: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Locked rows have feedback and never change again
    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.feedback.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// The last row accepts colors and submission
    Editing,
    /// A row matched the secret; nothing is editable
    Won,
}

/// Result handed to score recording when a round is won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FinalScore {
    /// Number of locked rows, winning row included
    pub final_score: u32,
}

/// What a call to [`Round::submit_guess`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Preconditions failed; the round is unchanged
    Ignored,
    /// The row was locked with this feedback and a new empty row appended
    Continue(Feedback),
    /// The row matched the secret and the round is over
    Won(FinalScore),
}

/// A single game from secret generation to a win
#[derive(Debug, Clone)]
pub struct Round {
    palette: Palette,
    secret: Secret,
    rows: Vec<Row>,
    score: u32,
    state: RoundState,
}

impl Round {
    /// Start a round with a secret drawn by the thread-local generator
    ///
    /// # Errors
    /// Returns `GameError::InvalidPalette` if the palette has fewer than four colors.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Palette;
    /// use mastermind::game::{Round, RoundState};
    ///
    /// let round = Round::new(Palette::standard(6).unwrap()).unwrap();
    /// assert_eq!(round.rows().len(), 1);
    /// assert_eq!(round.score(), 0);
    /// assert_eq!(round.state(), RoundState::Editing);
    /// ```
    pub fn new(palette: Palette) -> Result<Self> {
        Self::with_source(palette, &mut RngPicks::thread())
    }

    /// Start a round with a secret drawn from `source`
    ///
    /// # Errors
    /// Propagates secret generation errors; see [`generate_secret_with`].
    pub fn with_source<P: PickSource + ?Sized>(palette: Palette, source: &mut P) -> Result<Self> {
        let secret = generate_secret_with(&palette, source)?;
        Ok(Self::with_secret(palette, secret))
    }

    /// Start a round with a known secret
    ///
    /// The secret is not checked against the palette.
    #[must_use]
    pub fn with_secret(palette: Palette, secret: Secret) -> Self {
        Self {
            palette,
            secret,
            rows: vec![Row::empty()],
            score: 0,
            state: RoundState::Editing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Guesses used so far
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Index of the editable row, or `None` once the round is won
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        match self.state {
            RoundState::Editing => Some(self.rows.len() - 1),
            RoundState::Won => None,
        }
    }

    /// The score to record, available once the round is won
    #[must_use]
    pub fn final_score(&self) -> Option<FinalScore> {
        self.is_won().then_some(FinalScore {
            final_score: self.score,
        })
    }

    /// The secret, revealed only after a win
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Secret> {
        self.is_won().then_some(&self.secret)
    }

    fn editable_row(&mut self, row: usize) -> Option<&mut Row> {
        if self.active_row() == Some(row) {
            self.rows.last_mut()
        } else {
            debug!(row, state = ?self.state, "ignoring action on non-editable row");
            None
        }
    }

    /// Put `color` in `slot` of the editable row
    ///
    /// Returns false, leaving the round unchanged, when `row` is not the
    /// editable row, the round is won, or `slot` is out of range.
    pub fn select_color(&mut self, row: usize, slot: usize, color: Color) -> bool {
        self.editable_row(row)
            .is_some_and(|editable| editable.guess.set(slot, color))
    }

    /// Cycle `slot` of the editable row to its next unused color
    ///
    /// Returns the color chosen, or `None` if the action was ignored.
    pub fn cycle_color(&mut self, row: usize, slot: usize) -> Option<Color> {
        let guess = *self.editable_row(row)?.guess();
        let color = next_color(&self.palette, &guess, slot);
        self.select_color(row, slot, color).then_some(color)
    }

    /// Evaluate and lock the editable row
    ///
    /// Ignored unless `row` is the editable row and every slot is set. A
    /// winning guess ends the round; any other guess bumps the score and
    /// appends a fresh row.
    pub fn submit_guess(&mut self, row: usize) -> SubmitOutcome {
        let secret = self.secret;
        let Some(editable) = self.editable_row(row) else {
            return SubmitOutcome::Ignored;
        };

        // Incomplete guesses are the only evaluation failure
        let Ok(feedback) = evaluate(&editable.guess, &secret) else {
            debug!(row, guess = %editable.guess, "ignoring submit of incomplete guess");
            return SubmitOutcome::Ignored;
        };
        editable.feedback = Some(feedback);
        self.score += 1;

        if feedback.is_win() {
            self.state = RoundState::Won;
            let score = FinalScore {
                final_score: self.score,
            };
            info!(score = score.final_score, "round won");
            SubmitOutcome::Won(score)
        } else {
            self.rows.push(Row::empty());
            debug!(row, %feedback, score = self.score, "guess locked");
            SubmitOutcome::Continue(feedback)
        }
    }

    /// Start over with a new secret from the thread-local generator
    ///
    /// # Errors
    /// Returns `GameError::InvalidPalette` for palettes under four colors; the
    /// round is left untouched in that case.
    pub fn restart(&mut self, palette: Palette) -> Result<()> {
        self.restart_with(palette, &mut RngPicks::thread())
    }

    /// Start over with a new secret drawn from `source`
    ///
    /// # Errors
    /// Propagates secret generation errors; the round is left untouched.
    pub fn restart_with<P: PickSource + ?Sized>(
        &mut self,
        palette: Palette,
        source: &mut P,
    ) -> Result<()> {
        *self = Self::with_source(palette, source)?;
        info!(palette_size = self.palette.len(), "round restarted");
        Ok(())
    }
}
