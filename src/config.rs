//! Session configuration shared by the play modes

use crate::core::{Palette, Result};
use crate::game::{PickSource, RngPicks};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Player name used when none is given
pub const DEFAULT_PLAYER: &str = "player";

/// Palette size used when none is given
pub const DEFAULT_COLORS: usize = 6;

/// Settings for a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub palette: Palette,
    pub player: String,
    /// Seed for reproducible secrets; `None` uses the thread-local generator
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Build a config using the first `colors` standard colors
    ///
    /// # Errors
    /// Returns an error if `colors` is zero or larger than the standard palette.
    /// Palettes under four colors are accepted here and rejected when the first
    /// round starts.
    pub fn new(colors: usize, player: impl Into<String>, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            palette: Palette::standard(colors)?,
            player: player.into(),
            seed,
        })
    }

    /// Random source for secrets, seeded when a seed is configured
    #[must_use]
    pub fn pick_source(&self) -> Box<dyn PickSource> {
        match self.seed {
            Some(seed) => Box::new(RngPicks(StdRng::seed_from_u64(seed))),
            None => Box::new(RngPicks::thread()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Palette::standard(DEFAULT_COLORS).expect("default size is within range"),
            player: DEFAULT_PLAYER.to_string(),
            seed: None,
        }
    }
}
