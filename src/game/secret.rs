//! Secret generation
//!
//! Randomness comes in through [`PickSource`] so tests (and seeded runs) can
//! control exactly which colors end up in the secret.

use crate::core::{CODE_LENGTH, GameError, Palette, Result, Secret};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::collections::VecDeque;

/// Smallest palette a secret can be drawn from
pub const MIN_PALETTE_SIZE: usize = CODE_LENGTH;

/// Source of "pick without replacement" choices
pub trait PickSource {
    /// Pick `amount` distinct indices from `0..length`, in pick order
    ///
    /// Callers guarantee `amount <= length`.
    fn pick_distinct(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

/// Uniform picks backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngPicks<R>(pub R);

impl RngPicks<ThreadRng> {
    #[must_use]
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> PickSource for RngPicks<R> {
    fn pick_distinct(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}

/// Replays a fixed sequence of indices
///
/// Each call consumes `amount` indices from the front of the script. When the
/// script runs dry the picks fall back to `0, 1, 2, ...`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicks {
    script: VecDeque<usize>,
}

impl ScriptedPicks {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl PickSource for ScriptedPicks {
    fn pick_distinct(&mut self, _length: usize, amount: usize) -> Vec<usize> {
        (0..amount)
            .map(|fallback| self.script.pop_front().unwrap_or(fallback))
            .collect()
    }
}

/// Draw a secret from `palette` using the thread-local generator
///
/// # Errors
/// Returns `GameError::InvalidPalette` if the palette has fewer than four colors.
///
/// # Examples
/// ```
/// use mastermind::core::Palette;
/// use mastermind::game::generate_secret;
///
/// let palette = Palette::standard(6).unwrap();
/// let secret = generate_secret(&palette).unwrap();
/// assert!(secret.colors().iter().all(|&c| palette.contains(c)));
///
/// let tiny = Palette::standard(3).unwrap();
/// assert!(generate_secret(&tiny).is_err());
/// ```
pub fn generate_secret(palette: &Palette) -> Result<Secret> {
    generate_secret_with(palette, &mut RngPicks::thread())
}

/// Draw a secret from `palette` using `source`
///
/// # Errors
/// Returns `GameError::InvalidPalette` if the palette has fewer than four colors,
/// `GameError::PickOutOfRange` if the source picks past the end of the palette
/// and `GameError::DuplicateColor` if it picks the same index twice.
pub fn generate_secret_with<P: PickSource + ?Sized>(
    palette: &Palette,
    source: &mut P,
) -> Result<Secret> {
    let len = palette.len();
    if len < MIN_PALETTE_SIZE {
        return Err(GameError::InvalidPalette {
            len,
            min: MIN_PALETTE_SIZE,
        });
    }

    let picks = source.pick_distinct(len, CODE_LENGTH);
    let mut colors = [palette.first(); CODE_LENGTH];
    for (i, slot) in colors.iter_mut().enumerate() {
        let index = picks
            .get(i)
            .copied()
            .ok_or(GameError::InvalidCodeLength {
                len: picks.len(),
                expected: CODE_LENGTH,
            })?;
        let color = palette
            .get(index)
            .ok_or(GameError::PickOutOfRange { index, len })?;
        if picks[..i].contains(&index) {
            return Err(GameError::DuplicateColor(color));
        }
        *slot = color;
    }

    tracing::debug!(palette_size = len, "generated secret");
    tracing::trace!(secret = %Secret::new(colors), "secret colors");

    Ok(Secret::new(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scripted_picks_choose_exact_colors() {
        let palette = Palette::standard(6).unwrap();
        let mut source = ScriptedPicks::new([5, 0, 3, 2]);
        let secret = generate_secret_with(&palette, &mut source).unwrap();
        assert_eq!(
            secret.colors(),
            &[Color::Magenta, Color::Red, Color::Yellow, Color::Blue]
        );
    }

    #[test]
    fn exhausted_script_falls_back_to_palette_order() {
        let palette = Palette::standard(4).unwrap();
        let mut source = ScriptedPicks::default();
        let secret = generate_secret_with(&palette, &mut source).unwrap();
        assert_eq!(
            secret.colors(),
            &[Color::Red, Color::Green, Color::Blue, Color::Yellow]
        );
    }

    #[test]
    fn small_palette_rejected() {
        let palette = Palette::standard(3).unwrap();
        let result = generate_secret_with(&palette, &mut ScriptedPicks::default());
        assert_eq!(result, Err(GameError::InvalidPalette { len: 3, min: 4 }));
    }

    #[test]
    fn out_of_range_pick_rejected() {
        let palette = Palette::standard(5).unwrap();
        let mut source = ScriptedPicks::new([0, 1, 9, 2]);
        let result = generate_secret_with(&palette, &mut source);
        assert_eq!(result, Err(GameError::PickOutOfRange { index: 9, len: 5 }));
    }

    #[test]
    fn repeated_pick_rejected() {
        let palette = Palette::standard(5).unwrap();
        let mut source = ScriptedPicks::new([1, 2, 1, 3]);
        let result = generate_secret_with(&palette, &mut source);
        assert_eq!(result, Err(GameError::DuplicateColor(Color::Green)));
    }

    #[test]
    fn seeded_secrets_are_distinct_and_from_palette() {
        let palette = Palette::standard(7).unwrap();
        let mut source = RngPicks(StdRng::seed_from_u64(42));

        for _ in 0..200 {
            let secret = generate_secret_with(&palette, &mut source).unwrap();
            let colors = secret.colors();
            for (i, color) in colors.iter().enumerate() {
                assert!(palette.contains(*color));
                assert!(!colors[..i].contains(color), "repeat in {secret}");
            }
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let palette = Palette::standard(10).unwrap();
        let first = generate_secret_with(&palette, &mut RngPicks(StdRng::seed_from_u64(7))).unwrap();
        let second =
            generate_secret_with(&palette, &mut RngPicks(StdRng::seed_from_u64(7))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_color_eventually_chosen() {
        let palette = Palette::standard(10).unwrap();
        let mut source = RngPicks(StdRng::seed_from_u64(1));
        let mut seen = Vec::new();

        for _ in 0..500 {
            let secret = generate_secret_with(&palette, &mut source).unwrap();
            for &color in secret.colors() {
                if !seen.contains(&color) {
                    seen.push(color);
                }
            }
        }
        assert_eq!(seen.len(), palette.len());
    }

    #[test]
    fn minimal_palette_uses_every_color() {
        let palette = Palette::standard(4).unwrap();
        let secret = generate_secret(&palette).unwrap();
        let mut colors = secret.colors().to_vec();
        colors.sort_by_key(|c| c.code());
        let mut expected = palette.colors().to_vec();
        expected.sort_by_key(|c| c.code());
        assert_eq!(colors, expected);
    }
}
