//! Next-color cycling for guess slots

use crate::core::{Color, Guess, Palette};

/// Color a slot should switch to when the player cycles it
///
/// The candidates are the palette colors not used by the guess's *other*
/// slots, in palette order. The slot moves to the candidate after its current
/// color, wrapping to the first candidate when its color is the last one or
/// not a candidate at all. With no candidates left the first palette color is
/// returned.
///
/// # Examples
/// ```
/// use mastermind::core::{Color, Guess, Palette};
/// use mastermind::game::next_color;
///
/// let palette = Palette::standard(5).unwrap();
/// let guess: Guess = "RGBY".parse().unwrap();
///
/// // Green, Blue and Yellow are taken, so slot 0 cycles Red -> Cyan -> Red
/// assert_eq!(next_color(&palette, &guess, 0), Color::Cyan);
/// ```
#[must_use]
pub fn next_color(palette: &Palette, guess: &Guess, slot: usize) -> Color {
    let used: Vec<Color> = guess
        .slots()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != slot)
        .filter_map(|(_, color)| *color)
        .collect();

    let unused: Vec<Color> = palette
        .colors()
        .iter()
        .copied()
        .filter(|color| !used.contains(color))
        .collect();

    let Some(&first_unused) = unused.first() else {
        return palette.first();
    };

    let position = guess
        .get(slot)
        .and_then(|current| unused.iter().position(|&c| c == current));

    match position {
        Some(i) if i + 1 < unused.len() => unused[i + 1],
        _ => first_unused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Cyan, Green, Magenta, Red, Yellow};

    fn guess_of(slots: [Option<Color>; 4]) -> Guess {
        let mut guess = Guess::empty();
        for (i, slot) in slots.into_iter().enumerate() {
            if let Some(color) = slot {
                guess.set(i, color);
            }
        }
        guess
    }

    #[test]
    fn unset_slot_starts_at_first_color() {
        let palette = Palette::standard(6).unwrap();
        assert_eq!(next_color(&palette, &Guess::empty(), 0), Red);
    }

    #[test]
    fn skips_colors_used_in_other_slots() {
        let palette = Palette::standard(6).unwrap();
        let guess = guess_of([None, Some(Red), Some(Green), None]);
        assert_eq!(next_color(&palette, &guess, 0), Blue);
    }

    #[test]
    fn advances_past_current_color() {
        let palette = Palette::standard(6).unwrap();
        let guess = guess_of([Some(Blue), Some(Green), None, None]);
        // Candidates for slot 0: Red, Blue, Yellow, Cyan, Magenta
        assert_eq!(next_color(&palette, &guess, 0), Yellow);
    }

    #[test]
    fn wraps_from_last_candidate() {
        let palette = Palette::standard(6).unwrap();
        let guess = guess_of([Some(Magenta), None, None, Some(Red)]);
        // Candidates for slot 0: Green, Blue, Yellow, Cyan, Magenta
        assert_eq!(next_color(&palette, &guess, 0), Green);
    }

    #[test]
    fn current_color_taken_elsewhere_restarts_cycle() {
        let palette = Palette::standard(6).unwrap();
        // Slot 2 holds Red, which slot 0 also uses
        let guess = guess_of([Some(Red), None, Some(Red), None]);
        assert_eq!(next_color(&palette, &guess, 2), Green);
    }

    #[test]
    fn single_candidate_cycles_to_itself() {
        let palette = Palette::new(vec![Red, Green, Blue]).unwrap();
        let guess = guess_of([Some(Red), Some(Green), Some(Blue), None]);
        assert_eq!(next_color(&palette, &guess, 0), Red);
    }

    #[test]
    fn no_candidates_falls_back_to_first_palette_color() {
        let palette = Palette::new(vec![Red, Green, Blue]).unwrap();
        let guess = guess_of([Some(Red), Some(Green), Some(Blue), Some(Red)]);
        assert_eq!(next_color(&palette, &guess, 0), Red);

        let palette = Palette::new(vec![Cyan, Green, Blue]).unwrap();
        let guess = guess_of([Some(Green), Some(Green), Some(Blue), Some(Cyan)]);
        assert_eq!(next_color(&palette, &guess, 0), Cyan);
    }

    #[test]
    fn repeated_cycling_visits_every_available_color() {
        let palette = Palette::standard(8).unwrap();
        let mut guess = guess_of([None, Some(Blue), None, Some(Yellow)]);

        let mut visited = Vec::new();
        for _ in 0..6 {
            let color = next_color(&palette, &guess, 0);
            visited.push(color);
            guess.set(0, color);
        }

        let expected: Vec<Color> = palette
            .colors()
            .iter()
            .copied()
            .filter(|c| *c != Blue && *c != Yellow)
            .collect();
        assert_eq!(visited, expected);

        // One more step wraps around
        assert_eq!(next_color(&palette, &guess, 0), Red);
    }

    #[test]
    fn out_of_range_slot_excludes_nothing() {
        let palette = Palette::standard(6).unwrap();
        let guess = guess_of([Some(Red), Some(Green), None, None]);
        assert_eq!(next_color(&palette, &guess, 9), Blue);
    }
}
