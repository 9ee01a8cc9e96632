//! Score recording
//!
//! The round engine only emits a [`FinalScore`]; where it ends up is decided
//! by a [`ScoreSink`]. [`ScoreBoard`] keeps results in memory for the current
//! session.

use crate::game::FinalScore;

/// A finished round attributed to a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub player: String,
    pub palette_size: usize,
    pub score: u32,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(player: impl Into<String>, palette_size: usize, score: FinalScore) -> Self {
        Self {
            player: player.into(),
            palette_size,
            score: score.final_score,
        }
    }
}

/// Destination for finished rounds
pub trait ScoreSink {
    fn record(&mut self, record: ScoreRecord);
}

/// In-memory score list
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    records: Vec<ScoreRecord>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in the order they were added
    #[must_use]
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, best (fewest guesses) first
    ///
    /// Equal scores keep insertion order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&ScoreRecord> {
        let mut ranked: Vec<&ScoreRecord> = self.records.iter().collect();
        ranked.sort_by_key(|record| record.score);
        ranked
    }

    /// Ranked records for rounds played with `palette_size` colors
    #[must_use]
    pub fn ranked_for_palette(&self, palette_size: usize) -> Vec<&ScoreRecord> {
        self.ranked()
            .into_iter()
            .filter(|record| record.palette_size == palette_size)
            .collect()
    }

    /// Best score `player` has recorded, if any
    #[must_use]
    pub fn best_for(&self, player: &str) -> Option<u32> {
        self.records
            .iter()
            .filter(|record| record.player == player)
            .map(|record| record.score)
            .min()
    }
}

impl ScoreSink for ScoreBoard {
    fn record(&mut self, record: ScoreRecord) {
        tracing::info!(
            player = %record.player,
            palette_size = record.palette_size,
            score = record.score,
            "score recorded"
        );
        self.records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(player: &str, palette_size: usize, score: u32) -> ScoreRecord {
        ScoreRecord::new(player, palette_size, FinalScore { final_score: score })
    }

    #[test]
    fn empty_board() {
        let board = ScoreBoard::new();
        assert!(board.is_empty());
        assert!(board.ranked().is_empty());
        assert_eq!(board.best_for("ann"), None);
    }

    #[test]
    fn ranked_is_ascending_and_stable() {
        let mut board = ScoreBoard::new();
        board.record(record("ann", 6, 5));
        board.record(record("bo", 6, 3));
        board.record(record("cy", 6, 5));
        board.record(record("di", 6, 1));

        let players: Vec<&str> = board.ranked().iter().map(|r| r.player.as_str()).collect();
        assert_eq!(players, ["di", "bo", "ann", "cy"]);
        assert_eq!(board.len(), 4);
        assert_eq!(board.records()[0].player, "ann");
    }

    #[test]
    fn ranked_for_palette_filters() {
        let mut board = ScoreBoard::new();
        board.record(record("ann", 6, 4));
        board.record(record("ann", 8, 2));
        board.record(record("bo", 6, 3));

        let scores: Vec<u32> = board.ranked_for_palette(6).iter().map(|r| r.score).collect();
        assert_eq!(scores, [3, 4]);
        assert!(board.ranked_for_palette(10).is_empty());
    }

    #[test]
    fn best_for_player() {
        let mut board = ScoreBoard::new();
        board.record(record("ann", 6, 4));
        board.record(record("ann", 8, 7));
        board.record(record("bo", 6, 2));

        assert_eq!(board.best_for("ann"), Some(4));
        assert_eq!(board.best_for("bo"), Some(2));
        assert_eq!(board.best_for("cy"), None);
    }
}
