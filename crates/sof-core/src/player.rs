//! Players and their running totals.

use crate::dice::FaceSource;
use crate::engine::{RoundEngine, RoundReport};
use crate::error::GameResult;

/// A named player with a score accumulated across rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    total: u32,
}

impl Player {
    /// Create a player with a zero total.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total score so far.
    pub fn current_score(&self) -> u32 {
        self.total
    }

    /// Zero the total.
    pub fn reset_score(&mut self) {
        self.total = 0;
    }

    /// Play one round on `engine` and add its score to the total.
    pub fn play_round<S: FaceSource>(
        &mut self,
        engine: &mut RoundEngine<S>,
    ) -> GameResult<RoundReport> {
        let report = engine.round(&self.name)?;
        self.total += report.score;
        Ok(report)
    }
}
