//! Configuration for a game.

/// Configuration for a game of Ship of Fools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Total a player must reach to win. At 0 the game is over before it starts.
    pub winning_score: u32,
    /// RNG seed; `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Stop with an error after this many rounds. 0 = unlimited.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: 21,
            seed: None,
            max_rounds: 0,
        }
    }
}

impl GameConfig {
    /// Set the winning score.
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the round cap (0 = unlimited).
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }
}
