//! Error types for the game model.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Contract violations raised by the dice, engine, and room.
///
/// None of these occur during normal play; they signal misuse of the API
/// or a broken banking sequence and are surfaced immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A die was read before it was ever rolled.
    #[error("die has not been rolled yet")]
    DieNotRolled,

    /// A dice cup index outside 0..5.
    #[error("die index {index} out of range (cup holds 5 dice)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// Banking a die that is already banked.
    #[error("die {index} is already banked")]
    AlreadyBanked {
        /// The offending index.
        index: usize,
    },

    /// Releasing a die that is not banked.
    #[error("die {index} is not banked")]
    NotBanked {
        /// The offending index.
        index: usize,
    },

    /// A scripted face outside 1-6.
    #[error("invalid die face: {0} (expected 1-6)")]
    InvalidFace(u8),

    /// A scripted face source with no faces.
    #[error("face script is empty")]
    EmptyScript,

    /// A player with this name already sits in the room.
    #[error("player '{0}' already joined")]
    DuplicatePlayer(String),

    /// A game needs at least two players.
    #[error("need at least two players, found {found}")]
    NotEnoughPlayers {
        /// How many players were in the room.
        found: usize,
    },

    /// The configured round cap was hit before anyone won.
    #[error("no winner after {0} rounds")]
    RoundLimitReached(u32),
}
