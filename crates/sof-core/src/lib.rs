//! Game model for Ship of Fools.
//!
//! Five dice, three throws a round. Players must bank a 6 (ship), then a 5
//! (captain), then a 4 (crew); the two leftover dice are the round score.
//! Totals carry across rounds until someone reaches the winning score.
//!
//! Randomness is injected through [`FaceSource`], so every part of the game
//! can be driven by a seeded RNG or a fixed script of faces.

pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod log;
pub mod player;
pub mod room;

pub use config::GameConfig;
pub use dice::{CUP_SIZE, DiceCup, Die, FaceSource, ScriptedFaces};
pub use engine::{Progress, RollRecord, RoundEngine, RoundReport, Stage, format_faces};
pub use error::{GameError, GameResult};
pub use log::{GameEvent, GameEventKind, GameLog};
pub use player::Player;
pub use room::{GameRoom, GameSummary, Standing};
