//! Dice, the dice cup, and sources of die faces.
//!
//! A [`Die`] is a plain six-sided die that remembers its last face. Five of
//! them sit in a [`DiceCup`], which tracks which dice are banked and only
//! rolls the rest. Faces come from a [`FaceSource`]: any `rand` RNG in
//! normal play, or [`ScriptedFaces`] when a fixed sequence is needed.

pub mod cup;
pub mod source;

pub use cup::{CUP_SIZE, DiceCup};
pub use source::{FaceSource, ScriptedFaces};

use crate::error::{GameError, GameResult};

/// Number of faces on every die in the game.
pub const FACES: u8 = 6;

/// A single six-sided die.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Die {
    value: Option<u8>,
}

impl Die {
    /// Create a die that has not been rolled yet.
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Roll the die, store the face, and return it.
    pub fn roll<S: FaceSource + ?Sized>(&mut self, source: &mut S) -> u8 {
        let face = source.roll_face();
        self.value = Some(face);
        face
    }

    /// The last rolled face.
    pub fn value(&self) -> GameResult<u8> {
        self.value.ok_or(GameError::DieNotRolled)
    }

    /// Returns true once the die has been rolled at least once.
    pub fn is_rolled(&self) -> bool {
        self.value.is_some()
    }
}
