//! Where die faces come from.

use rand::Rng;

use super::FACES;
use crate::error::{GameError, GameResult};

/// Produces die faces in 1-6.
pub trait FaceSource {
    /// Produce the next face.
    fn roll_face(&mut self) -> u8;
}

impl<R: Rng + ?Sized> FaceSource for R {
    fn roll_face(&mut self) -> u8 {
        self.random_range(1..=FACES)
    }
}

/// Replays a fixed sequence of faces, starting over once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedFaces {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedFaces {
    /// Create a script. Every face must be in 1-6 and the script non-empty.
    pub fn new(faces: Vec<u8>) -> GameResult<Self> {
        if faces.is_empty() {
            return Err(GameError::EmptyScript);
        }
        if let Some(&bad) = faces.iter().find(|f| !(1..=FACES).contains(*f)) {
            return Err(GameError::InvalidFace(bad));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// How many faces have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl FaceSource for ScriptedFaces {
    fn roll_face(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
