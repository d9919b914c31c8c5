//! The five-dice cup with banking.

use std::collections::BTreeSet;

use super::{Die, FaceSource};
use crate::error::{GameError, GameResult};

/// Number of dice in the cup.
pub const CUP_SIZE: usize = 5;

/// Five dice, some of which may be banked and kept out of later rolls.
#[derive(Debug, Clone, Default)]
pub struct DiceCup {
    dice: [Die; CUP_SIZE],
    banked: BTreeSet<usize>,
    rolled: Vec<u8>,
}

impl DiceCup {
    /// Create a cup of unrolled, unbanked dice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll every die that is not banked.
    ///
    /// Returns the new faces of the rolled dice in cup order; banked dice
    /// are left out. The result replaces the previous roll's result.
    pub fn roll<S: FaceSource + ?Sized>(&mut self, source: &mut S) -> &[u8] {
        self.rolled.clear();
        for (index, die) in self.dice.iter_mut().enumerate() {
            if !self.banked.contains(&index) {
                self.rolled.push(die.roll(source));
            }
        }
        &self.rolled
    }

    /// Faces produced by the most recent [`roll`](Self::roll).
    pub fn rolled_values(&self) -> &[u8] {
        &self.rolled
    }

    /// The current face of the die at `index`.
    pub fn value(&self, index: usize) -> GameResult<u8> {
        check_index(index)?;
        self.dice[index].value()
    }

    /// Bank the die at `index` so it is skipped by later rolls.
    ///
    /// Banking an already banked die is rejected.
    pub fn bank(&mut self, index: usize) -> GameResult<()> {
        check_index(index)?;
        if !self.banked.insert(index) {
            return Err(GameError::AlreadyBanked { index });
        }
        Ok(())
    }

    /// Whether the die at `index` is banked.
    pub fn is_banked(&self, index: usize) -> GameResult<bool> {
        check_index(index)?;
        Ok(self.banked.contains(&index))
    }

    /// Return a banked die to the rolling pool.
    pub fn release(&mut self, index: usize) -> GameResult<()> {
        check_index(index)?;
        if !self.banked.remove(&index) {
            return Err(GameError::NotBanked { index });
        }
        Ok(())
    }

    /// Release every banked die.
    pub fn release_all(&mut self) {
        self.banked.clear();
    }

    /// Number of banked dice.
    pub fn banked_count(&self) -> usize {
        self.banked.len()
    }

    /// Number of dice the next roll will throw.
    pub fn active_count(&self) -> usize {
        CUP_SIZE - self.banked.len()
    }
}

fn check_index(index: usize) -> GameResult<()> {
    if index >= CUP_SIZE {
        return Err(GameError::IndexOutOfRange { index });
    }
    Ok(())
}
