//! The round engine: three throws to find ship, captain, and crew.
//!
//! Each round starts from a fresh cup. After every throw the engine looks
//! for the face the current [`Stage`] wants (6, then 5, then 4). When it is
//! found, one such face is taken out of the throw and the stage's fixed cup
//! slot is banked: slot 0 for the ship, 1 for the captain, 2 for the crew,
//! whichever die actually showed the face. Stages are checked in order
//! within a single throw, so one lucky throw can secure all three. Once the
//! crew is aboard, the faces left over from the throw become the round
//! score, and every later throw replaces it.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{DiceCup, FaceSource};
use crate::error::GameResult;

/// Throws a player gets per round.
pub const ROLLS_PER_ROUND: u8 = 3;

/// Face that secures the ship.
pub const SHIP: u8 = 6;
/// Face that secures the captain.
pub const CAPTAIN: u8 = 5;
/// Face that secures the crew.
pub const CREW: u8 = 4;

const SECURED_FACES: [u8; 3] = [SHIP, CAPTAIN, CREW];

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for a 6.
    NeedShip,
    /// Ship secured, waiting for a 5.
    NeedCaptain,
    /// Captain secured, waiting for a 4.
    NeedCrew,
    /// Ship, captain, and crew secured; leftover dice score.
    Scored,
}

impl Stage {
    /// The face this stage waits for and the cup slot banked when it shows.
    pub fn wanted(self) -> Option<(u8, usize)> {
        match self {
            Self::NeedShip => Some((SHIP, 0)),
            Self::NeedCaptain => Some((CAPTAIN, 1)),
            Self::NeedCrew => Some((CREW, 2)),
            Self::Scored => None,
        }
    }

    /// The stage after this one is secured.
    pub fn next(self) -> Self {
        match self {
            Self::NeedShip => Self::NeedCaptain,
            Self::NeedCaptain => Self::NeedCrew,
            Self::NeedCrew | Self::Scored => Self::Scored,
        }
    }

    /// Faces already secured, in descending order.
    pub fn secured_faces(self) -> &'static [u8] {
        let count = match self {
            Self::NeedShip => 0,
            Self::NeedCaptain => 1,
            Self::NeedCrew => 2,
            Self::Scored => 3,
        };
        &SECURED_FACES[..count]
    }

    /// Progress flags for this stage.
    pub fn progress(self) -> Progress {
        Progress {
            has_ship: self >= Self::NeedCaptain,
            has_captain: self >= Self::NeedCrew,
            has_crew: self == Self::Scored,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedShip => write!(f, "need ship"),
            Self::NeedCaptain => write!(f, "need captain"),
            Self::NeedCrew => write!(f, "need crew"),
            Self::Scored => write!(f, "scored"),
        }
    }
}

/// Ship, captain, and crew flags. Derived from a [`Stage`], so a later flag
/// is never set without the earlier ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// A 6 has been secured.
    pub has_ship: bool,
    /// A 5 has been secured.
    pub has_captain: bool,
    /// A 4 has been secured.
    pub has_crew: bool,
}

/// One throw within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// 1-based throw number.
    pub attempt: u8,
    /// Secured faces followed by the fresh faces, as shown to the player.
    pub visible: Vec<u8>,
    /// The fresh faces only.
    pub rolled: Vec<u8>,
    /// Stage after this throw was evaluated.
    pub stage_after: Stage,
}

impl std::fmt::Display for RollRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_faces(&self.visible))
    }
}

/// Everything that happened in one player's round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Who played the round.
    pub player: String,
    /// Each throw in order.
    pub rolls: Vec<RollRecord>,
    /// Stage reached by the end of the round.
    pub stage: Stage,
    /// Round score; 0 unless the crew was secured.
    pub score: u32,
}

impl RoundReport {
    /// True when the round ended without ship, captain, and crew.
    pub fn is_bust(&self) -> bool {
        self.stage != Stage::Scored
    }
}

/// Render faces like `[6, 5, 3, 2]`.
pub fn format_faces(faces: &[u8]) -> String {
    let parts: Vec<String> = faces.iter().map(|f| f.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Plays rounds with a fixed face source. One engine is shared by every
/// player; each call to [`round`](Self::round) starts from scratch.
#[derive(Debug, Clone)]
pub struct RoundEngine<S> {
    source: S,
    cup: DiceCup,
    rolls_remaining: u8,
    stage: Stage,
    score: u32,
}

impl RoundEngine<StdRng> {
    /// An engine driven by a seeded `StdRng`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<S: FaceSource> RoundEngine<S> {
    /// Create an engine that draws faces from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cup: DiceCup::new(),
            rolls_remaining: ROLLS_PER_ROUND,
            stage: Stage::NeedShip,
            score: 0,
        }
    }

    /// Discard all round state: fresh cup, three throws, no progress.
    pub fn reset(&mut self) {
        self.cup = DiceCup::new();
        self.rolls_remaining = ROLLS_PER_ROUND;
        self.stage = Stage::NeedShip;
        self.score = 0;
    }

    /// Play a full round of three throws for `player`.
    pub fn round(&mut self, player: &str) -> GameResult<RoundReport> {
        self.reset();
        let mut rolls = Vec::with_capacity(usize::from(ROLLS_PER_ROUND));

        while self.rolls_remaining > 0 {
            let attempt = ROLLS_PER_ROUND - self.rolls_remaining + 1;
            let rolled = self.cup.roll(&mut self.source).to_vec();
            let visible = self.visible_values(&rolled);
            self.evaluate(rolled.clone())?;
            rolls.push(RollRecord {
                attempt,
                visible,
                rolled,
                stage_after: self.stage,
            });
            self.rolls_remaining -= 1;
        }

        Ok(RoundReport {
            player: player.to_string(),
            rolls,
            stage: self.stage,
            score: self.score,
        })
    }

    /// Secured faces for the current stage followed by `rolled`.
    pub fn visible_values(&self, rolled: &[u8]) -> Vec<u8> {
        let mut visible = self.stage.secured_faces().to_vec();
        visible.extend_from_slice(rolled);
        visible
    }

    fn evaluate(&mut self, mut values: Vec<u8>) -> GameResult<()> {
        while let Some((face, slot)) = self.stage.wanted() {
            let Some(pos) = values.iter().position(|&v| v == face) else {
                return Ok(());
            };
            values.remove(pos);
            self.cup.bank(slot)?;
            self.stage = self.stage.next();
        }
        self.score = values.iter().map(|&v| u32::from(v)).sum();
        Ok(())
    }

    /// Current round score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current ship/captain/crew flags.
    pub fn progress(&self) -> Progress {
        self.stage.progress()
    }

    /// Throws left in the current round.
    pub fn rolls_remaining(&self) -> u8 {
        self.rolls_remaining
    }

    /// The dice cup.
    pub fn cup(&self) -> &DiceCup {
        &self.cup
    }
}
