//! The game room: turn order, shared engine, and the win check.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::dice::FaceSource;
use crate::engine::{RoundEngine, RoundReport};
use crate::error::{GameError, GameResult};
use crate::log::GameLog;
use crate::player::Player;

/// A player's name and total at a point in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player name.
    pub name: String,
    /// Total score.
    pub score: u32,
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}'s score: {}", self.name, self.score)
    }
}

/// The outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Name of the winner.
    pub winner: String,
    /// Score that had to be reached.
    pub winning_score: u32,
    /// Rounds played.
    pub rounds: u32,
    /// Final totals in turn order.
    pub standings: Vec<Standing>,
}

/// Seats players in turn order and runs rounds on one shared engine.
#[derive(Debug)]
pub struct GameRoom<S> {
    engine: RoundEngine<S>,
    players: Vec<Player>,
    winning_score: u32,
    max_rounds: u32,
    winner: Option<usize>,
    rounds_played: u32,
    log: GameLog,
}

impl GameRoom<StdRng> {
    /// A room whose engine uses `StdRng`, seeded from the config or the OS.
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_source(rng, config)
    }
}

impl<S: FaceSource> GameRoom<S> {
    /// A room whose engine draws faces from `source`.
    pub fn with_source(source: S, config: &GameConfig) -> Self {
        Self {
            engine: RoundEngine::new(source),
            players: Vec::new(),
            winning_score: config.winning_score,
            max_rounds: config.max_rounds,
            winner: None,
            rounds_played: 0,
            log: GameLog::default(),
        }
    }

    /// Seat a player at the end of the turn order. Names must be unique.
    pub fn add_player(&mut self, player: Player) -> GameResult<()> {
        if self.players.iter().any(|p| p.name() == player.name()) {
            return Err(GameError::DuplicatePlayer(player.name().to_string()));
        }
        self.players.push(player);
        Ok(())
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Score needed to win.
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Completed rounds.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Every round played so far, with the winner once found.
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Zero every total and forget any winner.
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.winner = None;
        self.log.clear_winner();
    }

    /// Give every player one round, in turn order.
    pub fn play_round(&mut self) -> GameResult<Vec<RoundReport>> {
        self.rounds_played += 1;
        let mut reports = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            reports.push(player.play_round(&mut self.engine)?);
        }
        self.log.record_round(reports.clone());
        Ok(reports)
    }

    /// Whether someone has reached the winning score.
    ///
    /// Players are checked in turn order and the first one at or above the
    /// winning score is recorded as the winner, even if a later player has
    /// a higher total.
    pub fn is_finished(&mut self) -> bool {
        let Some(index) = self
            .players
            .iter()
            .position(|p| p.current_score() >= self.winning_score)
        else {
            return false;
        };

        if self.winner != Some(index) {
            let player = &self.players[index];
            self.log.record_winner(player.name(), player.current_score());
        }
        self.winner = Some(index);
        true
    }

    /// The recorded winner, once [`is_finished`](Self::is_finished) found one.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    /// Current totals in turn order.
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                score: p.current_score(),
            })
            .collect()
    }

    /// The congratulation line for the winner.
    pub fn announce_winner(&self) -> Option<String> {
        self.winner()
            .map(|p| format!("Hey!! Congratulations {}! You won the match!", p.name()))
    }

    /// Play rounds until someone wins.
    ///
    /// `on_round` sees each round's reports and the standings after it.
    pub fn play_to_finish<F>(&mut self, mut on_round: F) -> GameResult<GameSummary>
    where
        F: FnMut(&[RoundReport], &[Standing]),
    {
        if self.players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                found: self.players.len(),
            });
        }

        while !self.is_finished() {
            if self.max_rounds > 0 && self.rounds_played >= self.max_rounds {
                return Err(GameError::RoundLimitReached(self.max_rounds));
            }
            let reports = self.play_round()?;
            on_round(&reports, &self.standings());
        }

        let winner = self
            .winner()
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        Ok(GameSummary {
            winner,
            winning_score: self.winning_score,
            rounds: self.rounds_played,
            standings: self.standings(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedFaces;
    use crate::log::GameEventKind;
    use proptest::prelude::*;

    /// Ship, captain, and crew on the first throw, then `last` as the final score.
    fn scoring_round(last: [u8; 2]) -> Vec<u8> {
        vec![6, 5, 4, 1, 1, 1, 1, last[0], last[1]]
    }

    fn bust_round() -> Vec<u8> {
        vec![1; 15]
    }

    fn room(script: Vec<u8>, config: &GameConfig, names: &[&str]) -> GameRoom<ScriptedFaces> {
        let mut room = GameRoom::with_source(ScriptedFaces::new(script).unwrap(), config);
        for name in names {
            room.add_player(Player::new(*name)).unwrap();
        }
        room
    }

    #[test]
    fn first_in_turn_order_wins_ties() {
        let mut script = scoring_round([5, 6]); // 11
        script.extend(scoring_round([6, 6])); // 12
        let mut room = room(script, &GameConfig::default(), &["mr d", "mr p"]);

        room.play_round().unwrap();
        assert!(!room.is_finished());
        room.play_round().unwrap();
        assert!(room.is_finished());

        let standings = room.standings();
        assert_eq!(standings[0].score, 22);
        assert_eq!(standings[1].score, 24);
        assert_eq!(room.winner().unwrap().name(), "mr d");
        assert_eq!(
            room.announce_winner().unwrap(),
            "Hey!! Congratulations mr d! You won the match!"
        );
    }

    #[test]
    fn later_player_wins_when_earlier_is_short() {
        let mut script = bust_round();
        script.extend(scoring_round([6, 6]));
        let mut room = room(script, &GameConfig::default(), &["a", "b"]);

        let summary = room.play_to_finish(|_, _| {}).unwrap();
        assert_eq!(summary.winner, "b");
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.standings[0].score, 0);
        assert_eq!(summary.standings[1].score, 24);
    }

    #[test]
    fn not_finished_before_play() {
        let mut room = room(vec![1], &GameConfig::default(), &["a", "b"]);
        assert!(!room.is_finished());
        assert!(room.winner().is_none());
        assert!(room.announce_winner().is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut room = room(vec![1], &GameConfig::default(), &["a"]);
        assert_eq!(
            room.add_player(Player::new("a")),
            Err(GameError::DuplicatePlayer("a".into()))
        );
        assert_eq!(room.players().len(), 1);
    }

    #[test]
    fn zero_target_is_won_before_any_round() {
        let config = GameConfig::default().with_winning_score(0);
        let mut room = room(vec![6], &config, &["a", "b"]);
        assert!(room.is_finished());

        let summary = room.play_to_finish(|_, _| panic!("no round should be played")).unwrap();
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.winner, "a");
        assert_eq!(room.log().events()[0].to_string(), "a wins with 0");
    }

    #[test]
    fn needs_two_players() {
        let mut room = room(vec![1], &GameConfig::default(), &["solo"]);
        assert_eq!(
            room.play_to_finish(|_, _| {}).unwrap_err(),
            GameError::NotEnoughPlayers { found: 1 }
        );
    }

    #[test]
    fn round_limit_stops_a_hopeless_game() {
        let config = GameConfig::default().with_max_rounds(3);
        let mut room = room(vec![1], &config, &["a", "b"]);
        assert_eq!(
            room.play_to_finish(|_, _| {}).unwrap_err(),
            GameError::RoundLimitReached(3)
        );
        assert_eq!(room.rounds_played(), 3);
    }

    #[test]
    fn reset_scores_clears_totals_and_winner() {
        let config = GameConfig::default().with_winning_score(5);
        let mut room = room(scoring_round([6, 6]), &config, &["a", "b"]);
        room.play_round().unwrap();
        assert!(room.is_finished());

        room.reset_scores();
        assert!(room.winner().is_none());
        assert!(room.standings().iter().all(|s| s.score == 0));
        assert!(!room.is_finished());
    }

    #[test]
    fn callback_sees_every_round() {
        let mut script = scoring_round([5, 6]);
        script.extend(scoring_round([6, 6]));
        let mut room = room(script, &GameConfig::default(), &["a", "b"]);

        let mut seen = Vec::new();
        room.play_to_finish(|reports, standings| {
            assert_eq!(reports.len(), 2);
            seen.push(standings.to_vec());
        })
        .unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0][1].to_string(), "b's score: 12");
    }

    #[test]
    fn log_records_stages_scores_and_winner() {
        let mut script = bust_round();
        script.extend(scoring_round([6, 6]));
        let mut room = room(script, &GameConfig::default(), &["a", "b"]);
        room.play_to_finish(|_, _| {}).unwrap();

        let events = room.log().events();
        assert_eq!(events[0].kind, GameEventKind::RoundStarted);
        assert_eq!(events[1].to_string(), "a came up empty (need ship)");
        let secured: Vec<String> = events
            .iter()
            .filter(|e| matches!(e.kind, GameEventKind::StageSecured { .. }))
            .map(|e| e.to_string())
            .collect();
        assert_eq!(secured.len(), 6);
        assert_eq!(secured[0], "b secured the ship on throw 1");
        assert_eq!(
            events.last().unwrap().kind,
            GameEventKind::WinnerDeclared {
                player: "b".into(),
                total: 24
            }
        );

        room.reset_scores();
        assert!(
            !room
                .log()
                .events()
                .iter()
                .any(|e| matches!(e.kind, GameEventKind::WinnerDeclared { .. }))
        );
    }

    #[test]
    fn seeded_rooms_replay_identically() {
        let config = GameConfig::default().with_seed(99);
        let play = || {
            let mut room = GameRoom::from_config(&config);
            room.add_player(Player::new("a")).unwrap();
            room.add_player(Player::new("b")).unwrap();
            room.play_to_finish(|_, _| {}).unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn summary_serializes() {
        let summary = GameSummary {
            winner: "a".into(),
            winning_score: 21,
            rounds: 4,
            standings: vec![Standing {
                name: "a".into(),
                score: 23,
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["winner"], "a");
        assert_eq!(json["standings"][0]["score"], 23);
    }

    proptest! {
        #[test]
        fn winner_is_first_to_reach_target(seed in any::<u64>()) {
            let config = GameConfig::default().with_seed(seed);
            let mut room = GameRoom::from_config(&config);
            for name in ["a", "b", "c"] {
                room.add_player(Player::new(name)).unwrap();
            }
            let summary = room.play_to_finish(|_, _| {}).unwrap();
            let idx = summary
                .standings
                .iter()
                .position(|s| s.name == summary.winner)
                .unwrap();
            prop_assert!(summary.standings[idx].score >= 21);
            for earlier in &summary.standings[..idx] {
                prop_assert!(earlier.score < 21);
            }
        }
    }
}
