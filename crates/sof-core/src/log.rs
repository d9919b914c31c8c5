//! Round-by-round history of a game.
//!
//! The room files every round's [`RoundReport`]s here as they are played.
//! [`GameLog::events`] replays that history as a flat narration: round
//! starts, each stage secured and on which throw, the round outcome, and
//! finally the winner.

use crate::engine::{RoundReport, Stage};

/// Something worth narrating about a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEventKind {
    /// A new round began for every player.
    RoundStarted,
    /// A player secured the ship, captain, or crew.
    StageSecured {
        /// The player who secured it.
        player: String,
        /// Stage reached afterwards.
        stage: Stage,
        /// Throw (1-3) it happened on.
        attempt: u8,
    },
    /// A player's round ended with a score.
    RoundScored {
        /// The player.
        player: String,
        /// Points earned this round.
        score: u32,
    },
    /// A player's round ended short of the crew.
    RoundBusted {
        /// The player.
        player: String,
        /// Stage the round stopped at.
        stage: Stage,
    },
    /// A player reached the winning score.
    WinnerDeclared {
        /// The winner.
        player: String,
        /// The winner's total.
        total: u32,
    },
}

/// A narrated event, tagged with its game round (0 = before any round).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    /// Game round the event belongs to.
    pub round: u32,
    /// What happened.
    pub kind: GameEventKind,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GameEventKind::RoundStarted => write!(f, "round {} begins", self.round),
            GameEventKind::StageSecured {
                player,
                stage,
                attempt,
            } => {
                let what = match stage {
                    Stage::NeedShip | Stage::NeedCaptain => "ship",
                    Stage::NeedCrew => "captain",
                    Stage::Scored => "crew",
                };
                write!(f, "{player} secured the {what} on throw {attempt}")
            }
            GameEventKind::RoundScored { player, score } => write!(f, "{player} scored {score}"),
            GameEventKind::RoundBusted { player, stage } => {
                write!(f, "{player} came up empty ({stage})")
            }
            GameEventKind::WinnerDeclared { player, total } => {
                write!(f, "{player} wins with {total}")
            }
        }
    }
}

/// Reports of every round played, plus the winner once known.
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    rounds: Vec<Vec<RoundReport>>,
    winner: Option<(String, u32)>,
}

impl GameLog {
    pub(crate) fn record_round(&mut self, reports: Vec<RoundReport>) {
        self.rounds.push(reports);
    }

    pub(crate) fn record_winner(&mut self, player: &str, total: u32) {
        self.winner = Some((player.to_string(), total));
    }

    pub(crate) fn clear_winner(&mut self) {
        self.winner = None;
    }

    /// The history as narration, in the order things happened.
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut last_round = 0;
        for (round, reports) in (1u32..).zip(&self.rounds) {
            last_round = round;
            events.push(GameEvent {
                round,
                kind: GameEventKind::RoundStarted,
            });
            for report in reports {
                narrate_report(&mut events, round, report);
            }
        }
        if let Some((player, total)) = &self.winner {
            events.push(GameEvent {
                round: last_round,
                kind: GameEventKind::WinnerDeclared {
                    player: player.clone(),
                    total: *total,
                },
            });
        }
        events
    }
}

fn narrate_report(events: &mut Vec<GameEvent>, round: u32, report: &RoundReport) {
    let mut stage = Stage::NeedShip;
    for roll in &report.rolls {
        while stage < roll.stage_after {
            stage = stage.next();
            events.push(GameEvent {
                round,
                kind: GameEventKind::StageSecured {
                    player: report.player.clone(),
                    stage,
                    attempt: roll.attempt,
                },
            });
        }
    }

    let kind = if report.is_bust() {
        GameEventKind::RoundBusted {
            player: report.player.clone(),
            stage: report.stage,
        }
    } else {
        GameEventKind::RoundScored {
            player: report.player.clone(),
            score: report.score,
        }
    };
    events.push(GameEvent { round, kind });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RollRecord;

    fn roll(attempt: u8, stage_after: Stage) -> RollRecord {
        RollRecord {
            attempt,
            visible: Vec::new(),
            rolled: Vec::new(),
            stage_after,
        }
    }

    fn report(player: &str, stages: [Stage; 3], score: u32) -> RoundReport {
        RoundReport {
            player: player.to_string(),
            rolls: vec![
                roll(1, stages[0]),
                roll(2, stages[1]),
                roll(3, stages[2]),
            ],
            stage: stages[2],
            score,
        }
    }

    #[test]
    fn empty_log_narrates_nothing() {
        assert!(GameLog::default().events().is_empty());
    }

    #[test]
    fn stages_are_narrated_on_the_throw_they_happen() {
        let mut log = GameLog::default();
        log.record_round(vec![report(
            "ann",
            [Stage::NeedCaptain, Stage::NeedCaptain, Stage::Scored],
            9,
        )]);

        let lines: Vec<String> = log.events().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "round 1 begins",
                "ann secured the ship on throw 1",
                "ann secured the captain on throw 3",
                "ann secured the crew on throw 3",
                "ann scored 9",
            ]
        );
    }

    #[test]
    fn bust_rounds_name_the_stage_reached() {
        let mut log = GameLog::default();
        log.record_round(vec![report("bob", [Stage::NeedShip; 3], 0)]);
        let events = log.events();
        assert_eq!(
            events.last().unwrap().kind,
            GameEventKind::RoundBusted {
                player: "bob".into(),
                stage: Stage::NeedShip
            }
        );
        assert_eq!(events[1].to_string(), "bob came up empty (need ship)");
    }

    #[test]
    fn winner_closes_the_narration() {
        let mut log = GameLog::default();
        log.record_round(vec![report("cy", [Stage::Scored; 3], 12)]);
        log.record_round(vec![report("cy", [Stage::Scored; 3], 11)]);
        log.record_winner("cy", 23);

        let events = log.events();
        let last = events.last().unwrap();
        assert_eq!(last.round, 2);
        assert_eq!(last.to_string(), "cy wins with 23");
        assert_eq!(
            events
                .iter()
                .filter(|e| e.kind == GameEventKind::RoundStarted)
                .count(),
            2
        );

        log.clear_winner();
        assert!(
            !log.events()
                .iter()
                .any(|e| matches!(e.kind, GameEventKind::WinnerDeclared { .. }))
        );
    }
}
