use colored::Colorize;

use sof_core::{GameConfig, GameEventKind, GameLog, GameRoom, RoundReport};

pub fn run(
    players: &[String],
    config: &GameConfig,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let mut room = GameRoom::from_config(config);
    super::seat_players(&mut room, players)?;

    let summary = room
        .play_to_finish(|reports, standings| {
            if json {
                return;
            }
            for report in reports {
                print_round(report);
            }
            for standing in standings {
                println!("{standing}");
            }
        })
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if verbose {
        print_log(room.log());
    }

    if let Some(line) = room.announce_winner() {
        println!("{}", line.green().bold());
    }
    Ok(())
}

fn print_round(report: &RoundReport) {
    println!("{} turn:", report.player);
    println!("Their results");
    for roll in &report.rolls {
        println!("{roll}");
    }
    println!("In this round you scored: {}", report.score);
}

fn print_log(log: &GameLog) {
    println!();
    println!("{}", "Event Log".bold().underline());
    for event in log.events() {
        let label = format!("[round {:>3}]", event.round).dimmed();
        let text = event.to_string();
        let desc = match &event.kind {
            GameEventKind::RoundStarted => text.normal(),
            GameEventKind::StageSecured { .. } => text.cyan(),
            GameEventKind::RoundScored { .. } => text.green(),
            GameEventKind::RoundBusted { .. } => text.yellow(),
            GameEventKind::WinnerDeclared { .. } => text.green().bold(),
        };
        println!("{label} {desc}");
    }
    println!();
}
