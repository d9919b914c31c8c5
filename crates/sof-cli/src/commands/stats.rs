use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use sof_core::{GameConfig, GameRoom};

pub fn run(players: &[String], games: u32, config: &GameConfig) -> Result<(), String> {
    if games == 0 {
        return Err("--games must be at least 1".into());
    }
    let base_seed = config.seed.unwrap_or_default();

    let mut wins = vec![0u32; players.len()];
    let mut total_rounds = 0u64;

    for game in 0..games {
        let game_config = config
            .clone()
            .with_seed(base_seed.wrapping_add(u64::from(game)));
        let mut room = GameRoom::from_config(&game_config);
        super::seat_players(&mut room, players)?;

        let summary = room.play_to_finish(|_, _| {}).map_err(|e| e.to_string())?;
        total_rounds += u64::from(summary.rounds);
        if let Some(seat) = players.iter().position(|p| *p == summary.winner) {
            wins[seat] += 1;
        }
    }

    println!(
        "  {} {}",
        "Ship of Fools".bold(),
        format!(
            "({games} games, target {}, seed={base_seed})",
            config.winning_score
        )
        .dimmed()
    );
    println!(
        "  Average game length: {:.2} rounds",
        total_rounds as f64 / f64::from(games)
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Seat", "Player", "Wins", "Win rate"]);
    for (seat, (name, count)) in players.iter().zip(&wins).enumerate() {
        table.add_row(vec![
            (seat + 1).to_string(),
            name.clone(),
            count.to_string(),
            format!("{:.1}%", f64::from(*count) * 100.0 / f64::from(games)),
        ]);
    }
    println!("{table}");

    Ok(())
}
