//! CLI frontend for the Ship of Fools dice game.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use sof_core::GameConfig;

#[derive(Parser)]
#[command(
    name = "sof",
    about = "Ship of Fools: bank a ship, a captain, and a crew, then score the rest",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print every throw
    Play {
        /// Player name, in turn order (repeat for each player)
        #[arg(short, long = "player", default_values = ["mr d", "mr p"])]
        player: Vec<String>,

        /// Total needed to win
        #[arg(short, long, default_value = "21")]
        target: u32,

        /// RNG seed for a reproducible game (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Give up after this many rounds (0 = never)
        #[arg(long, default_value = "0")]
        max_rounds: u32,

        /// Also print the event log
        #[arg(short, long)]
        verbose: bool,

        /// Print only a JSON summary of the finished game
        #[arg(long)]
        json: bool,
    },

    /// Play many games quietly and tabulate wins per seat
    Stats {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Player name, in turn order (repeat for each player)
        #[arg(short, long = "player", default_values = ["mr d", "mr p"])]
        player: Vec<String>,

        /// Total needed to win
        #[arg(short, long, default_value = "21")]
        target: u32,

        /// Base RNG seed; game N uses seed + N
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            player,
            target,
            seed,
            max_rounds,
            verbose,
            json,
        } => {
            let mut config = GameConfig::default()
                .with_winning_score(target)
                .with_max_rounds(max_rounds);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::play::run(&player, &config, verbose, json)
        }
        Commands::Stats {
            games,
            player,
            target,
            seed,
        } => {
            let config = GameConfig::default()
                .with_winning_score(target)
                .with_seed(seed);
            commands::stats::run(&player, games, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
