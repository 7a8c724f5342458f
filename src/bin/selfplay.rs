//! Self-play smoke test: bots play full games and the results are summarised.
//!
//! `RUST_LOG=info selfplay --players 3 --games 10` shows every action.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

use tianji::core::{EngineConfig, MAX_PLAYERS, MIN_PLAYERS};
use tianji::decision::{play_turn, ScoringBot};
use tianji::engine::{ActionEngine, GameOutcome};
use tianji::strategies::StrategyCatalog;

/// Play bot-vs-bot games of Tianji
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (2-8)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u64,

    /// Seed of the first game; later games use seed + n
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Round cap
    #[arg(long, default_value = "20")]
    max_rounds: u32,

    /// Pick actions at random, weighted by score, instead of greedily
    #[arg(short, long)]
    weighted: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players) {
        eprintln!("players must be {}-{}", MIN_PLAYERS, MAX_PLAYERS);
        return ExitCode::FAILURE;
    }

    let catalog = Arc::new(StrategyCatalog::standard());
    let mut wins = vec![0u64; args.players];

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game);
        let names = (1..=args.players).map(|n| format!("Player {}", n));
        let config = EngineConfig::new(names)
            .with_seed(seed)
            .with_max_rounds(args.max_rounds);

        let mut engine = match ActionEngine::new(config, Arc::clone(&catalog)) {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("cannot create game: {}", err);
                return ExitCode::FAILURE;
            }
        };
        engine.start();

        let mut bots: Vec<ScoringBot> = (0..args.players)
            .map(|seat| {
                if args.weighted {
                    ScoringBot::weighted(seed.wrapping_mul(31).wrapping_add(seat as u64))
                } else {
                    ScoringBot::greedy()
                }
            })
            .collect();

        while !engine.is_finished() {
            let seat = engine.current_player().index();
            let summary = play_turn(&mut engine, &mut bots[seat]);
            if !summary.advance.success {
                eprintln!("game {} stalled: {}", game, summary.advance.message);
                return ExitCode::FAILURE;
            }
        }

        let status = engine.get_game_status();
        match engine.outcome() {
            Some(outcome) => {
                let winner = outcome.winner();
                wins[winner.index()] += 1;
                let how = match outcome {
                    GameOutcome::Victory(victory) => victory.condition.to_string(),
                    GameOutcome::RoundLimit { score, .. } => format!("score {} at round limit", score),
                };
                println!(
                    "game {:>3} (seed {}): {} wins by {} in round {}, {} actions",
                    game,
                    seed,
                    engine.state().player(winner).name,
                    how,
                    status.round,
                    engine.history().len()
                );
            }
            None => println!("game {:>3} (seed {}): no result", game, seed),
        }
        info!("final status: {:?}", status);
    }

    println!();
    for (seat, count) in wins.iter().enumerate() {
        println!("Player {}: {} wins", seat + 1, count);
    }
    ExitCode::SUCCESS
}
