//! Headless match-3 runner (default binary).
//!
//! Plays a seeded game with the greedy policy from [`match3::sim`] and prints
//! one line per turn followed by a summary. Set `RUST_LOG=debug` to see every
//! cascade round.

use anyhow::Result;

use match3::core::TurnReport;
use match3::sim::{parse_sim_args, run_game, USAGE};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_sim_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let seed = config.seed.unwrap_or_else(rand::random::<u32>);
    log::info!(
        "playing {}x{} board, {} kinds, {} moves, seed {}",
        config.game.board_size,
        config.game.board_size,
        config.game.tile_kinds,
        config.game.starting_moves,
        seed
    );

    let mut turn = 0u32;
    let summary = run_game(&config, seed, |game, report| {
        turn += 1;
        if config.json {
            println!("{}", serde_json::to_string(&game.snapshot())?);
        } else {
            println!("{}", describe_turn(turn, report, game.score()));
        }
        Ok(())
    })?;

    println!(
        "seed {}: score {} in {} turns, {} tiles cleared, best combo x{}{}",
        summary.seed,
        summary.score,
        summary.turns,
        summary.tiles_cleared,
        summary.best_combo,
        if summary.stuck { " (no moves left on board)" } else { "" }
    );
    Ok(())
}

fn describe_turn(turn: u32, report: &TurnReport, total: u32) -> String {
    let (a, b) = report.swap;
    format!(
        "turn {:>2}: ({}, {}) <-> ({}, {})  +{:<5} rounds {}  combo x{}  score {}  moves {}",
        turn,
        a.row,
        a.col,
        b.row,
        b.col,
        report.score(),
        report.result.round_count(),
        report.result.final_combo(),
        total,
        report.moves_left
    )
}
