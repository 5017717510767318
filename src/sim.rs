//! Headless self-play
//!
//! Plays one full game with a greedy policy: among all valid swaps, take the
//! one that clears the most tiles in its first round (earliest in board order
//! on ties). Used by the `match3-sim` binary and handy for soak-testing the
//! engine.

use anyhow::{anyhow, Result};

use crate::core::{
    find_matches, find_valid_swaps, matched_positions, swap, Board, GameConfig, GameState,
    TurnOutcome, TurnReport,
};
use crate::types::Position;

pub const USAGE: &str = "usage: match3-sim [--seed <u32>] [--size <n>] [--kinds <k>] [--moves <m>] [--json]";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimConfig {
    /// `None` picks a random seed
    pub seed: Option<u32>,
    pub game: GameConfig,
    /// Emit one JSON snapshot per turn instead of a text line
    pub json: bool,
}

/// Summary of a finished simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSummary {
    pub seed: u32,
    pub score: u32,
    pub turns: u32,
    pub best_combo: u32,
    pub tiles_cleared: usize,
    /// The board ran out of valid swaps before the moves did
    pub stuck: bool,
}

/// Parse command-line flags (without the program name)
///
/// Returns `Ok(None)` when `--help` was requested.
pub fn parse_sim_args(args: &[String]) -> Result<Option<SimConfig>> {
    let mut config = SimConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                config.seed = Some(parse_value(args, i, "--seed")?);
            }
            "--size" => {
                i += 1;
                config.game.board_size = parse_value(args, i, "--size")?;
            }
            "--kinds" => {
                i += 1;
                config.game.tile_kinds = parse_value(args, i, "--kinds")?;
            }
            "--moves" => {
                i += 1;
                config.game.starting_moves = parse_value(args, i, "--moves")?;
            }
            "--json" => config.json = true,
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(anyhow!("sim: unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }

    config
        .game
        .validate()
        .map_err(|e| anyhow!("sim: invalid configuration: {}", e))?;
    Ok(Some(config))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = args
        .get(i)
        .ok_or_else(|| anyhow!("sim: missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("sim: invalid {} value: {}", flag, v))
}

/// The greedy policy's pick, or `None` on a board with no valid swap
pub fn choose_swap(board: &Board) -> Option<(Position, Position)> {
    let mut best: Option<((Position, Position), usize)> = None;
    for (a, b) in find_valid_swaps(board) {
        let cleared = matched_positions(&find_matches(&swap(board, a, b))).len();
        if best.map_or(true, |(_, most)| cleared > most) {
            best = Some(((a, b), cleared));
        }
    }
    best.map(|(pair, _)| pair)
}

/// Play one game to the end, calling `on_turn` after every resolved turn
pub fn run_game<F>(config: &SimConfig, seed: u32, mut on_turn: F) -> Result<SimSummary>
where
    F: FnMut(&GameState, &TurnReport) -> Result<()>,
{
    let mut game = GameState::with_config(config.game, seed)
        .map_err(|e| anyhow!("sim: invalid configuration: {}", e))?;
    let mut summary = SimSummary {
        seed,
        score: 0,
        turns: 0,
        best_combo: 1,
        tiles_cleared: 0,
        stuck: false,
    };

    while !game.game_over() {
        let Some((a, b)) = choose_swap(game.board()) else {
            log::info!("seed {}: no valid swap left after {} turns", seed, summary.turns);
            summary.stuck = true;
            break;
        };

        let (next, outcome) = game.try_swap(a, b);
        game = next;
        match outcome {
            TurnOutcome::Resolved(report) => {
                summary.turns += 1;
                summary.best_combo = summary.best_combo.max(report.result.final_combo());
                summary.tiles_cleared += report.result.tiles_cleared();
                on_turn(&game, &report)?;
            }
            other => {
                return Err(anyhow!(
                    "sim: swap ({}, {}) <-> ({}, {}) did not resolve: {:?}",
                    a.row,
                    a.col,
                    b.row,
                    b.col,
                    other
                ));
            }
        }
    }

    summary.score = game.score();
    Ok(summary)
}
