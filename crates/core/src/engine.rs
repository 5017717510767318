//! Board engine - pure board transitions
//!
//! Every function here takes a board value and returns a new one; nothing is
//! mutated in place and nothing keeps state between calls. Randomness comes
//! only from the [`TileSource`] the caller passes in, so a board plus a seeded
//! source always yields the same result.

use log::{debug, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::gravity::{collapse, Settle, TileFall, TileSpawn};
use crate::matching::{find_matches, matched_positions, Match};
use crate::rng::TileSource;
use crate::scoring::score_tiles;
use crate::types::{Position, MIN_TILE_KINDS};

/// Generate a random, quiescent board
///
/// Every cell gets a random kind; then, silently (no score, no gravity), every
/// matched cell is re-rolled until the board holds no match.
///
/// # Panics
///
/// Panics if `kinds` is below [`MIN_TILE_KINDS`], where quiescence may be
/// unreachable.
pub fn generate_board<S: TileSource + ?Sized>(size: usize, kinds: u8, source: &mut S) -> Board {
    assert!(
        kinds >= MIN_TILE_KINDS,
        "need at least {} tile kinds, got {}",
        MIN_TILE_KINDS,
        kinds
    );

    let mut board = Board::empty(size);
    for pos in board.positions().collect::<Vec<_>>() {
        board.spawn(pos, source.next_kind(kinds));
    }

    let mut passes = 0u32;
    loop {
        let matches = find_matches(&board);
        if matches.is_empty() {
            break;
        }
        passes += 1;
        for pos in matched_positions(&matches) {
            board.recolor(pos, source.next_kind(kinds));
        }
    }
    trace!("generated {}x{} board after {} repair passes", size, size, passes);

    board
}

/// True iff `a` and `b` are orthogonal neighbours
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a.manhattan(b) == 1
}

/// Exchange the tiles in two slots
///
/// Only the payload (kind and tile id) moves; each cell keeps the position of
/// its slot. Adjacency is the caller's responsibility and is not checked here;
/// [`GameState::try_swap`](crate::GameState::try_swap) is the checked path.
///
/// # Panics
///
/// Panics if either position is outside the board.
pub fn swap(board: &Board, a: Position, b: Position) -> Board {
    let mut next = board.clone();
    next.exchange(a, b);
    next
}

/// Empty every slot covered by `matches`
pub fn remove_matches(board: &Board, matches: &[Match]) -> Board {
    let mut next = board.clone();
    for m in matches {
        for &pos in m.positions() {
            next.clear(pos);
        }
    }
    next
}

/// One removal + gravity + refill round of a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeRound {
    /// Multiplier applied to this round (1 for the swap's own round)
    pub combo: u32,
    pub matches: Vec<Match>,
    /// De-duplicated cleared positions, sorted
    pub cleared: Vec<Position>,
    pub score: u32,
    /// Board after the matched tiles were emptied
    pub removed: Board,
    /// Board after gravity and refill
    pub settled: Board,
    pub falls: Vec<TileFall>,
    pub spawns: Vec<TileSpawn>,
}

/// Outcome of [`resolve_turn`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    pub board: Board,
    pub score: u32,
    pub rounds: Vec<CascadeRound>,
}

impl TurnResult {
    /// Whether anything matched at all (false means the swap should be undone)
    pub fn matched(&self) -> bool {
        !self.rounds.is_empty()
    }

    /// Rounds executed, including the one the swap itself triggered
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Rounds executed after the first one
    pub fn cascade_count(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }

    /// Multiplier of the last round (1 if nothing matched)
    pub fn final_combo(&self) -> u32 {
        self.rounds.last().map_or(1, |round| round.combo)
    }

    /// Total number of tiles cleared over all rounds
    pub fn tiles_cleared(&self) -> usize {
        self.rounds.iter().map(|round| round.cleared.len()).sum()
    }
}

/// Resolve all matches on `board`, cascading until it is quiescent
///
/// Each round scores `cleared * score_per_tile * combo`, empties the matched
/// slots, collapses and refills the columns in one pass, then bumps the combo.
/// The combo always starts at 1. A board with no match comes back unchanged
/// with zero score and no rounds.
///
/// The loop only ends once the board is quiescent, so `source` must not keep
/// producing matches forever (a script of a single kind would).
pub fn resolve_turn<S: TileSource + ?Sized>(
    board: &Board,
    config: &GameConfig,
    source: &mut S,
) -> TurnResult {
    let mut current = board.clone();
    let mut combo = 1u32;
    let mut score = 0u32;
    let mut rounds = Vec::new();

    loop {
        let matches = find_matches(&current);
        if matches.is_empty() {
            break;
        }

        let cleared = matched_positions(&matches);
        let round_score = score_tiles(cleared.len(), combo, config.score_per_tile);
        score = score.saturating_add(round_score);

        let removed = remove_matches(&current, &matches);
        let Settle {
            board: settled,
            falls,
            spawns,
        } = collapse(&removed, config.tile_kinds, source);

        debug!(
            "round {}: {} matches, {} tiles, combo x{}, +{}",
            rounds.len() + 1,
            matches.len(),
            cleared.len(),
            combo,
            round_score
        );

        current = settled.clone();
        rounds.push(CascadeRound {
            combo,
            matches,
            cleared,
            score: round_score,
            removed,
            settled,
            falls,
            spawns,
        });
        combo += 1;
    }

    TurnResult {
        board: current,
        score,
        rounds,
    }
}
