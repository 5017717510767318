//! Gravity and refill
//!
//! After matched tiles are removed each column is compacted toward the bottom
//! (relative order preserved) and the gap left at the top is filled with fresh
//! tiles. [`collapse`] runs both steps as one pass and is what the cascade loop
//! calls once per round.

use crate::board::Board;
use crate::rng::TileSource;
use crate::types::{Position, TileId, TileKind};

/// A surviving tile that moved down during gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileFall {
    pub id: TileId,
    pub from: Position,
    pub to: Position,
}

impl TileFall {
    /// Rows travelled
    pub fn distance(&self) -> usize {
        self.to.row - self.from.row
    }
}

/// A tile created by refill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSpawn {
    pub id: TileId,
    pub kind: TileKind,
    pub at: Position,
    /// How many rows above the board the tile starts its drop from.
    /// The lowest new tile in a column starts one row above the top edge.
    pub drop_rows: usize,
}

/// Result of one gravity + refill pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settle {
    pub board: Board,
    pub falls: Vec<TileFall>,
    pub spawns: Vec<TileSpawn>,
}

/// Compact every column toward the bottom
///
/// Non-empty tiles keep their relative order; all empty slots end up at the
/// top of their column.
pub fn apply_gravity(board: &Board) -> (Board, Vec<TileFall>) {
    let size = board.size();
    let mut next = board.clone();
    let mut falls = Vec::new();

    for col in 0..size {
        // Two-pointer pass from the bottom; `write_row` is the next slot to fill.
        let mut write_row = size;
        for read_row in (0..size).rev() {
            if board.kind_at(read_row, col).is_none() {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let from = Position::new(read_row, col);
                let to = Position::new(write_row, col);
                next.relocate(from, to);
                falls.push(TileFall {
                    id: board.get(from).id(),
                    from,
                    to,
                });
            }
        }
    }

    (next, falls)
}

/// Fill every empty slot with a fresh tile
///
/// Columns are filled left to right, each from its lowest gap upward, so a
/// given source always produces the same board. New tiles are not screened
/// against each other; they may form matches immediately.
pub fn refill<S: TileSource + ?Sized>(
    board: &Board,
    kinds: u8,
    source: &mut S,
) -> (Board, Vec<TileSpawn>) {
    let size = board.size();
    let mut next = board.clone();
    let mut spawns = Vec::new();

    for col in 0..size {
        let mut drop_rows = 0;
        for row in (0..size).rev() {
            let pos = Position::new(row, col);
            if next.get(pos).kind().is_some() {
                continue;
            }
            drop_rows += 1;
            let kind = source.next_kind(kinds);
            let id = next.spawn(pos, kind);
            spawns.push(TileSpawn {
                id,
                kind,
                at: pos,
                drop_rows,
            });
        }
    }

    (next, spawns)
}

/// Gravity followed by refill, as a single atomic step
pub fn collapse<S: TileSource + ?Sized>(board: &Board, kinds: u8, source: &mut S) -> Settle {
    let (fallen, falls) = apply_gravity(board);
    let (board, spawns) = refill(&fallen, kinds, source);
    Settle {
        board,
        falls,
        spawns,
    }
}
