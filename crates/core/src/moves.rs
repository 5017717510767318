//! Valid swap discovery (hints)
//!
//! A swap is valid when exchanging the two tiles leaves at least one match on
//! the board. Only the rows and columns through the two swapped cells can
//! change, so each candidate is checked locally instead of rescanning.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::engine::swap;
use crate::types::{Position, MIN_MATCH_LEN};

/// Every adjacent pair whose swap produces a match
///
/// Pairs are listed once, in board order, each as `(a, b)` with `b` to the
/// right of or below `a`.
pub fn find_valid_swaps(board: &Board) -> Vec<(Position, Position)> {
    let size = board.size();
    let mut out = Vec::new();
    for pos in board.positions() {
        let right = Position::new(pos.row, pos.col + 1);
        let down = Position::new(pos.row + 1, pos.col);
        for other in [right, down] {
            if other.row < size && other.col < size && swap_matches(board, pos, other) {
                out.push((pos, other));
            }
        }
    }
    out
}

/// Whether any valid swap exists
pub fn has_valid_swap(board: &Board) -> bool {
    let size = board.size();
    board.positions().any(|pos| {
        (pos.col + 1 < size && swap_matches(board, pos, Position::new(pos.row, pos.col + 1)))
            || (pos.row + 1 < size && swap_matches(board, pos, Position::new(pos.row + 1, pos.col)))
    })
}

/// Neighbours of `from` that it can be validly swapped with
pub fn valid_targets(board: &Board, from: Position) -> ArrayVec<Position, 4> {
    board
        .neighbors(from)
        .into_iter()
        .filter(|&to| swap_matches(board, from, to))
        .collect()
}

/// Whether swapping `a` and `b` forms a match through either cell
pub fn swap_matches(board: &Board, a: Position, b: Position) -> bool {
    if board.kind(a) == board.kind(b) {
        return false;
    }
    let swapped = swap(board, a, b);
    forms_run(&swapped, a) || forms_run(&swapped, b)
}

/// Whether the tile at `pos` is part of a horizontal or vertical run
fn forms_run(board: &Board, pos: Position) -> bool {
    let Some(kind) = board.kind(pos) else {
        return false;
    };
    let size = board.size();

    let mut horizontal = 1;
    let mut c = pos.col;
    while c > 0 && board.kind_at(pos.row, c - 1) == Some(kind) {
        horizontal += 1;
        c -= 1;
    }
    let mut c = pos.col;
    while c + 1 < size && board.kind_at(pos.row, c + 1) == Some(kind) {
        horizontal += 1;
        c += 1;
    }
    if horizontal >= MIN_MATCH_LEN {
        return true;
    }

    let mut vertical = 1;
    let mut r = pos.row;
    while r > 0 && board.kind_at(r - 1, pos.col) == Some(kind) {
        vertical += 1;
        r -= 1;
    }
    let mut r = pos.row;
    while r + 1 < size && board.kind_at(r + 1, pos.col) == Some(kind) {
        vertical += 1;
        r += 1;
    }
    vertical >= MIN_MATCH_LEN
}
