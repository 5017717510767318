//! Match detection
//!
//! A scan makes two sweeps over the board: rows left-to-right, then columns
//! top-to-bottom. Every position belongs to at most one [`Match`] per scan. When
//! a horizontal and a vertical run cross, the shared cell goes to the
//! horizontal match because rows are swept first.

use crate::board::Board;
use crate::types::{Position, TileKind, MIN_MATCH_LEN};

/// Direction of the run a match was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A qualifying run submitted for removal
///
/// Positions are unique, in scan order, and never shared with another match
/// from the same scan. A vertical match crossing an earlier horizontal one
/// therefore holds fewer cells than its run length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    kind: TileKind,
    orientation: Orientation,
    positions: Vec<Position>,
}

impl Match {
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Find every match on the board
///
/// Empty cells never start or extend a run. Runs entirely covered by an
/// earlier match (the tail of a 4- or 5-run, say) produce nothing.
pub fn find_matches(board: &Board) -> Vec<Match> {
    let size = board.size();
    let mut matches = Vec::new();
    let mut claimed = vec![false; size * size];

    // Horizontal sweep
    for row in 0..size {
        for col in 0..size {
            let Some(kind) = board.kind_at(row, col) else {
                continue;
            };
            let mut len = 1;
            while col + len < size && board.kind_at(row, col + len) == Some(kind) {
                len += 1;
            }
            if len >= MIN_MATCH_LEN {
                let positions = (col..col + len)
                    .map(|c| Position::new(row, c))
                    .filter(|p| claim(&mut claimed, size, *p))
                    .collect::<Vec<_>>();
                if !positions.is_empty() {
                    matches.push(Match {
                        kind,
                        orientation: Orientation::Horizontal,
                        positions,
                    });
                }
            }
        }
    }

    // Vertical sweep
    for col in 0..size {
        for row in 0..size {
            let Some(kind) = board.kind_at(row, col) else {
                continue;
            };
            let mut len = 1;
            while row + len < size && board.kind_at(row + len, col) == Some(kind) {
                len += 1;
            }
            if len >= MIN_MATCH_LEN {
                let positions = (row..row + len)
                    .map(|r| Position::new(r, col))
                    .filter(|p| claim(&mut claimed, size, *p))
                    .collect::<Vec<_>>();
                if !positions.is_empty() {
                    matches.push(Match {
                        kind,
                        orientation: Orientation::Vertical,
                        positions,
                    });
                }
            }
        }
    }

    matches
}

/// Mark `pos` as counted; returns false if it already was
#[inline(always)]
fn claim(claimed: &mut [bool], size: usize, pos: Position) -> bool {
    let idx = pos.row * size + pos.col;
    !std::mem::replace(&mut claimed[idx], true)
}

/// True if the board contains no match
pub fn is_quiescent(board: &Board) -> bool {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let Some(kind) = board.kind_at(row, col) else {
                continue;
            };
            let horizontal = col + 2 < size
                && board.kind_at(row, col + 1) == Some(kind)
                && board.kind_at(row, col + 2) == Some(kind);
            let vertical = row + 2 < size
                && board.kind_at(row + 1, col) == Some(kind)
                && board.kind_at(row + 2, col) == Some(kind);
            if horizontal || vertical {
                return false;
            }
        }
    }
    true
}

/// Merge match groups into one sorted, de-duplicated position set
pub fn matched_positions(matches: &[Match]) -> Vec<Position> {
    let mut positions: Vec<Position> = matches
        .iter()
        .flat_map(|m| m.positions.iter().copied())
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    #[test]
    fn test_no_runs_no_matches() {
        let b = board(
            "0101
             1010
             0101
             1010",
        );
        assert!(find_matches(&b).is_empty());
        assert!(is_quiescent(&b));
    }

    #[test]
    fn test_horizontal_run_lengths() {
        for len in 3..=5 {
            let mut rows = vec![String::from("12121"), String::from("21212")];
            let mut first: Vec<char> = "01010".chars().collect();
            for c in first.iter_mut().take(len) {
                *c = '3';
            }
            rows.insert(0, first.into_iter().collect());
            rows.push(String::from("12121"));
            rows.push(String::from("21212"));
            let b = board(&rows.join("\n"));

            let matches = find_matches(&b);
            assert_eq!(matches.len(), 1, "run of {}", len);
            assert_eq!(matches[0].len(), len);
            assert_eq!(matches[0].orientation(), Orientation::Horizontal);
            assert_eq!(matches[0].kind(), TileKind::new(3));
        }
    }

    #[test]
    fn test_vertical_run() {
        let b = board(
            "0120
             0211
             0121
             1212",
        );
        let matches = find_matches(&b);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].orientation(), Orientation::Vertical);
        assert_eq!(
            matches[0].positions(),
            &[Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_l_shape_shared_cell_goes_to_horizontal() {
        let b = board(
            "0001
             0212
             0121
             1212",
        );
        let matches = find_matches(&b);
        assert_eq!(matches.len(), 2);

        let horizontal = &matches[0];
        let vertical = &matches[1];
        assert_eq!(horizontal.orientation(), Orientation::Horizontal);
        assert_eq!(horizontal.len(), 3);
        assert!(horizontal.contains(Position::new(0, 0)));

        assert_eq!(vertical.orientation(), Orientation::Vertical);
        assert_eq!(vertical.len(), 2);
        assert!(!vertical.contains(Position::new(0, 0)));

        assert_eq!(matched_positions(&matches).len(), 5);
    }

    #[test]
    fn test_empty_cells_never_match() {
        let b = board(
            "...0
             1212
             2121
             1212",
        );
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn test_two_separate_runs() {
        let b = board(
            "0001
             1212
             2121
             3331",
        );
        let matches = find_matches(&b);
        assert_eq!(matches.len(), 2);
        assert_eq!(matched_positions(&matches).len(), 6);
        assert!(!is_quiescent(&b));
    }

    #[test]
    fn test_cross_shape() {
        let b = board(
            "12021
             21012
             00000
             12021
             21012",
        );
        let matches = find_matches(&b);
        // Row 2 claims the centre; column 2 keeps the other four.
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].len(), 5);
        assert_eq!(matches[1].len(), 4);
        assert_eq!(matched_positions(&matches).len(), 9);
    }
}
