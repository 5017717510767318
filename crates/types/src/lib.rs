//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no dependencies (serde derives are opt-in via
//! the `serde` feature), so they can be used by the engine, a renderer, or an
//! input controller alike.
//!
//! # Board Dimensions
//!
//! The default playfield is a square grid:
//!
//! - **Size**: 8x8 cells, rows and columns indexed 0-7
//! - **Tile kinds**: 7 (tags 0-6)
//! - Row 0 is the top of the board; gravity pulls toward the last row
//!
//! # Animation Timing
//!
//! The engine itself has no notion of time. These are the delays a controller
//! schedules between engine calls so the renderer can play each phase:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SWAP_MS` | 200 | Two tiles trade places |
//! | `REVERT_MS` | 200 | A swap that matched nothing slides back |
//! | `REMOVE_MS` | 300 | Matched tiles shrink away |
//! | `FALL_MS` | 400 | Columns collapse and refilled tiles drop in |
//! | `COMBO_DISPLAY_MS` | 1500 | Combo indicator stays on screen |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Position, TileKind, BOARD_SIZE, TILE_KINDS};
//!
//! let a = Position::new(2, 2);
//! let b = Position::new(2, 3);
//! assert_eq!(a.manhattan(b), 1);
//!
//! let kind = TileKind::new(3);
//! assert_eq!(kind.index(), 3);
//!
//! assert_eq!(BOARD_SIZE, 8);
//! assert_eq!(TILE_KINDS, 7);
//! ```

/// Default board size (8x8)
pub const BOARD_SIZE: usize = 8;

/// Default number of distinct tile kinds
pub const TILE_KINDS: u8 = 7;

/// Moves available at the start of a game
pub const STARTING_MOVES: u32 = 30;

/// Points per cleared tile before the combo multiplier
pub const SCORE_PER_TILE: u32 = 10;

/// Minimum run length that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Smallest playable board (anything smaller can never hold a match)
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board
pub const MAX_BOARD_SIZE: usize = 64;

/// Fewest tile kinds for which a quiescent board is always reachable
pub const MIN_TILE_KINDS: u8 = 3;

/// Swap animation duration in milliseconds
pub const SWAP_MS: u32 = 200;

/// Duration of the slide-back after a swap that matched nothing
pub const REVERT_MS: u32 = 200;

/// Removal (shrink) animation duration in milliseconds
pub const REMOVE_MS: u32 = 300;

/// Gravity and refill animation duration in milliseconds
pub const FALL_MS: u32 = 400;

/// How long a combo indicator stays visible after a turn
pub const COMBO_DISPLAY_MS: u32 = 1500;

/// A tile kind tag in `[0, tile_kinds)`
///
/// The engine only compares kinds for equality; what a kind looks like
/// (colour, sprite) is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TileKind(u8);

impl TileKind {
    /// Wrap a raw kind tag
    pub const fn new(tag: u8) -> Self {
        Self(tag)
    }

    /// The raw kind tag
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl From<u8> for TileKind {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

/// A board coordinate
///
/// `row` grows downward (row 0 is the top), `col` grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Stable identity of a physical tile
///
/// Ids travel with a tile's kind when it is swapped or falls, and a fresh id
/// is assigned to every refilled tile. Renderers key their sprites on it.
pub type TileId = u32;

/// Game status flag for the renderer and input controller
///
/// The engine's pure functions never read it. Input is only accepted in
/// [`GameStatus::Idle`]; [`GameStatus::GameOver`] is terminal until a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    #[default]
    Idle,
    Swapping,
    Matching,
    Falling,
    GameOver,
}

impl GameStatus {
    /// Whether a tile press should be processed in this status
    pub fn accepts_input(self) -> bool {
        matches!(self, GameStatus::Idle)
    }

    /// Parse status from its snake_case name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::GameStatus;
    ///
    /// assert_eq!(GameStatus::from_str("game_over"), Some(GameStatus::GameOver));
    /// assert_eq!(GameStatus::from_str("IDLE"), Some(GameStatus::Idle));
    /// assert_eq!(GameStatus::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idle" => Some(GameStatus::Idle),
            "swapping" => Some(GameStatus::Swapping),
            "matching" => Some(GameStatus::Matching),
            "falling" => Some(GameStatus::Falling),
            "game_over" => Some(GameStatus::GameOver),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Swapping => "swapping",
            GameStatus::Matching => "matching",
            GameStatus::Falling => "falling",
            GameStatus::GameOver => "game_over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_constants() {
        assert_eq!(BOARD_SIZE, 8);
        assert_eq!(TILE_KINDS, 7);
        assert_eq!(STARTING_MOVES, 30);
        assert_eq!(SCORE_PER_TILE, 10);
        assert_eq!(MIN_MATCH_LEN, 3);
    }

    #[test]
    fn animation_timing_defaults() {
        assert_eq!(SWAP_MS, 200);
        assert_eq!(REVERT_MS, 200);
        assert_eq!(REMOVE_MS, 300);
        assert_eq!(FALL_MS, 400);
        assert_eq!(COMBO_DISPLAY_MS, 1500);
    }

    #[test]
    fn status_accepts_input_only_when_idle() {
        assert!(GameStatus::Idle.accepts_input());
        assert!(!GameStatus::Swapping.accepts_input());
        assert!(!GameStatus::Matching.accepts_input());
        assert!(!GameStatus::Falling.accepts_input());
        assert!(!GameStatus::GameOver.accepts_input());
    }

    #[test]
    fn status_string_roundtrip() {
        for status in [
            GameStatus::Idle,
            GameStatus::Swapping,
            GameStatus::Matching,
            GameStatus::Falling,
            GameStatus::GameOver,
        ] {
            assert_eq!(GameStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(GameStatus::from_str("paused"), None);
    }

    #[test]
    fn position_neighbors() {
        let p = Position::new(4, 5);
        assert_eq!(p.manhattan(Position::new(4, 6)), 1);
        assert_eq!(p.manhattan(Position::new(3, 5)), 1);
        assert_eq!(p.manhattan(Position::new(3, 4)), 2);
        assert_eq!(p.manhattan(p), 0);
    }
}
