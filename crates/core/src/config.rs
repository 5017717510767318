//! Game configuration
//!
//! Defaults come from the rule constants in `match3-types`; a caller that
//! wants different dimensions or pacing builds a [`GameConfig`] and validates
//! it before starting a game.

use std::fmt;

use crate::board::Board;
use crate::types::{
    BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_TILE_KINDS, SCORE_PER_TILE, STARTING_MOVES,
    TILE_KINDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub tile_kinds: u8,
    pub starting_moves: u32,
    pub score_per_tile: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            tile_kinds: TILE_KINDS,
            starting_moves: STARTING_MOVES,
            score_per_tile: SCORE_PER_TILE,
        }
    }
}

impl GameConfig {
    /// Check the configuration can produce a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }
        if self.tile_kinds < MIN_TILE_KINDS {
            return Err(ConfigError::TooFewKinds(self.tile_kinds));
        }
        if self.starting_moves == 0 {
            return Err(ConfigError::NoMoves);
        }
        Ok(())
    }

    /// Check a supplied starting board against this configuration
    ///
    /// The board must be fully populated and use only kinds in
    /// `[0, tile_kinds)`.
    pub fn validate_board(&self, board: &Board) -> Result<(), ConfigError> {
        let empty = board.empty_count();
        if empty > 0 {
            return Err(ConfigError::BoardNotFull(empty));
        }
        match board
            .cells()
            .iter()
            .filter_map(|cell| cell.kind())
            .find(|kind| kind.index() >= self.tile_kinds)
        {
            Some(kind) => Err(ConfigError::KindOutOfRange(kind.index())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall(usize),
    BoardTooLarge(usize),
    TooFewKinds(u8),
    NoMoves,
    /// Starting board has this many empty slots
    BoardNotFull(usize),
    /// Starting board holds a kind outside the palette
    KindOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall(size) => {
                write!(f, "board size {} is below the minimum of {}", size, MIN_BOARD_SIZE)
            }
            ConfigError::BoardTooLarge(size) => {
                write!(f, "board size {} exceeds the maximum of {}", size, MAX_BOARD_SIZE)
            }
            ConfigError::TooFewKinds(kinds) => {
                write!(f, "{} tile kinds is below the minimum of {}", kinds, MIN_TILE_KINDS)
            }
            ConfigError::NoMoves => write!(f, "starting moves must be at least 1"),
            ConfigError::BoardNotFull(empty) => {
                write!(f, "starting board has {} empty cells", empty)
            }
            ConfigError::KindOutOfRange(kind) => {
                write!(f, "tile kind {} is outside the configured palette", kind)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
