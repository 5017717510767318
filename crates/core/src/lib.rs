//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: the board, match detection, gravity
//! and refill, scoring, the cascade loop, and the value-passed game record.
//! It has **no dependencies** on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: the same seed (or scripted tile source) produces the same game
//! - **Pure**: every board transition takes a board value and returns a new one
//! - **Testable**: contrived boards are one [`Board::parse`] away
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with static slot positions and moving tile payloads
//! - [`matching`]: two-sweep run detection with per-scan cell claiming
//! - [`gravity`]: column compaction and refill, reported tile by tile
//! - [`engine`]: board generation, swap, removal, and turn resolution
//! - [`scoring`]: `tiles * score_per_tile * combo`
//! - [`moves`]: valid swap discovery for hints
//! - [`rng`]: injectable tile sources (seedable LCG, scripted sequences)
//! - [`game_state`]: selection, swap and game-over transitions
//! - [`config`]: dimensions and pacing with validation
//! - [`snapshot`]: plain-data view for collaborators
//!
//! # Game Rules
//!
//! - Swapping two orthogonally adjacent tiles is a move only if it creates a
//!   run of three or more; otherwise the swap is undone and no move is spent
//! - Each round clears every match at once, drops the columns, and refills
//!   from the top; refills may match again (a cascade)
//! - Round score is `cleared tiles * 10 * combo`, the combo starting at 1 and
//!   growing by one per cascade round
//! - The game ends when the last of 30 moves has been resolved
//!
//! # Example
//!
//! ```
//! use match3_core::{GameState, TurnOutcome};
//!
//! let game = GameState::new(12345);
//! if let Some((a, b)) = game.hint() {
//!     let (game, outcome) = game.try_swap(a, b);
//!     assert!(matches!(outcome, TurnOutcome::Resolved(_)));
//!     assert_eq!(game.moves(), 29);
//!     assert!(game.score() >= 30);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod game_state;
pub mod gravity;
pub mod matching;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError, Cell};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    generate_board, is_adjacent, remove_matches, resolve_turn, swap, CascadeRound, TurnResult,
};
pub use game_state::{
    AnimationPhase, ComboIndicator, GameState, GameStats, RejectReason, Selection, TurnOutcome,
    TurnReport,
};
pub use gravity::{apply_gravity, collapse, refill, Settle, TileFall, TileSpawn};
pub use matching::{find_matches, is_quiescent, matched_positions, Match, Orientation};
pub use moves::{find_valid_swaps, has_valid_swap, swap_matches, valid_targets};
pub use rng::{ScriptedTiles, SimpleRng, TileSource};
pub use scoring::{calculate_score, score_tiles};
pub use snapshot::GameSnapshot;
