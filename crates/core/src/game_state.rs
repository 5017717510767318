//! Game state module - the value-passed game record
//!
//! [`GameState`] bundles the board, the running stats, the status flag, the
//! pending tile selection and the tile source. Transitions consume the record
//! and hand back the next one together with what happened, so the caller (the
//! input controller) is the only owner of the current value:
//!
//! ```
//! use match3_core::{GameState, Selection};
//! use match3_core::types::Position;
//!
//! let game = GameState::new(12345);
//! let (game, selection) = game.select(Position::new(0, 0));
//! assert_eq!(selection, Selection::Selected(Position::new(0, 0)));
//! assert_eq!(game.selected(), Some(Position::new(0, 0)));
//! ```

use log::debug;

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::engine::{generate_board, is_adjacent, resolve_turn, swap, TurnResult};
use crate::matching::find_matches;
use crate::moves::find_valid_swaps;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameStatus, Position, COMBO_DISPLAY_MS, FALL_MS, REMOVE_MS, REVERT_MS, SWAP_MS,
};

/// Running totals of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameStats {
    /// Never decreases within a game
    pub score: u32,
    /// Moves left; only successful swaps spend one
    pub moves: u32,
    /// Multiplier the next turn starts from; back to 1 once a turn resolves.
    /// The last turn's peak is [`TurnResult::final_combo`].
    pub combo: u32,
}

impl GameStats {
    fn fresh(config: &GameConfig) -> Self {
        Self {
            score: 0,
            moves: config.starting_moves,
            combo: 1,
        }
    }
}

/// Why a swap was not attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The game has ended; only a new game accepts moves again
    GameOver,
    /// The two positions are not orthogonal neighbours
    NotAdjacent,
}

/// Combo banner drawn over the board; it never blocks input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboIndicator {
    pub combo: u32,
    pub duration_ms: u32,
}

/// One animation step for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPhase {
    pub status: GameStatus,
    pub duration_ms: u32,
    /// Raised when the phase starts (removal rounds with combo > 1)
    pub combo: Option<ComboIndicator>,
}

impl AnimationPhase {
    const fn new(status: GameStatus, duration_ms: u32) -> Self {
        Self {
            status,
            duration_ms,
            combo: None,
        }
    }

    fn removal(combo: u32) -> Self {
        Self {
            combo: (combo > 1).then_some(ComboIndicator {
                combo,
                duration_ms: COMBO_DISPLAY_MS,
            }),
            ..Self::new(GameStatus::Matching, REMOVE_MS)
        }
    }
}

/// A swap that matched and was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub swap: (Position, Position),
    /// Board right after the swap, before any removal
    pub swapped: Board,
    pub result: TurnResult,
    pub moves_left: u32,
    pub game_over: bool,
}

impl TurnReport {
    /// Points earned by this turn
    pub fn score(&self) -> u32 {
        self.result.score
    }
}

/// What [`GameState::try_swap`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Rejected(RejectReason),
    /// The swap matched nothing; the board is unchanged and no move was spent
    Reverted { swapped: Board },
    Resolved(Box<TurnReport>),
}

impl TurnOutcome {
    /// Phases the controller plays (input blocked) before accepting input again
    ///
    /// The last phase carries the status the game settled in, with no delay.
    /// Combo banners overlap the phases and are not counted in their durations.
    pub fn animation(&self) -> Vec<AnimationPhase> {
        match self {
            TurnOutcome::Rejected(_) => Vec::new(),
            TurnOutcome::Reverted { .. } => vec![
                AnimationPhase::new(GameStatus::Swapping, SWAP_MS),
                AnimationPhase::new(GameStatus::Swapping, REVERT_MS),
                AnimationPhase::new(GameStatus::Idle, 0),
            ],
            TurnOutcome::Resolved(report) => {
                let mut phases = Vec::with_capacity(2 + report.result.rounds.len() * 2);
                phases.push(AnimationPhase::new(GameStatus::Swapping, SWAP_MS));
                for round in &report.result.rounds {
                    phases.push(AnimationPhase::removal(round.combo));
                    phases.push(AnimationPhase::new(GameStatus::Falling, FALL_MS));
                }
                let settled = if report.game_over {
                    GameStatus::GameOver
                } else {
                    GameStatus::Idle
                };
                phases.push(AnimationPhase::new(settled, 0));
                phases
            }
        }
    }

    /// Sum of all phase durations
    pub fn animation_ms(&self) -> u32 {
        self.animation().iter().map(|p| p.duration_ms).sum()
    }
}

/// What [`GameState::select`] did with a tile press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Input is not accepted in the current status
    Ignored,
    /// First tile of a pair chosen
    Selected(Position),
    /// Second press was not adjacent to the first; selection dropped
    Cleared,
    /// Second press was adjacent; a swap was attempted
    Swapped(TurnOutcome),
}

/// Complete game record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    stats: GameStats,
    status: GameStatus,
    selected: Option<Position>,
    rng: SimpleRng,
    seed: u32,
    /// Monotonic game id (increments on new game)
    game_id: u32,
}

impl GameState {
    /// Create a new game with the default configuration
    pub fn new(seed: u32) -> Self {
        Self::start(GameConfig::default(), seed)
    }

    /// Create a new game with a custom configuration
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, seed))
    }

    /// Start from a given board instead of a generated one
    ///
    /// `config.board_size` is taken from `board`. The board must be full and
    /// use only kinds below `config.tile_kinds`; it is used as-is otherwise,
    /// even if it is not quiescent.
    pub fn from_board(board: Board, config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        let config = GameConfig {
            board_size: board.size(),
            ..config
        };
        config.validate()?;
        config.validate_board(&board)?;
        Ok(Self {
            config,
            board,
            stats: GameStats::fresh(&config),
            status: GameStatus::Idle,
            selected: None,
            rng: SimpleRng::new(seed),
            seed,
            game_id: 0,
        })
    }

    fn start(config: GameConfig, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = generate_board(config.board_size, config.tile_kinds, &mut rng);
        Self {
            config,
            board,
            stats: GameStats::fresh(&config),
            status: GameStatus::Idle,
            selected: None,
            rng,
            seed,
            game_id: 0,
        }
    }

    /// Discard the board and stats and start over
    ///
    /// The tile source keeps advancing, so consecutive games differ.
    pub fn new_game(mut self) -> Self {
        self.board = generate_board(self.config.board_size, self.config.tile_kinds, &mut self.rng);
        self.stats = GameStats::fresh(&self.config);
        self.status = GameStatus::Idle;
        self.selected = None;
        self.game_id = self.game_id.wrapping_add(1);
        debug!("game {} started", self.game_id);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn moves(&self) -> u32 {
        self.stats.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// First valid swap on the current board, if any
    pub fn hint(&self) -> Option<(Position, Position)> {
        find_valid_swaps(&self.board).into_iter().next()
    }

    /// Handle a tile press
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn select(mut self, pos: Position) -> (Self, Selection) {
        self.assert_on_board(pos);
        if !self.status.accepts_input() {
            return (self, Selection::Ignored);
        }

        match self.selected.take() {
            None => {
                self.selected = Some(pos);
                (self, Selection::Selected(pos))
            }
            Some(first) if is_adjacent(first, pos) => {
                let (next, outcome) = self.try_swap(first, pos);
                (next, Selection::Swapped(outcome))
            }
            Some(_) => (self, Selection::Cleared),
        }
    }

    /// Swap two tiles and resolve the turn
    ///
    /// A swap that matches nothing is undone without spending a move. A
    /// matching swap spends one move, cascades to quiescence, adds the turn's
    /// score and ends the game when no moves are left.
    ///
    /// # Panics
    ///
    /// Panics if either position is outside the board.
    pub fn try_swap(mut self, a: Position, b: Position) -> (Self, TurnOutcome) {
        self.assert_on_board(a);
        self.assert_on_board(b);

        if self.status == GameStatus::GameOver {
            return (self, TurnOutcome::Rejected(RejectReason::GameOver));
        }
        if !is_adjacent(a, b) {
            return (self, TurnOutcome::Rejected(RejectReason::NotAdjacent));
        }
        self.selected = None;

        let swapped = swap(&self.board, a, b);
        if find_matches(&swapped).is_empty() {
            return (self, TurnOutcome::Reverted { swapped });
        }

        self.stats.moves = self.stats.moves.saturating_sub(1);
        let result = resolve_turn(&swapped, &self.config, &mut self.rng);
        self.stats.score = self.stats.score.saturating_add(result.score);
        self.stats.combo = 1;
        self.board = result.board.clone();

        let game_over = self.stats.moves == 0;
        if game_over {
            self.status = GameStatus::GameOver;
        }

        debug!(
            "game {}: swap {:?}<->{:?} scored {} over {} rounds, {} moves left",
            self.game_id,
            a,
            b,
            result.score,
            result.round_count(),
            self.stats.moves
        );

        let report = TurnReport {
            swap: (a, b),
            swapped,
            result,
            moves_left: self.stats.moves,
            game_over,
        };
        (self, TurnOutcome::Resolved(Box::new(report)))
    }

    /// Plain-data view for collaborators
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_tags(),
            score: self.stats.score,
            moves: self.stats.moves,
            combo: self.stats.combo,
            status: self.status,
            selected: self.selected,
            seed: self.seed,
            game_id: self.game_id,
        }
    }

    fn assert_on_board(&self, pos: Position) {
        assert!(
            self.board.contains(pos),
            "position ({}, {}) outside {}x{} board",
            pos.row,
            pos.col,
            self.board.size(),
            self.board.size()
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
