use crate::types::{GameStatus, Position};

/// Plain-data view of a [`GameState`](crate::GameState)
///
/// `board` holds one row per entry, each cell a kind tag or `None` when empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: Vec<Vec<Option<u8>>>,
    pub score: u32,
    pub moves: u32,
    pub combo: u32,
    pub status: GameStatus,
    pub selected: Option<Position>,
    pub seed: u32,
    pub game_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status.accepts_input()
    }

    pub fn size(&self) -> usize {
        self.board.len()
    }
}
