//! Scoring module - per-round score with combo multiplier
//!
//! A round clears some number of tiles; each is worth `score_per_tile` points,
//! and the whole round is multiplied by the combo of that round (1 for the
//! round triggered by the swap, +1 for each cascade after it).

use crate::types::SCORE_PER_TILE;

/// Score of one round with the default tile value
///
/// `tile_count * 10 * combo`
pub fn calculate_score(tile_count: usize, combo: u32) -> u32 {
    score_tiles(tile_count, combo, SCORE_PER_TILE)
}

/// Score of one round with an explicit tile value
pub fn score_tiles(tile_count: usize, combo: u32, score_per_tile: u32) -> u32 {
    let tiles = u32::try_from(tile_count).unwrap_or(u32::MAX);
    tiles.saturating_mul(score_per_tile).saturating_mul(combo)
}
