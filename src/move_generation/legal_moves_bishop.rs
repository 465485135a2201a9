//! Bishop move generation.
//!
//! Diagonal rays from the bishop's square, including captures.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{slide_targets, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    slide_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}
