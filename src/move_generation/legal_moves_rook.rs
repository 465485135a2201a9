//! Rook move generation.
//!
//! Orthogonal rays from the rook's square, including captures.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{slide_targets, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_targets(board, from, color, &ROOK_DIRECTIONS, out);
}
