use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{slide_targets, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Queen rays are the union of rook and bishop rays.
pub fn generate_queen_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide_targets(board, from, color, &ROOK_DIRECTIONS, out);
    slide_targets(board, from, color, &BISHOP_DIRECTIONS, out);
}
