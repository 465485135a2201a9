use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{step_targets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}
