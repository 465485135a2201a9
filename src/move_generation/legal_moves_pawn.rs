//! Pawn move generation.
//!
//! Pseudo-legal pawn targets are forward pushes and diagonal captures onto
//! enemy pieces. En-passant captures depend on the transient target square
//! and are produced separately by `generate_en_passant_moves`.

use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attack_squares(from, color) {
        if let Some(target) = board.piece_at(to) {
            if target.color != color {
                out.push(to);
            }
        }
    }
}

/// The two forward diagonals a pawn attacks, whether or not they are occupied.
pub fn pawn_attack_squares(from: Square, color: Color) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}

/// Square of the pawn removed by an en-passant capture landing on `target`:
/// beside the capturing pawn's start square, on the destination column.
#[inline]
pub fn en_passant_victim_square(from: Square, target: Square) -> Square {
    Square::at(from.row(), target.col())
}

/// Adds the en-passant capture for a pawn of the side to move, if the board
/// has a target on one of its diagonals with an enemy pawn beside it.
pub fn generate_en_passant_moves(
    board: &BoardState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let Some(target) = board.en_passant_target() else {
        return;
    };
    if color != board.side_to_move || !board.is_empty(target) {
        return;
    }
    if !pawn_attack_squares(from, color).any(|sq| sq == target) {
        return;
    }
    let victim = board.piece_at(en_passant_victim_square(from, target));
    if victim == Some(Piece::new(PieceKind::Pawn, color.opposite())) {
        out.push(target);
    }
}
