use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{step_targets, KING_OFFSETS};

/// The eight neighbouring squares. Castling is added by
/// `generate_castling_moves`, self-check filtering happens later.
pub fn generate_king_moves(board: &BoardState, from: Square, color: Color, out: &mut Vec<Square>) {
    step_targets(board, from, color, &KING_OFFSETS, out);
}

/// Castling destinations available to `color` in this position.
///
/// A side is available when its flag is still set, king and rook stand on
/// their home squares, every square between them is empty and the king's
/// start, transit and destination squares are not attacked.
pub fn generate_castling_moves(board: &BoardState, color: Color, out: &mut Vec<Square>) {
    let home = BoardState::king_home(color);
    if board.piece_at(home) != Some(Piece::new(PieceKind::King, color)) {
        return;
    }

    for side in CastleSide::ALL {
        if !board.castling_rights().get(color, side) {
            continue;
        }

        let corner = CastlingRights::rook_corner(color, side);
        if board.piece_at(corner) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        let row = home.row();
        let (low, high) = if corner.col() < home.col() {
            (corner.col() + 1, home.col())
        } else {
            (home.col() + 1, corner.col())
        };
        if (low..high).any(|col| !board.is_empty(Square::at(row, col))) {
            continue;
        }

        let destination = Square::at(row, side.king_target_col());
        let transit = Square::at(row, (home.col() + destination.col()) / 2);
        if [home, transit, destination]
            .into_iter()
            .any(|sq| is_square_attacked(board, sq, color))
        {
            continue;
        }

        out.push(destination);
    }
}
