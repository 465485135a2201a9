//! Attack queries.
//!
//! A square is attacked by a color when any of its pieces could move there
//! pseudo-legally, except that pawns attack their forward diagonals whether or
//! not those squares are occupied, and never the squares they push to. The
//! target square may be empty, which castling relies on for transit squares.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::pawn_attack_squares;
use crate::move_generation::move_generator::generate_piece_moves;

/// Squares `piece` on `from` attacks.
pub fn attack_targets(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Square>) {
    match piece.kind {
        PieceKind::Pawn => out.extend(pawn_attack_squares(from, piece.color)),
        _ => generate_piece_moves(board, from, piece, out),
    }
}

/// Whether any piece of the opponent of `defending_color` attacks `square`.
pub fn is_square_attacked(board: &BoardState, square: Square, defending_color: Color) -> bool {
    let attacker = defending_color.opposite();
    let mut targets = Vec::with_capacity(32);
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker)
        .any(|(from, piece)| {
            targets.clear();
            attack_targets(board, from, piece, &mut targets);
            targets.contains(&square)
        })
}

/// Every opposing piece attacking `square`, in square order.
pub fn attackers_of(
    board: &BoardState,
    square: Square,
    defending_color: Color,
) -> Vec<(Square, Piece)> {
    let attacker = defending_color.opposite();
    let mut targets = Vec::with_capacity(32);
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker)
        .filter(|&(from, piece)| {
            targets.clear();
            attack_targets(board, from, piece, &mut targets);
            targets.contains(&square)
        })
        .collect()
}

/// Whether the king of `color` is attacked. Fails if that king is missing.
pub fn is_king_in_check(board: &BoardState, color: Color) -> ChessResult<bool> {
    let king = board.king_square(color)?;
    Ok(is_square_attacked(board, king, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::MoveError;

    fn sq(name: &str) -> Square {
        Square::from_name(name).expect("valid square name")
    }

    #[test]
    fn queen_in_centre_attacks_through_open_lines() {
        let mut board = BoardState::new_game();
        board.place(sq("e4"), Piece::new(PieceKind::Queen, Color::White));

        assert!(is_square_attacked(&board, sq("e7"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d7"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e2"), Color::White));
    }

    #[test]
    fn empty_squares_can_be_attacked() {
        let board = BoardState::new_game();
        assert!(is_square_attacked(&board, sq("f3"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(is_square_attacked(&board, sq("d6"), Color::White));
    }

    #[test]
    fn pawn_push_square_is_not_attacked_but_diagonal_is() {
        let mut board = BoardState::empty(Color::White);
        board.place(sq("d4"), Piece::new(PieceKind::Pawn, Color::Black));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));
        assert!(is_square_attacked(&board, sq("c3"), Color::White));
        assert!(is_square_attacked(&board, sq("e3"), Color::White));
        assert!(!is_square_attacked(&board, sq("c5"), Color::White));
    }

    #[test]
    fn attackers_lists_every_checking_piece() {
        let mut board = BoardState::empty(Color::White);
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::Rook, Color::Black));
        board.place(sq("d3"), Piece::new(PieceKind::Knight, Color::Black));
        board.place(sq("a8"), Piece::new(PieceKind::King, Color::Black));

        let attackers = attackers_of(&board, sq("e1"), Color::White);
        assert_eq!(
            attackers,
            vec![
                (sq("e8"), Piece::new(PieceKind::Rook, Color::Black)),
                (sq("d3"), Piece::new(PieceKind::Knight, Color::Black)),
            ]
        );
        assert_eq!(is_king_in_check(&board, Color::White), Ok(true));
        assert_eq!(is_king_in_check(&board, Color::Black), Ok(false));
    }

    #[test]
    fn check_query_with_two_kings_of_one_color_fails() {
        let mut board = BoardState::empty(Color::White);
        board.place(sq("a1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("h1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("a8"), Piece::new(PieceKind::Rook, Color::Black));

        assert!(matches!(
            is_king_in_check(&board, Color::White),
            Err(MoveError::InvariantViolated(_))
        ));
        assert_eq!(is_king_in_check(&board, Color::Black), Ok(false));
    }

    #[test]
    fn check_query_without_king_fails() {
        let board = BoardState::empty(Color::White);
        assert!(matches!(
            is_king_in_check(&board, Color::White),
            Err(MoveError::InvariantViolated(_))
        ));
    }
}
