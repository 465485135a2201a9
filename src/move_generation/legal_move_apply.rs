//! Move application.
//!
//! `apply_move_to_board` is the single definition of what a move does to a
//! position: captures, castling rook relocation, en-passant victim removal,
//! promotion, castling-right and en-passant bookkeeping, and the turn switch.
//! It returns a new board and leaves the input untouched, which is what the
//! legality filter uses for its scratch positions. It does not check that the
//! move is legal; callers validate against the legal move map first.

use crate::chess_errors::{ChessResult, MoveError};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::en_passant_victim_square;

/// Rule-level classification of a move beyond a plain move or capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    DoublePawnPush,
    Castle(CastleSide),
    EnPassant,
    Promotion(PieceKind),
}

/// Result of applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: BoardState,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
}

/// Whether moving the piece on `from` to `to` puts a pawn on its last rank.
pub fn is_promotion_move(board: &BoardState, from: Square, to: Square) -> bool {
    matches!(
        board.piece_at(from),
        Some(Piece { kind: PieceKind::Pawn, color }) if to.row() == color.promotion_row()
    )
}

pub fn apply_move_to_board(
    board: &BoardState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<AppliedMove> {
    let moved = board.piece_at(from).ok_or(MoveError::NoPieceSelected(from))?;
    let mover = moved.color;
    if mover != board.side_to_move {
        return Err(MoveError::WrongSideToMove {
            square: from,
            color: mover,
        });
    }

    let promotes = is_promotion_move(board, from, to);
    let promoted_kind = match (promotes, promotion) {
        (true, None) => return Err(MoveError::PromotionRequired { from, to }),
        (true, Some(kind)) if !kind.is_promotion_choice() => {
            return Err(MoveError::InvalidPromotionPiece(kind))
        }
        (true, Some(kind)) => Some(kind),
        (false, Some(_)) => return Err(MoveError::UnexpectedPromotion { from, to }),
        (false, None) => None,
    };

    let mut next = board.clone();
    let mut special = None;

    let is_en_passant = moved.kind == PieceKind::Pawn
        && from.col() != to.col()
        && board.en_passant_target() == Some(to)
        && board.is_empty(to);

    let captured = if is_en_passant {
        special = Some(SpecialMove::EnPassant);
        next.remove(en_passant_victim_square(from, to))
    } else {
        next.remove(to)
    };

    next.remove(from);
    let landing = match promoted_kind {
        Some(kind) => {
            special = Some(SpecialMove::Promotion(kind));
            Piece::new(kind, mover)
        }
        None => moved,
    };
    next.place(to, landing);

    if let Some(side) = castle_side(moved, from, to) {
        let row = from.row();
        next.relocate(
            Square::at(row, side.rook_col()),
            Square::at(row, side.rook_target_col()),
        );
        special = Some(SpecialMove::Castle(side));
    }

    update_castling_rights(&mut next.castling_rights, moved, from, to);

    next.en_passant_target = None;
    if moved.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        next.en_passant_target = Some(Square::at((from.row() + to.row()) / 2, from.col()));
        special = Some(SpecialMove::DoublePawnPush);
    }

    next.side_to_move = mover.opposite();

    Ok(AppliedMove {
        board: next,
        moved,
        captured,
        special,
    })
}

/// A king moving two columns along its home row is a castle.
fn castle_side(moved: Piece, from: Square, to: Square) -> Option<CastleSide> {
    if moved.kind != PieceKind::King
        || from != BoardState::king_home(moved.color)
        || from.row() != to.row()
    {
        return None;
    }
    CastleSide::ALL
        .into_iter()
        .find(|side| to.col() == side.king_target_col())
}

fn update_castling_rights(rights: &mut CastlingRights, moved: Piece, from: Square, to: Square) {
    if moved.kind == PieceKind::King {
        rights.revoke_color(moved.color);
    }

    // A rook leaving its corner, or anything landing on a corner (the rook
    // there is captured), ends that corner's right.
    for color in Color::ALL {
        for side in CastleSide::ALL {
            let corner = CastlingRights::rook_corner(color, side);
            if from == corner || to == corner {
                rights.revoke(color, side);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_name(name).expect("valid square name")
    }

    fn apply(board: &BoardState, from: &str, to: &str) -> AppliedMove {
        apply_move_to_board(board, sq(from), sq(to), None).expect("move should apply")
    }

    #[test]
    fn double_push_sets_target_and_next_move_clears_it() {
        let board = BoardState::new_game();
        let after_e4 = apply(&board, "e2", "e4");
        assert_eq!(after_e4.board.en_passant_target(), Some(sq("e3")));
        assert_eq!(after_e4.special, Some(SpecialMove::DoublePawnPush));
        assert_eq!(after_e4.board.side_to_move, Color::Black);

        let after_nf6 = apply(&after_e4.board, "g8", "f6");
        assert_eq!(after_nf6.board.en_passant_target(), None);
        assert_eq!(after_nf6.special, None);
    }

    #[test]
    fn en_passant_removes_pawn_beside_the_mover() {
        let mut board = BoardState::empty(Color::White).with_en_passant_target(Some(sq("d6")));
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("e5"), Piece::new(PieceKind::Pawn, Color::White));
        board.place(sq("d5"), Piece::new(PieceKind::Pawn, Color::Black));

        let applied = apply(&board, "e5", "d6");
        assert_eq!(applied.special, Some(SpecialMove::EnPassant));
        assert_eq!(applied.captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(applied.board.is_empty(sq("d5")));
        assert_eq!(
            applied.board.piece_at(sq("d6")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn castling_moves_rook_and_clears_both_rights() {
        let mut board = BoardState::empty(Color::Black).with_castling_rights(CastlingRights::ALL);
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("a8"), Piece::new(PieceKind::Rook, Color::Black));
        board.place(sq("h8"), Piece::new(PieceKind::Rook, Color::Black));
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));

        let applied = apply(&board, "e8", "c8");
        assert_eq!(applied.special, Some(SpecialMove::Castle(CastleSide::QueenSide)));
        assert_eq!(
            applied.board.piece_at(sq("d8")),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert!(applied.board.is_empty(sq("a8")));
        assert_eq!(applied.board.king_square(Color::Black), Ok(sq("c8")));
        let rights = applied.board.castling_rights();
        assert!(!rights.get(Color::Black, CastleSide::KingSide));
        assert!(!rights.get(Color::Black, CastleSide::QueenSide));
        assert!(rights.get(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn rook_move_and_rook_capture_clear_single_corner() {
        let mut board = BoardState::empty(Color::White).with_castling_rights(CastlingRights::ALL);
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("a1"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("h8"), Piece::new(PieceKind::Rook, Color::Black));

        let applied = apply(&board, "h1", "h8");
        let rights = applied.board.castling_rights();
        assert!(!rights.get(Color::White, CastleSide::KingSide));
        assert!(rights.get(Color::White, CastleSide::QueenSide));
        assert!(!rights.get(Color::Black, CastleSide::KingSide));
        assert!(rights.get(Color::Black, CastleSide::QueenSide));
        assert_eq!(applied.captured, Some(Piece::new(PieceKind::Rook, Color::Black)));
    }

    #[test]
    fn promotion_requires_a_valid_choice() {
        let mut board = BoardState::empty(Color::White);
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
        board.place(sq("a8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("g7"), Piece::new(PieceKind::Pawn, Color::White));

        assert_eq!(
            apply_move_to_board(&board, sq("g7"), sq("g8"), None),
            Err(MoveError::PromotionRequired {
                from: sq("g7"),
                to: sq("g8")
            })
        );
        assert_eq!(
            apply_move_to_board(&board, sq("g7"), sq("g8"), Some(PieceKind::King)),
            Err(MoveError::InvalidPromotionPiece(PieceKind::King))
        );

        let applied = apply_move_to_board(&board, sq("g7"), sq("g8"), Some(PieceKind::Knight))
            .expect("promotion should apply");
        assert_eq!(
            applied.board.piece_at(sq("g8")),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(applied.special, Some(SpecialMove::Promotion(PieceKind::Knight)));
    }

    #[test]
    fn promotion_piece_on_ordinary_move_is_rejected() {
        let board = BoardState::new_game();
        assert_eq!(
            apply_move_to_board(&board, sq("e2"), sq("e4"), Some(PieceKind::Queen)),
            Err(MoveError::UnexpectedPromotion {
                from: sq("e2"),
                to: sq("e4")
            })
        );
    }

    #[test]
    fn wrong_side_and_empty_square_are_rejected() {
        let board = BoardState::new_game();
        assert_eq!(
            apply_move_to_board(&board, sq("e4"), sq("e5"), None),
            Err(MoveError::NoPieceSelected(sq("e4")))
        );
        assert_eq!(
            apply_move_to_board(&board, sq("e7"), sq("e5"), None),
            Err(MoveError::WrongSideToMove {
                square: sq("e7"),
                color: Color::Black
            })
        );
    }
}
