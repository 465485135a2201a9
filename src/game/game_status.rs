//! Terminal-state detection.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Classification of a position for the side to move. The color carried by
/// `Check` and `Checkmate` is the side whose king is attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Normal,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }

    /// Winner of a decided game.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Normal => write!(f, "normal"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => {
                write!(f, "{color} is checkmated, {} wins", color.opposite())
            }
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Status of `board` for the side to move.
pub fn evaluate_status(board: &BoardState) -> ChessResult<GameStatus> {
    let mover = board.side_to_move;
    let in_check = is_king_in_check(board, mover)?;
    let can_move = has_legal_move(board)?;

    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate(mover),
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(mover),
        (false, true) => GameStatus::Normal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::MoveError;

    fn sq(name: &str) -> Square {
        Square::from_name(name).expect("valid square name")
    }

    #[test]
    fn start_position_is_normal() {
        assert_eq!(evaluate_status(&BoardState::new_game()), Ok(GameStatus::Normal));
    }

    #[test]
    fn king_with_escape_is_in_check() {
        let mut board = BoardState::empty(Color::Black);
        board.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("e1"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("a1"), Piece::new(PieceKind::King, Color::White));
        assert_eq!(evaluate_status(&board), Ok(GameStatus::Check(Color::Black)));
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let mut board = BoardState::empty(Color::Black);
        board.place(sq("g8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("f7"), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(sq("g7"), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(sq("h7"), Piece::new(PieceKind::Pawn, Color::Black));
        board.place(sq("a8"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("g1"), Piece::new(PieceKind::King, Color::White));

        let status = evaluate_status(&board).expect("status should evaluate");
        assert_eq!(status, GameStatus::Checkmate(Color::Black));
        assert!(status.is_terminal());
        assert_eq!(status.winner(), Some(Color::White));
    }

    #[test]
    fn cornered_king_not_in_check_is_stalemate() {
        let mut board = BoardState::empty(Color::Black);
        board.place(sq("h8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("g6"), Piece::new(PieceKind::Queen, Color::White));
        board.place(sq("f7"), Piece::new(PieceKind::King, Color::White));

        let status = evaluate_status(&board).expect("status should evaluate");
        assert_eq!(status, GameStatus::Stalemate);
        assert!(status.is_terminal());
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn two_kings_of_the_side_to_move_cannot_be_classified() {
        let mut board = BoardState::empty(Color::Black);
        board.place(sq("a8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("h8"), Piece::new(PieceKind::King, Color::Black));
        board.place(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
        board.place(sq("e1"), Piece::new(PieceKind::King, Color::White));

        assert!(matches!(
            evaluate_status(&board),
            Err(MoveError::InvariantViolated(_))
        ));
    }
}
