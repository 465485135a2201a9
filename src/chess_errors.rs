//! Errors returned by the rule engine.
//!
//! `MoveError` is the single error type across the crate. Input and rule
//! violations (`OutOfBounds`, `IllegalMove`, `PromotionRequired`, ...) are
//! recoverable: the engine refuses the request and its state is unchanged, so
//! the caller can re-prompt. `InvariantViolated` signals a corrupted position
//! (a missing or duplicated king) and is not expected under correct use.

use thiserror::Error;

use crate::game::game_status::GameStatus;
use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type ChessResult<T> = Result<T, MoveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A coordinate outside `0..8` was supplied.
    #[error("square ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// A square name that is not of the form `a1`..`h8`.
    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    #[error("no piece on {0}")]
    NoPieceSelected(Square),

    /// The origin square holds a piece of the side that is not to move.
    #[error("piece on {square} belongs to {color}, who is not to move")]
    WrongSideToMove { square: Square, color: Color },

    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn reaches the last rank but no replacement kind was given.
    #[error("move {from} -> {to} promotes a pawn and needs a promotion piece")]
    PromotionRequired { from: Square, to: Square },

    #[error("a pawn cannot promote to a {0}")]
    InvalidPromotionPiece(PieceKind),

    /// A promotion kind was supplied for a move that does not promote.
    #[error("move {from} -> {to} does not promote a pawn")]
    UnexpectedPromotion { from: Square, to: Square },

    #[error("no promotion is waiting for a piece choice")]
    NoPendingPromotion,

    #[error("the game is over: {0}")]
    GameOver(GameStatus),

    /// The position breaks a structural invariant, e.g. a color without a king.
    #[error("board invariant violated: {0}")]
    InvariantViolated(String),
}
