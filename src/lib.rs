//! Crate root module declarations for the chess rule engine.
//!
//! The crate covers the rules of a two-player game only: board state, legal
//! move generation, move application with castling/en-passant/promotion
//! bookkeeping, and checkmate/stalemate detection. A presentation layer owns a
//! `game::chess_game::ChessGame` and drives it one user action at a time.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod game {
    pub mod chess_game;
    pub mod game_status;
}

pub mod utils {
    pub mod render_board;
}

pub use chess_errors::{ChessResult, MoveError};
pub use game::chess_game::{ChessGame, MoveOutcome, MoveRecord};
pub use game::game_status::GameStatus;
pub use game_state::chess_types::{
    BoardState, CastleSide, CastlingRights, Color, Piece, PieceKind, Square,
};
pub use move_generation::legal_move_apply::SpecialMove;
