//! Canonical chess-rule constants.
//!
//! The standard starting layout, listed per back-rank column from the a-file.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order for both colors, a-file first.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;
