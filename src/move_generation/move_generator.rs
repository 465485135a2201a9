//! Pseudo-legal move generation over the whole board.
//!
//! The result is a `MoveMap` from each square to the destinations of the piece
//! standing there. Whether a move leaves the mover's king attacked is not
//! considered here; that is the job of `legal_move_generator`.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Destination lists for every square of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMap {
    targets: Vec<Vec<Square>>,
}

impl MoveMap {
    pub fn new() -> Self {
        Self {
            targets: vec![Vec::new(); 64],
        }
    }

    /// Destinations from `from`; empty when no move starts there.
    #[inline]
    pub fn targets(&self, from: Square) -> &[Square] {
        &self.targets[from.index()]
    }

    #[inline]
    pub(crate) fn targets_mut(&mut self, from: Square) -> &mut Vec<Square> {
        &mut self.targets[from.index()]
    }

    /// Every square with its (possibly empty) destination list.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Square])> + '_ {
        Square::all().map(move |sq| (sq, self.targets(sq)))
    }

    /// Flattened `(from, to)` pairs.
    pub fn moves(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.iter()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    pub fn move_count(&self) -> usize {
        self.targets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.iter().all(Vec::is_empty)
    }

    #[inline]
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.targets(from).contains(&to)
    }
}

impl Default for MoveMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Pseudo-legal destinations of `piece` standing on `from`.
pub fn generate_piece_moves(board: &BoardState, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, color, out),
        PieceKind::Knight => generate_knight_moves(board, from, color, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, color, out),
        PieceKind::Rook => generate_rook_moves(board, from, color, out),
        PieceKind::Queen => generate_queen_moves(board, from, color, out),
        PieceKind::King => generate_king_moves(board, from, color, out),
    }
}

/// Pseudo-legal moves for the side to move.
pub fn generate_pseudo_legal_moves(board: &BoardState) -> MoveMap {
    generate_pseudo_legal_moves_for(board, board.side_to_move)
}

/// Pseudo-legal moves for the pieces of `color`, regardless of whose turn it is.
pub fn generate_pseudo_legal_moves_for(board: &BoardState, color: Color) -> MoveMap {
    let mut map = MoveMap::new();
    for (from, piece) in board.pieces() {
        if piece.color == color {
            generate_piece_moves(board, from, piece, map.targets_mut(from));
        }
    }
    map
}
