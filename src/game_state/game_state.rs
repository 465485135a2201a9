//! Authoritative board position.
//!
//! `BoardState` stores the 8x8 grid, side to move, castling rights, the
//! en-passant target and a per-color king cache with a king count. Move
//! application produces a new `BoardState` rather than mutating in place, so a
//! position is only ever observed in a consistent state. Castling rights and
//! the en-passant target are read through accessors; outside the crate they
//! can only be set when building a position or cleared with
//! `revoke_castling_right`.

use log::warn;

use crate::chess_errors::{ChessResult, MoveError};
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, KING_HOME_COL};
use crate::game_state::chess_types::*;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    king_position: [Option<Square>; 2],
    king_count: [u8; 2],
}

impl BoardState {
    /// Board with no pieces, no castling rights and no en-passant target.
    pub fn empty(side_to_move: Color) -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            king_position: [None; 2],
            king_count: [0; 2],
        }
    }

    /// The standard starting position, White to move.
    pub fn new_game() -> Self {
        let mut board = Self::empty(Color::White);
        for color in Color::ALL {
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                board.place(Square::at(color.back_row(), col as u8), Piece::new(*kind, color));
            }
            for col in 0..8 {
                board.place(
                    Square::at(color.pawn_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board.with_castling_rights(CastlingRights::ALL)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Puts a piece on a square, replacing whatever was there.
    ///
    /// Keeps the king cache in sync: placing a king counts it and records its
    /// square, and overwriting a king uncounts it.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.remove(square);
        self.grid[square.row() as usize][square.col() as usize] = Some(piece);
        if piece.kind == PieceKind::King {
            let idx = piece.color.index();
            self.king_count[idx] += 1;
            self.king_position[idx] = Some(square);
        }
    }

    /// Empties a square and returns what stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let previous = self.grid[square.row() as usize][square.col() as usize].take();
        if let Some(Piece {
            kind: PieceKind::King,
            color,
        }) = previous
        {
            let idx = color.index();
            self.king_count[idx] = self.king_count[idx].saturating_sub(1);
            if self.king_position[idx] == Some(square) {
                // A surplus king may remain; point the cache at it.
                self.king_position[idx] = if self.king_count[idx] > 0 {
                    self.find_king(color)
                } else {
                    None
                };
            }
        }
        previous
    }

    fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant this ply, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Clears one castling flag.
    pub fn revoke_castling_right(&mut self, color: Color, side: CastleSide) {
        self.castling_rights.revoke(color, side);
    }

    pub fn with_castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    pub fn with_en_passant_target(mut self, target: Option<Square>) -> Self {
        self.en_passant_target = target;
        self
    }

    /// Same placement with the other side (or the same side) to move. The
    /// en-passant target belongs to a specific ply and is dropped.
    pub fn with_side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self.en_passant_target = None;
        self
    }

    /// Cached king square, verified against the grid.
    ///
    /// Fails with `InvariantViolated` when the color has no king, more than
    /// one king, or the cache has drifted from the grid. Never falls back to a
    /// default square.
    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        let count = self.king_count[color.index()];
        if count != 1 {
            warn!("king lookup for {color} on a board with {count} {color} kings");
            return Err(MoveError::InvariantViolated(format!(
                "expected exactly one {color} king, found {count}"
            )));
        }
        let Some(square) = self.king_position[color.index()] else {
            warn!("{color} king cache is empty with one {color} king counted");
            return Err(MoveError::InvariantViolated(format!(
                "no cached square for the {color} king"
            )));
        };
        match self.piece_at(square) {
            Some(Piece {
                kind: PieceKind::King,
                color: c,
            }) if c == color => Ok(square),
            other => {
                warn!("{color} king cache points at {square}, which holds {other:?}");
                Err(MoveError::InvariantViolated(format!(
                    "{color} king cache points at {square}, which holds {other:?}"
                )))
            }
        }
    }

    /// Full scan confirming each color has exactly one king and the cache
    /// agrees with the grid.
    pub fn validate_kings(&self) -> ChessResult<()> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                .count();
            if count != 1 {
                warn!("found {count} {color} kings on the board");
                return Err(MoveError::InvariantViolated(format!(
                    "expected exactly one {color} king, found {count}"
                )));
            }
            self.king_square(color)?;
        }
        Ok(())
    }

    /// Occupied squares with their pieces, in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Square the king of `color` starts on.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        Square::at(color.back_row(), KING_HOME_COL)
    }

    /// Moves a piece without any rule processing, updating the king cache.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.remove(from)?;
        let captured = self.remove(to);
        self.place(to, piece);
        captured
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_board(self))
    }
}
