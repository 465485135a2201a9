//! Engine handle exposed to a presentation layer.
//!
//! `ChessGame` owns the current `BoardState`, its cached status, the move
//! history and a pending two-phase promotion. It has no knowledge of windows,
//! clocks or dialogs; a front end owns one and calls it once per user action.
//!
//! Promotion is two-phase: `apply_move` without a piece kind for a promoting
//! pawn fails with `MoveError::PromotionRequired` and records the pending
//! move, which `complete_promotion` then finishes once a kind was chosen.

use log::{debug, info};

use crate::chess_errors::{ChessResult, MoveError};
use crate::game::game_status::{evaluate_status, GameStatus};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_to_board, is_promotion_move, SpecialMove};
use crate::move_generation::legal_move_checks::attackers_of;
use crate::move_generation::legal_move_generator::{generate_legal_moves, legal_moves_from};
use crate::move_generation::move_generator::MoveMap;

/// One applied move, kept for history display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
    pub status_after: GameStatus,
}

/// What a successful `apply_move` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: BoardState,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
    /// Whether the side now to move is in check.
    pub opponent_in_check: bool,
    pub status: GameStatus,
}

impl MoveOutcome {
    pub fn is_castle(&self) -> bool {
        matches!(self.special, Some(SpecialMove::Castle(_)))
    }

    pub fn is_en_passant(&self) -> bool {
        self.special == Some(SpecialMove::EnPassant)
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match self.special {
            Some(SpecialMove::Promotion(kind)) => Some(kind),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    board: BoardState,
    status: GameStatus,
    history: Vec<MoveRecord>,
    pending_promotion: Option<(Square, Square)>,
}

impl ChessGame {
    /// A game in the standard starting position.
    pub fn new() -> Self {
        Self {
            board: BoardState::new_game(),
            status: GameStatus::Normal,
            history: Vec::new(),
            pending_promotion: None,
        }
    }

    /// A game continuing from an arbitrary position.
    ///
    /// Fails with `InvariantViolated` unless each color has exactly one king.
    pub fn from_board(board: BoardState) -> ChessResult<Self> {
        board.validate_kings()?;
        let status = evaluate_status(&board)?;
        Ok(Self {
            board,
            status,
            history: Vec::new(),
            pending_promotion: None,
        })
    }

    /// Discards the current game and starts over from the initial position.
    pub fn reset(&mut self) -> &BoardState {
        info!("game reset to the starting position");
        *self = Self::new();
        &self.board
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Origin and destination of a promotion waiting for a piece choice.
    #[inline]
    pub fn promotion_pending(&self) -> Option<(Square, Square)> {
        self.pending_promotion
    }

    /// Legal destinations from `square`. Empty for empty squares, pieces of
    /// the side not to move, and once the game has ended.
    pub fn legal_moves_from<S>(&self, square: S) -> ChessResult<Vec<Square>>
    where
        S: TryInto<Square>,
        MoveError: From<S::Error>,
    {
        let square = square.try_into()?;
        if self.status.is_terminal() {
            return Ok(Vec::new());
        }
        legal_moves_from(&self.board, square)
    }

    /// Every legal move of the side to move.
    pub fn legal_moves(&self) -> ChessResult<MoveMap> {
        if self.status.is_terminal() {
            return Ok(MoveMap::new());
        }
        generate_legal_moves(&self.board)
    }

    /// Pieces giving check to the side to move.
    pub fn checking_pieces(&self) -> ChessResult<Vec<(Square, Piece)>> {
        let mover = self.board.side_to_move;
        let king = self.board.king_square(mover)?;
        Ok(attackers_of(&self.board, king, mover))
    }

    /// Validates and applies a move, then re-evaluates the game status.
    ///
    /// On any error the game is left exactly as it was, except that a
    /// `PromotionRequired` failure records the move as pending.
    pub fn apply_move<F, T>(
        &mut self,
        from: F,
        to: T,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveOutcome>
    where
        F: TryInto<Square>,
        T: TryInto<Square>,
        MoveError: From<F::Error> + From<T::Error>,
    {
        let from = from.try_into()?;
        let to = to.try_into()?;

        if self.status.is_terminal() {
            return Err(MoveError::GameOver(self.status));
        }

        let mover = self.board.side_to_move;
        match self.board.piece_at(from) {
            None => return Err(MoveError::NoPieceSelected(from)),
            Some(piece) if piece.color != mover => {
                return Err(MoveError::WrongSideToMove {
                    square: from,
                    color: piece.color,
                })
            }
            Some(_) => {}
        }

        if !legal_moves_from(&self.board, from)?.contains(&to) {
            debug!("rejected illegal move {from} -> {to} for {mover}");
            return Err(MoveError::IllegalMove { from, to });
        }

        if promotion.is_none() && is_promotion_move(&self.board, from, to) {
            debug!("move {from} -> {to} waits for a promotion choice");
            self.pending_promotion = Some((from, to));
            return Err(MoveError::PromotionRequired { from, to });
        }

        let applied = apply_move_to_board(&self.board, from, to, promotion)?;
        let status = evaluate_status(&applied.board)?;
        let opponent_in_check = matches!(status, GameStatus::Check(_) | GameStatus::Checkmate(_));

        self.board = applied.board;
        self.status = status;
        self.pending_promotion = None;
        self.history.push(MoveRecord {
            from,
            to,
            moved: applied.moved,
            captured: applied.captured,
            special: applied.special,
            status_after: status,
        });

        debug!(
            "{mover} played {} {from} -> {to}; {} to move, status {status}",
            applied.moved.kind, self.board.side_to_move
        );
        if status.is_terminal() {
            info!("game over: {status}");
        }

        Ok(MoveOutcome {
            board: self.board.clone(),
            moved: applied.moved,
            captured: applied.captured,
            special: applied.special,
            opponent_in_check,
            status,
        })
    }

    /// Finishes the pending promotion with the chosen piece kind.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> ChessResult<MoveOutcome> {
        let (from, to) = self
            .pending_promotion
            .ok_or(MoveError::NoPendingPromotion)?;
        self.apply_move(from, to, Some(kind))
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}
