//! Full legal move generation pipeline.
//!
//! Gathers pseudo-legal moves, adds en-passant and castling candidates,
//! applies each candidate to a scratch board and drops those that leave the
//! mover's own king attacked.

use log::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_to_board, is_promotion_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::move_generation::legal_moves_pawn::generate_en_passant_moves;
use crate::move_generation::move_generator::{generate_pseudo_legal_moves, MoveMap};

/// Candidate moves for the side to move before self-check filtering.
pub fn generate_candidate_moves(board: &BoardState) -> MoveMap {
    let mover = board.side_to_move;
    let mut candidates = generate_pseudo_legal_moves(board);
    for (from, piece) in board.pieces().filter(|(_, p)| p.color == mover) {
        match piece.kind {
            PieceKind::Pawn => {
                generate_en_passant_moves(board, from, mover, candidates.targets_mut(from))
            }
            PieceKind::King => generate_castling_moves(board, mover, candidates.targets_mut(from)),
            _ => {}
        }
    }
    candidates
}

/// Whether the mover's king is safe after playing `from -> to`.
///
/// Promotions are trialled as a queen; the replacement kind cannot change
/// whether the mover's own king is attacked.
pub fn leaves_king_safe(board: &BoardState, from: Square, to: Square) -> ChessResult<bool> {
    let promotion = is_promotion_move(board, from, to).then_some(PieceKind::Queen);
    let applied = apply_move_to_board(board, from, to, promotion)?;
    Ok(!is_king_in_check(&applied.board, board.side_to_move)?)
}

/// Legal moves of the side to move, keyed by origin square.
pub fn generate_legal_moves(board: &BoardState) -> ChessResult<MoveMap> {
    board.king_square(board.side_to_move)?;

    let candidates = generate_candidate_moves(board);
    let mut legal = MoveMap::new();
    for (from, to) in candidates.moves() {
        if leaves_king_safe(board, from, to)? {
            legal.targets_mut(from).push(to);
        }
    }

    trace!(
        "{} to move: {} candidates, {} legal",
        board.side_to_move,
        candidates.move_count(),
        legal.move_count()
    );
    Ok(legal)
}

/// Legal destinations from one square. Empty when the square is empty or
/// holds a piece of the side not to move.
pub fn legal_moves_from(board: &BoardState, square: Square) -> ChessResult<Vec<Square>> {
    match board.piece_at(square) {
        Some(piece) if piece.color == board.side_to_move => {}
        _ => return Ok(Vec::new()),
    }
    let candidates = generate_candidate_moves(board);
    let mut legal = Vec::new();
    for &to in candidates.targets(square) {
        if leaves_king_safe(board, square, to)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(board: &BoardState) -> ChessResult<bool> {
    board.king_square(board.side_to_move)?;
    let candidates = generate_candidate_moves(board);
    for (from, to) in candidates.moves() {
        if leaves_king_safe(board, from, to)? {
            return Ok(true);
        }
    }
    Ok(false)
}
