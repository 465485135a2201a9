//! Perft: exhaustive legal move tree counts.
//!
//! Every promotion destination counts once per promotion choice, matching the
//! usual perft conventions, so results can be compared against published
//! tables to validate the move generator.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{
    apply_move_to_board, is_promotion_move, AppliedMove, SpecialMove,
};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A fully specified move: origin, destination and promotion choice.
pub type FullMove = (Square, Square, Option<PieceKind>);

/// Legal moves of the side to move with promotions expanded per choice.
pub fn legal_full_moves(board: &BoardState) -> ChessResult<Vec<FullMove>> {
    let legal = generate_legal_moves(board)?;
    let mut out = Vec::with_capacity(legal.move_count());
    for (from, to) in legal.moves() {
        if is_promotion_move(board, from, to) {
            out.extend(
                PieceKind::PROMOTION_CHOICES
                    .iter()
                    .map(|&kind| (from, to, Some(kind))),
            );
        } else {
            out.push((from, to, None));
        }
    }
    Ok(out)
}

pub fn perft(board: &BoardState, depth: u8) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_recurse(board, depth, &mut counts)?;
    Ok(counts)
}

/// Node counts below each root move, in generation order.
pub fn perft_divide(board: &BoardState, depth: u8) -> ChessResult<Vec<(FullMove, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in legal_full_moves(board)? {
        let (from, to, promotion) = mv;
        let applied = apply_move_to_board(board, from, to, promotion)?;
        let below = perft(&applied.board, depth - 1)?;
        out.push((mv, below.nodes));
    }
    Ok(out)
}

fn perft_recurse(board: &BoardState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for (from, to, promotion) in legal_full_moves(board)? {
        let applied = apply_move_to_board(board, from, to, promotion)?;
        if depth == 1 {
            counts.merge(leaf_counts(&applied)?);
        } else {
            perft_recurse(&applied.board, depth - 1, counts)?;
        }
    }
    Ok(())
}

fn leaf_counts(applied: &AppliedMove) -> ChessResult<PerftCounts> {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if applied.captured.is_some() {
        counts.captures = 1;
    }
    match applied.special {
        Some(SpecialMove::EnPassant) => counts.en_passant = 1,
        Some(SpecialMove::Castle(_)) => counts.castles = 1,
        Some(SpecialMove::Promotion(_)) => counts.promotions = 1,
        _ => {}
    }

    let defender = applied.board.side_to_move;
    if is_king_in_check(&applied.board, defender)? {
        counts.checks = 1;
        if !has_legal_move(&applied.board)? {
            counts.checkmates = 1;
        }
    }
    Ok(counts)
}
