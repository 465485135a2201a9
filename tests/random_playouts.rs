//! Seeded random games checking invariants that must hold after every move.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use chess_rules::move_generation::legal_move_apply::{apply_move_to_board, is_promotion_move};
use chess_rules::move_generation::legal_move_checks::is_king_in_check;
use chess_rules::{
    BoardState, CastleSide, ChessGame, Color, GameStatus, MoveError, PieceKind, SpecialMove,
};

const GAMES: u64 = 12;
const MAX_PLIES: usize = 120;

fn rights_never_regained(before: &BoardState, after: &BoardState) -> bool {
    Color::ALL.iter().all(|&color| {
        CastleSide::ALL.iter().all(|&side| {
            before.castling_rights().get(color, side) || !after.castling_rights().get(color, side)
        })
    })
}

#[test]
fn legal_moves_never_leave_the_mover_in_check() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = ChessGame::new();

        for _ in 0..MAX_PLIES {
            if game.status().is_terminal() {
                break;
            }
            let board = game.board().clone();
            let mover = board.side_to_move;
            let legal: Vec<_> = game
                .legal_moves()
                .expect("generation should succeed")
                .moves()
                .collect();
            assert!(!legal.is_empty(), "non-terminal position must have a move");

            for &(from, to) in &legal {
                let promotion = is_promotion_move(&board, from, to).then_some(PieceKind::Queen);
                let applied = apply_move_to_board(&board, from, to, promotion)
                    .expect("legal move should apply");
                assert_eq!(
                    is_king_in_check(&applied.board, mover),
                    Ok(false),
                    "seed {seed}: {from}->{to} leaves {mover} in check\n{board}"
                );
                assert!(applied.board.validate_kings().is_ok());
                assert!(rights_never_regained(&board, &applied.board));
                if applied.special != Some(SpecialMove::DoublePawnPush) {
                    assert_eq!(applied.board.en_passant_target(), None);
                }
            }

            let &(from, to) = legal.choose(&mut rng).expect("non-empty move list");
            let result = match game.apply_move(from, to, None) {
                Err(MoveError::PromotionRequired { .. }) => {
                    let kind = *PieceKind::PROMOTION_CHOICES
                        .choose(&mut rng)
                        .expect("four choices");
                    game.complete_promotion(kind)
                }
                other => other,
            };
            let outcome = result.expect("chosen legal move should apply");
            assert_eq!(outcome.board.side_to_move, mover.opposite());
            assert_eq!(
                outcome.opponent_in_check,
                matches!(outcome.status, GameStatus::Check(_) | GameStatus::Checkmate(_))
            );
        }
    }
}
