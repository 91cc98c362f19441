//! Integration coverage for the king-safety feature evaluator.

use chess_core::board::Board;
use chess_core::config::EvalParams;
use chess_core::eval::king_safety::KingSafetyEvaluator;
use chess_core::eval::FeatureEvaluator;
use shakmaty::Color;

#[test]
fn intact_pawn_shield_scores_better_than_a_stripped_one() {
    let evaluator = KingSafetyEvaluator::new(&EvalParams::empty());
    let shielded = Board::from_fen("4k3/8/8/8/8/8/5PPP/6K1 w - - 0 1").unwrap();
    let stripped = Board::from_fen("4k3/8/8/8/8/8/8/6K1 w - - 0 1").unwrap();
    assert!(
        evaluator.evaluate(&shielded, Color::White, 1.0) > evaluator.evaluate(&stripped, Color::White, 1.0)
    );
}

#[test]
fn deep_endgame_king_safety_is_always_zero() {
    let evaluator = KingSafetyEvaluator::new(&EvalParams::empty());
    let board = Board::from_fen("8/8/8/4k3/8/8/4P3/4K3 w - - 0 1").unwrap();
    assert_eq!(evaluator.evaluate(&board, Color::White, 0.0), 0.0);
    assert_eq!(evaluator.evaluate(&board, Color::Black, 0.0), 0.0);
}
