//! Integration coverage for the strategic-bonus feature evaluator.

use chess_core::board::Board;
use chess_core::config::EvalParams;
use chess_core::eval::strategic::StrategicBonusEvaluator;
use chess_core::eval::FeatureEvaluator;
use shakmaty::Color;

#[test]
fn knight_on_a_defended_outpost_scores_better_than_one_adrift() {
    let evaluator = StrategicBonusEvaluator::new(&EvalParams::empty());
    let outpost = Board::from_fen("4k3/8/8/4N3/3P4/8/8/4K3 w - - 0 1").unwrap();
    let adrift = Board::from_fen("4k3/8/8/4N3/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(
        evaluator.evaluate(&outpost, Color::White, 1.0) > evaluator.evaluate(&adrift, Color::White, 1.0)
    );
}

#[test]
fn knight_trapped_in_the_corner_is_penalised() {
    let evaluator = StrategicBonusEvaluator::new(&EvalParams::empty());
    let board = Board::from_fen("4k3/8/8/8/8/8/6PP/6KN w - - 0 1").unwrap();
    assert!(evaluator.evaluate(&board, Color::White, 1.0) < 0.0);
}
