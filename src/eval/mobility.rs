//! Piece mobility feature evaluator. Phase-weighted.

use shakmaty::{Color, Role};

use crate::board::{masks, Board};
use crate::config::EvalParams;

use super::FeatureEvaluator;

pub const MOBILITY_KNIGHT: f64 = 4.0;
pub const MOBILITY_BISHOP: f64 = 3.0;
pub const MOBILITY_ROOK: f64 = 2.0;
pub const MOBILITY_QUEEN: f64 = 1.0;

pub struct PieceMobilityEvaluator {
    weights: [(Role, f64); 4],
}

impl PieceMobilityEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        PieceMobilityEvaluator {
            weights: [
                (Role::Knight, params.get_or("mobility_knight", MOBILITY_KNIGHT)),
                (Role::Bishop, params.get_or("mobility_bishop", MOBILITY_BISHOP)),
                (Role::Rook, params.get_or("mobility_rook", MOBILITY_ROOK)),
                (Role::Queen, params.get_or("mobility_queen", MOBILITY_QUEEN)),
            ],
        }
    }
}

impl FeatureEvaluator for PieceMobilityEvaluator {
    fn evaluate(&self, board: &Board, color: Color, phase_value: f64) -> f64 {
        let mut score = 0.0;
        for (role, weight) in self.weights {
            let squares = board.pieces(role, color).0;
            for sq in masks::scan_forward(squares) {
                let square = shakmaty::Square::new(sq as u32);
                score += board.attacks(square).count() as f64 * weight;
            }
        }
        phase_value * score
    }
}
