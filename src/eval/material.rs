//! Material feature evaluator. Never phase-weighted.

use shakmaty::{Color, Role};

use crate::board::Board;
use crate::config::EvalParams;

use super::FeatureEvaluator;

pub const PAWN_VALUE: f64 = 100.0;
pub const KNIGHT_VALUE: f64 = 320.0;
pub const BISHOP_VALUE: f64 = 330.0;
pub const ROOK_VALUE: f64 = 500.0;
pub const QUEEN_VALUE: f64 = 900.0;

pub struct MaterialEvaluator {
    values: [(Role, f64); 5],
}

impl MaterialEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        MaterialEvaluator {
            values: [
                (Role::Pawn, params.get_or("pawn_value", PAWN_VALUE)),
                (Role::Knight, params.get_or("knight_value", KNIGHT_VALUE)),
                (Role::Bishop, params.get_or("bishop_value", BISHOP_VALUE)),
                (Role::Rook, params.get_or("rook_value", ROOK_VALUE)),
                (Role::Queen, params.get_or("queen_value", QUEEN_VALUE)),
            ],
        }
    }

    /// The configured value of `role`, or `0` for kings (and anything else
    /// not in the table).
    pub fn piece_value(&self, role: Role) -> f64 {
        self.values
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}

impl FeatureEvaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, color: Color, _phase_value: f64) -> f64 {
        self.values
            .iter()
            .map(|(role, value)| board.pieces(*role, color).count() as f64 * value)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_is_non_negative_in_the_starting_position() {
        let evaluator = MaterialEvaluator::new(&EvalParams::empty());
        let board = Board::starting_position();
        assert!(evaluator.evaluate(&board, Color::White, 1.0) >= 0.0);
        assert!(evaluator.evaluate(&board, Color::Black, 1.0) >= 0.0);
    }

    #[test]
    fn material_is_symmetric_in_the_starting_position() {
        let evaluator = MaterialEvaluator::new(&EvalParams::empty());
        let board = Board::starting_position();
        assert_eq!(
            evaluator.evaluate(&board, Color::White, 1.0),
            evaluator.evaluate(&board, Color::Black, 1.0)
        );
    }

    #[test]
    fn missing_rook_reduces_material() {
        let evaluator = MaterialEvaluator::new(&EvalParams::empty());
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN1 w KQkq - 0 1").unwrap();
        assert_eq!(
            evaluator.evaluate(&board, Color::Black, 1.0) - evaluator.evaluate(&board, Color::White, 1.0),
            ROOK_VALUE
        );
    }

    #[test]
    fn custom_param_overrides_default_value() {
        let mut map = std::collections::HashMap::new();
        map.insert("queen_value".to_string(), 1000.0);
        let evaluator = MaterialEvaluator::new(&EvalParams::from_map(map));
        assert_eq!(evaluator.piece_value(shakmaty::Role::Queen), 1000.0);
    }
}
