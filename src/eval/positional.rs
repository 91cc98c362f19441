//! Top-level evaluators offered by this crate: a full positional composite
//! and two cheaper material-only variants, grounded on the three top-level
//! evaluator classes in the original (`positional_evaluator.py`,
//! `material_evaluator.py`, `simple_material_evaluator.py`).

use shakmaty::{Color, Role};

use crate::board::Board;
use crate::config::EvalParams;

use super::king_safety::KingSafetyEvaluator;
use super::material::MaterialEvaluator;
use super::mobility::PieceMobilityEvaluator;
use super::pawn_structure::PawnStructureEvaluator;
use super::phase::phase_value;
use super::piece_square::PieceSquareEvaluator;
use super::strategic::StrategicBonusEvaluator;
use super::{Evaluator, FeatureEvaluator};

/// Composite of all six feature evaluators, phase-weighted where each
/// feature calls for it. This is the default, full-strength evaluator.
pub struct PositionalEvaluator {
    material: MaterialEvaluator,
    mobility: PieceMobilityEvaluator,
    pawn_structure: PawnStructureEvaluator,
    king_safety: KingSafetyEvaluator,
    strategic: StrategicBonusEvaluator,
    piece_square: PieceSquareEvaluator,
}

impl PositionalEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        PositionalEvaluator {
            material: MaterialEvaluator::new(params),
            mobility: PieceMobilityEvaluator::new(params),
            pawn_structure: PawnStructureEvaluator::new(params),
            king_safety: KingSafetyEvaluator::new(params),
            strategic: StrategicBonusEvaluator::new(params),
            piece_square: PieceSquareEvaluator::new(params),
        }
    }

    fn score_side(&self, board: &Board, color: Color) -> f64 {
        let phase = phase_value(board);
        self.material.evaluate(board, color, phase)
            + self.mobility.evaluate(board, color, phase)
            + self.pawn_structure.evaluate(board, color, phase)
            + self.king_safety.evaluate(board, color, phase)
            + self.strategic.evaluate(board, color, phase)
            + self.piece_square.evaluate(board, color, phase)
    }
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        PositionalEvaluator::new(&EvalParams::empty())
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate_board(&self, board: &Board) -> f64 {
        let turn = board.turn();
        self.score_side(board, turn) - self.score_side(board, turn.other())
    }

    fn piece_value(&self, role: Role) -> f64 {
        self.material.piece_value(role)
    }
}

/// Material count only, no positional terms. The cheapest evaluator, used
/// where search speed matters more than playing strength.
pub struct SimpleMaterialEvaluator {
    material: MaterialEvaluator,
}

impl SimpleMaterialEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        SimpleMaterialEvaluator {
            material: MaterialEvaluator::new(params),
        }
    }
}

impl Default for SimpleMaterialEvaluator {
    fn default() -> Self {
        SimpleMaterialEvaluator::new(&EvalParams::empty())
    }
}

impl Evaluator for SimpleMaterialEvaluator {
    fn evaluate_board(&self, board: &Board) -> f64 {
        let turn = board.turn();
        self.material.evaluate(board, turn, 1.0) - self.material.evaluate(board, turn.other(), 1.0)
    }

    fn piece_value(&self, role: Role) -> f64 {
        self.material.piece_value(role)
    }
}

/// Material count squashed through `tanh`, for use as a bounded leaf value
/// in search cores (MCTS) that expect scores on a fixed scale rather than
/// centipawns.
pub struct TanhMaterialEvaluator {
    material: MaterialEvaluator,
    scale: f64,
}

impl TanhMaterialEvaluator {
    pub fn new(params: &EvalParams, scale: f64) -> Self {
        TanhMaterialEvaluator {
            material: MaterialEvaluator::new(params),
            scale,
        }
    }
}

impl Evaluator for TanhMaterialEvaluator {
    fn evaluate_board(&self, board: &Board) -> f64 {
        let turn = board.turn();
        let diff =
            self.material.evaluate(board, turn, 1.0) - self.material.evaluate(board, turn.other(), 1.0);
        (diff / self.scale).tanh()
    }

    fn piece_value(&self, role: Role) -> f64 {
        self.material.piece_value(role)
    }
}
