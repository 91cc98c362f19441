//! Static position evaluation.
//!
//! A [`FeatureEvaluator`] scores one positional dimension for one side,
//! blended by game phase where that dimension calls for it. An [`Evaluator`]
//! composes these (or stands alone, for the simpler material-only variants)
//! into a single signed score from the side-to-move's perspective, and also
//! knows how to rank moves for search ordering.

pub mod king_safety;
pub mod material;
pub mod mobility;
pub mod pawn_structure;
pub mod phase;
pub mod piece_square;
pub mod positional;
pub mod strategic;

use shakmaty::{Move, Role};

use crate::board::Board;

/// Scores a single positional dimension for one color.
///
/// `phase_value` is 1.0 in the opening/middlegame and 0.0 in the endgame;
/// implementations that care about game phase blend their middlegame and
/// endgame scores with it, others ignore it.
pub trait FeatureEvaluator {
    fn evaluate(&self, board: &Board, color: shakmaty::Color, phase_value: f64) -> f64;
}

/// Produces a single signed score for a position and ranks moves for
/// move-ordering in search. The score is always from the perspective of the
/// side to move: positive favors the mover, negative favors the opponent.
pub trait Evaluator {
    fn evaluate_board(&self, board: &Board) -> f64;

    /// Value of one piece of the given role, used for move ordering
    /// (MVV-LVA) and quiescence delta pruning. Kings are never captured so
    /// implementations may return anything finite for `Role::King`.
    fn piece_value(&self, role: Role) -> f64;

    /// MVV-LVA score for a capture: `10 * victim_value - attacker_value`.
    /// Used alone to order captures in quiescence search, and as the
    /// capture term of [`evaluate_move`](Self::evaluate_move) at the root
    /// and in the main alpha-beta search.
    fn evaluate_capture(&self, _board: &Board, mv: &Move) -> f64 {
        let attacker_value = self.piece_value(mv.role());
        let victim_value = mv
            .capture()
            .map(|role| self.piece_value(role))
            .unwrap_or(0.0);
        10.0 * victim_value - attacker_value
    }

    /// Heuristic ordering score for any legal move: MVV-LVA if capturing,
    /// plus a flat queen-value bonus if promoting.
    fn evaluate_move(&self, board: &Board, mv: &Move) -> f64 {
        let capture_score = if mv.is_capture() {
            self.evaluate_capture(board, mv)
        } else {
            0.0
        };
        let promotion_bonus = if mv.promotion().is_some() {
            self.piece_value(Role::Queen)
        } else {
            0.0
        };
        capture_score + promotion_bonus
    }
}
