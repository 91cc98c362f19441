//! Search facade: builds a move-selection strategy from an evaluator and
//! exposes a single `choose_move` across both search cores.

pub mod alpha_beta;
pub mod quiescence;

use shakmaty::Move;

use crate::board::Board;
use crate::eval::Evaluator;
use crate::mcts::MctsSearch;

use self::alpha_beta::AlphaBetaSearch;

/// Default UCT exploration constant for [`mcts`].
pub const DEFAULT_EXPLORATION: f64 = 1.0;
/// Default `tanh` scale applied to static-evaluator leaf values in MCTS.
pub const DEFAULT_SCALE: f64 = 5.0;

/// A move-selection strategy. `budget` is a search depth for alpha-beta and
/// an iteration count for MCTS; either way, larger means more work.
pub trait Search {
    /// Chooses a move for the side to move in `board`, or `None` if the
    /// position has no legal moves (callers must check terminal state
    /// first if they need to distinguish that from an engine failure).
    fn choose_move(&self, board: &mut Board, budget: u32) -> Option<Move>;
}

/// Alpha-beta negamax search with quiescence extension, ordered by
/// `evaluator`'s move scores.
pub fn alpha_beta(evaluator: Box<dyn Evaluator>) -> Box<dyn Search> {
    Box::new(AlphaBetaSearch::new(evaluator))
}

/// Monte-Carlo tree search with UCT selection and static-evaluator leaf
/// values (no random playouts).
pub fn mcts(evaluator: Box<dyn Evaluator>, exploration: f64, scale: f64) -> Box<dyn Search> {
    Box::new(MctsSearch::new(evaluator, exploration, scale))
}
