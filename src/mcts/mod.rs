//! Monte-Carlo tree search with UCT selection and static-evaluator leaf
//! values. No random playouts: a leaf's value is either its terminal
//! outcome or `tanh(evaluator.evaluate_board(leaf) / scale)`.

pub mod node;

use log::trace;
use shakmaty::Move;

use crate::board::Board;
use crate::eval::Evaluator;
use crate::search::Search;

use self::node::{Node, NodeId};

pub struct MctsSearch {
    evaluator: Box<dyn Evaluator>,
    exploration: f64,
    scale: f64,
}

impl MctsSearch {
    pub fn new(evaluator: Box<dyn Evaluator>, exploration: f64, scale: f64) -> Self {
        MctsSearch {
            evaluator,
            exploration,
            scale,
        }
    }

    /// `uct(n) = -mean_value(n) + c * sqrt(log_visits(parent) / visits(n))`.
    /// Negated because a child's `mean_value` is from the child's (the
    /// opponent's) perspective: the parent wants to pick the child that is
    /// worst for the opponent.
    fn uct(&self, node: &Node, parent_log_visits: f64) -> f64 {
        -node.mean_value() + self.exploration * (parent_log_visits / node.visits as f64).sqrt()
    }

    fn best_child(&self, arena: &[Node], node_id: NodeId) -> NodeId {
        let parent_log_visits = arena[node_id].log_visits();
        let children = &arena[node_id].children;
        let mut best = children[0];
        let mut best_score = self.uct(&arena[best], parent_log_visits);
        for &candidate in &children[1..] {
            let score = self.uct(&arena[candidate], parent_log_visits);
            if score > best_score {
                best_score = score;
                best = candidate;
            }
        }
        best
    }

    fn run_iteration(&self, arena: &mut Vec<Node>, board: &mut Board) {
        let mut current = 0;
        let mut pushes = 0u32;

        // Selection.
        while !arena[current].is_terminal() && arena[current].is_fully_expanded() {
            current = self.best_child(arena, current);
            let mv = arena[current].mv.clone().expect("non-root node always has a move");
            board.push(&mv).expect("move recorded on the tree is always legal");
            pushes += 1;
        }

        // Expansion.
        if !arena[current].is_terminal() {
            let mv = arena[current]
                .untried
                .pop()
                .expect("non-terminal, not-fully-expanded node has an untried move");
            board.push(&mv).expect("untried move from legal_moves() is always legal");
            pushes += 1;

            let outcome = board.outcome();
            let untried = if outcome.is_some() {
                Vec::new()
            } else {
                board.legal_moves()
            };

            let child_id = arena.len();
            arena.push(Node::new(Some(current), Some(mv), untried, outcome));
            arena[current].children.push(child_id);
            current = child_id;
        }

        // Evaluation.
        let value = match arena[current].outcome {
            Some(outcome) => outcome as f64,
            None => (self.evaluator.evaluate_board(board) / self.scale).tanh(),
        };

        // Backpropagation: alternating sign, leaf first.
        let mut node_id = Some(current);
        let mut sign = 1.0;
        while let Some(id) = node_id {
            let node = &mut arena[id];
            node.visits += 1;
            node.total_value += sign * value;
            node_id = node.parent;
            sign = -sign;
        }

        // Unmove.
        for _ in 0..pushes {
            board.pop();
        }
    }
}

impl Search for MctsSearch {
    fn choose_move(&self, board: &mut Board, budget: u32) -> Option<Move> {
        let root_outcome = board.outcome();
        let root_moves = if root_outcome.is_some() {
            Vec::new()
        } else {
            board.legal_moves()
        };
        if root_moves.is_empty() {
            return None;
        }

        let mut arena = vec![Node::new(None, None, root_moves, root_outcome)];
        for i in 0..budget {
            self.run_iteration(&mut arena, board);
            trace!("mcts iteration {i}: root visits={}", arena[0].visits);
        }

        let root = &arena[0];
        let mut best_child: Option<NodeId> = None;
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in &root.children {
            let score = -arena[child_id].mean_value();
            if score > best_score {
                best_score = score;
                best_child = Some(child_id);
            }
        }

        best_child.and_then(|id| arena[id].mv.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::positional::PositionalEvaluator;

    fn search() -> MctsSearch {
        MctsSearch::new(Box::new(PositionalEvaluator::default()), 1.0, 5.0)
    }

    #[test]
    fn starting_position_after_200_iterations_returns_a_legal_move() {
        let mcts = search();
        let mut board = Board::starting_position();
        let legal = board.legal_moves();
        let mv = mcts.choose_move(&mut board, 200).unwrap();
        assert!(legal.contains(&mv));
    }

    #[test]
    fn root_visits_equal_iteration_count_and_children_share_the_rest() {
        let mcts = search();
        let mut board = Board::starting_position();

        let root_moves = board.legal_moves();
        let mut arena = vec![Node::new(None, None, root_moves, None)];
        for _ in 0..200 {
            mcts.run_iteration(&mut arena, &mut board);
        }

        assert_eq!(arena[0].visits, 200);
        // The root is never itself a backprop leaf: every iteration's
        // selection/expansion descends into at least one direct child
        // before evaluation, so root and its children's total visits march
        // in lockstep for a non-terminal root.
        let child_visits: u32 = arena[0].children.iter().map(|&id| arena[id].visits).sum();
        assert_eq!(child_visits, 200);
    }

    #[test]
    fn mean_value_and_log_visits_match_their_definitions_after_search() {
        let mcts = search();
        let mut board = Board::starting_position();
        let root_moves = board.legal_moves();
        let mut arena = vec![Node::new(None, None, root_moves, None)];
        for _ in 0..200 {
            mcts.run_iteration(&mut arena, &mut board);
        }

        for node in arena.iter().skip(1) {
            if node.visits > 0 {
                assert!((node.mean_value() - node.total_value / node.visits as f64).abs() < 1e-9);
                assert!((node.log_visits() - (node.visits as f64).ln()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn stalemate_position_has_no_move_available() {
        let mcts = search();
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(mcts.choose_move(&mut board, 50), None);
    }
}
