//! Phase evaluator: a pure, side-independent function of the board.

use shakmaty::{Color, Role};

use crate::board::Board;

const KNIGHT_WEIGHT: f64 = 1.0;
const BISHOP_WEIGHT: f64 = 1.0;
const ROOK_WEIGHT: f64 = 2.0;
const QUEEN_WEIGHT: f64 = 4.0;

/// `2*queen + 4*rook + 4*bishop + 4*knight`, the material present at the
/// start of the game excluding pawns and kings.
const MAX_VALUE: f64 = 2.0 * QUEEN_WEIGHT + 4.0 * ROOK_WEIGHT + 4.0 * BISHOP_WEIGHT + 4.0 * KNIGHT_WEIGHT;

/// Returns a value in `[0, 1]`: `1` at the start of the game, `0` once all
/// non-pawn, non-king material is gone. Ignores `board`'s side to move.
pub fn phase_value(board: &Board) -> f64 {
    let mut score = 0.0;
    for (role, weight) in [
        (Role::Knight, KNIGHT_WEIGHT),
        (Role::Bishop, BISHOP_WEIGHT),
        (Role::Rook, ROOK_WEIGHT),
        (Role::Queen, QUEEN_WEIGHT),
    ] {
        let count = board.pieces(role, Color::White).count() + board.pieces(role, Color::Black).count();
        score += count as f64 * weight;
    }
    (score / MAX_VALUE).min(1.0)
}
