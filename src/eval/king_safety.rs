//! King safety feature evaluator.
//!
//! Shield masks (the squares one rank ahead of each king square, restricted
//! to the king's file and its neighbors) are precomputed once per color at
//! construction time, following the same precompute-in-`new` pattern the
//! piece-square tables use.

use shakmaty::{Color, Role, Square};

use crate::board::{masks, Board};
use crate::config::EvalParams;

use super::FeatureEvaluator;

pub const KING_SHIELD: f64 = 15.0;
pub const KING_OPEN: f64 = 20.0;
pub const KING_ATTACKED: f64 = 5.0;
const PHASE_MINIMUM: f64 = 0.1;

fn attacker_weight(role: Role) -> f64 {
    match role {
        Role::Knight => 2.0,
        Role::Bishop => 2.0,
        Role::Rook => 3.0,
        Role::Queen => 5.0,
        _ => 0.0,
    }
}

pub struct KingSafetyEvaluator {
    shield_bonus: f64,
    shield_penalty: f64,
    attacked_weight: f64,
    shield_masks: [[u64; 64]; 2],
}

impl KingSafetyEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        let mut shield_masks = [[0u64; 64]; 2];
        for square in 0u8..64 {
            let file = square % 8;
            let rank = square / 8;
            for (color_idx, step) in [(0usize, 1i32), (1usize, -1i32)] {
                let shield_rank = rank as i32 + step;
                if (0..8).contains(&shield_rank) {
                    let lo = file.saturating_sub(1);
                    let hi = (file + 1).min(7);
                    let mut mask = 0u64;
                    for f in lo..=hi {
                        mask |= 1 << (shield_rank as u64 * 8 + f as u64);
                    }
                    shield_masks[color_idx][square as usize] = mask;
                }
            }
        }

        KingSafetyEvaluator {
            shield_bonus: params.get_or("king_shield", KING_SHIELD),
            shield_penalty: params.get_or("king_open", KING_OPEN),
            attacked_weight: params.get_or("king_attacked", KING_ATTACKED),
            shield_masks,
        }
    }

    fn king_attacked_penalty(&self, board: &Board, color: Color, king_square: Square) -> f64 {
        let enemy = color.other();
        let king_zone = masks::king_attack_mask(king_square.into());

        let mut num_attackers = 0;
        let mut total_weight = 0.0;
        for role in [Role::Knight, Role::Bishop, Role::Rook, Role::Queen] {
            for sq in masks::scan_forward(board.pieces(role, enemy).0) {
                let square = Square::new(sq as u32);
                if board.attacks(square).0 & king_zone != 0 {
                    num_attackers += 1;
                    total_weight += attacker_weight(role);
                }
            }
        }

        if num_attackers <= 1 {
            0.0
        } else {
            num_attackers as f64 * total_weight
        }
    }

    fn is_central_file(file: u8) -> bool {
        file == 3 || file == 4
    }

    fn is_king_too_advanced(rank: u8, color: Color) -> bool {
        (color == Color::White && rank > 1) || (color == Color::Black && rank < 6)
    }
}

impl FeatureEvaluator for KingSafetyEvaluator {
    fn evaluate(&self, board: &Board, color: Color, phase_value: f64) -> f64 {
        if phase_value < PHASE_MINIMUM {
            return 0.0;
        }

        let king_square = board.king(color);
        let king_index: u32 = king_square.into();
        let king_file = (king_index % 8) as u8;
        let king_rank = (king_index / 8) as u8;

        let penalty = self.king_attacked_penalty(board, color, king_square);
        let mut score = -penalty * self.attacked_weight;

        if Self::is_central_file(king_file) || Self::is_king_too_advanced(king_rank, color) {
            return phase_value * score;
        }

        let color_idx = if color == Color::White { 0 } else { 1 };
        let shield_mask = self.shield_masks[color_idx][king_index as usize];
        let friendly_pawns = board.pieces(Role::Pawn, color).0;
        let pawns_in_shield = (shield_mask & friendly_pawns).count_ones();
        let num_files = shield_mask.count_ones();

        score += (pawns_in_shield as f64 * self.shield_bonus)
            - ((num_files - pawns_in_shield) as f64 * self.shield_penalty);

        phase_value * score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_endgame_contributes_nothing() {
        let evaluator = KingSafetyEvaluator::new(&EvalParams::empty());
        let board = Board::from_fen("8/8/8/4k3/8/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(evaluator.evaluate(&board, Color::White, 0.05), 0.0);
    }

    #[test]
    fn castled_king_with_full_pawn_shield_scores_well() {
        let evaluator = KingSafetyEvaluator::new(&EvalParams::empty());
        // White just castled kingside with an intact f2/g2/h2 shield.
        let board =
            Board::from_fen("rnbq1rk1/pppp1ppp/4pn2/8/8/5NP1/PPPPPPBP/RNBQ1RK1 w - - 0 1")
                .unwrap();
        assert!(evaluator.evaluate(&board, Color::White, 1.0) >= 0.0);
    }

    #[test]
    fn central_king_skips_shield_scoring() {
        let evaluator = KingSafetyEvaluator::new(&EvalParams::empty());
        let board = Board::from_fen("4k3/8/8/8/8/8/4K3/8 w - - 0 1").unwrap();
        // King on e2: central file, shield logic short-circuits.
        let score = evaluator.evaluate(&board, Color::White, 1.0);
        assert_eq!(score, 0.0);
    }
}
