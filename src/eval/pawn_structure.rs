//! Pawn structure feature evaluator. Blends middle-game and end-game scores
//! by phase.

use shakmaty::{Color, Role};

use crate::board::{masks, Board};
use crate::config::EvalParams;

use super::FeatureEvaluator;

pub const PAWN_PASSED_MG: f64 = 5.0;
pub const PAWN_PASSED_EG: f64 = 10.0;
pub const PAWN_ISOLATED_MG: f64 = 15.0;
pub const PAWN_ISOLATED_EG: f64 = 20.0;
pub const PAWN_DOUBLED_MG: f64 = 10.0;
pub const PAWN_DOUBLED_EG: f64 = 15.0;
pub const PAWN_CONNECTED_MG: f64 = 5.0;
pub const PAWN_CONNECTED_EG: f64 = 8.0;
pub const PAWN_PHALANX_MG: f64 = 3.0;
pub const PAWN_PHALANX_EG: f64 = 5.0;

pub struct PawnStructureEvaluator {
    passed_mg: f64,
    passed_eg: f64,
    isolated_mg: f64,
    isolated_eg: f64,
    doubled_mg: f64,
    doubled_eg: f64,
    connected_mg: f64,
    connected_eg: f64,
    phalanx_mg: f64,
    phalanx_eg: f64,
}

impl PawnStructureEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        PawnStructureEvaluator {
            passed_mg: params.get_or("pawn_passed_mg", PAWN_PASSED_MG),
            passed_eg: params.get_or("pawn_passed_eg", PAWN_PASSED_EG),
            isolated_mg: params.get_or("pawn_isolated_mg", PAWN_ISOLATED_MG),
            isolated_eg: params.get_or("pawn_isolated_eg", PAWN_ISOLATED_EG),
            doubled_mg: params.get_or("pawn_doubled_mg", PAWN_DOUBLED_MG),
            doubled_eg: params.get_or("pawn_doubled_eg", PAWN_DOUBLED_EG),
            connected_mg: params.get_or("pawn_connected_mg", PAWN_CONNECTED_MG),
            connected_eg: params.get_or("pawn_connected_eg", PAWN_CONNECTED_EG),
            phalanx_mg: params.get_or("pawn_phalanx_mg", PAWN_PHALANX_MG),
            phalanx_eg: params.get_or("pawn_phalanx_eg", PAWN_PHALANX_EG),
        }
    }

    fn is_passed(file: u8, rank: u8, enemy_pawns: u64, white: bool) -> bool {
        let lo = file.saturating_sub(1);
        let hi = (file + 1).min(7);
        for adjacent_file in lo..=hi {
            let file_mask = masks::file_mask(adjacent_file);
            let stop_mask = if white {
                file_mask & !((1u64 << (8 * (rank as u32 + 1))).wrapping_sub(1))
            } else {
                file_mask & (1u64 << (8 * rank as u32)).wrapping_sub(1)
            };
            if stop_mask & enemy_pawns != 0 {
                return false;
            }
        }
        true
    }

    fn is_isolated(file: u8, pawn_mask: u64) -> bool {
        let mut adjacent = 0u64;
        if file > 0 {
            adjacent |= masks::file_mask(file - 1);
        }
        if file < 7 {
            adjacent |= masks::file_mask(file + 1);
        }
        adjacent & pawn_mask == 0
    }

    fn is_doubled(file: u8, pawn_mask: u64) -> bool {
        (masks::file_mask(file) & pawn_mask).count_ones() > 1
    }

    fn is_connected(file: u8, rank: u8, pawn_mask: u64, white: bool) -> bool {
        let behind_rank = if white {
            rank.checked_sub(1)
        } else {
            let r = rank + 1;
            if r <= 7 {
                Some(r)
            } else {
                None
            }
        };
        let Some(behind_rank) = behind_rank else {
            return false;
        };
        let mut found = false;
        for adjacent_file in [file.checked_sub(1), Some(file + 1).filter(|&f| f <= 7)] {
            if let Some(adjacent_file) = adjacent_file {
                let sq = behind_rank as u64 * 8 + adjacent_file as u64;
                if pawn_mask & (1 << sq) != 0 {
                    found = true;
                }
            }
        }
        found
    }

    fn has_phalanx_partner(file: u8, rank: u8, pawn_mask: u64) -> bool {
        if file == 7 {
            return false;
        }
        let sq = rank as u64 * 8 + (file as u64 + 1);
        pawn_mask & (1 << sq) != 0
    }
}

impl FeatureEvaluator for PawnStructureEvaluator {
    fn evaluate(&self, board: &Board, color: Color, phase_value: f64) -> f64 {
        let white = color == Color::White;
        let pawn_mask = board.pieces(Role::Pawn, color).0;
        let enemy_pawn_mask = board.pieces(Role::Pawn, color.other()).0;

        let mut mg = 0.0;
        let mut eg = 0.0;

        for sq in masks::scan_forward(pawn_mask) {
            let file = sq % 8;
            let rank = sq / 8;
            let relative_rank = if white { rank } else { 7 - rank } as f64;

            if Self::is_passed(file, rank, enemy_pawn_mask, white) {
                mg += relative_rank * relative_rank * self.passed_mg;
                eg += relative_rank * relative_rank * self.passed_eg;
            }

            if Self::is_isolated(file, pawn_mask) {
                mg -= self.isolated_mg;
                eg -= self.isolated_eg;
            }

            if Self::is_doubled(file, pawn_mask) {
                mg -= self.doubled_mg;
                eg -= self.doubled_eg;
            }

            if Self::is_connected(file, rank, pawn_mask, white) {
                mg += self.connected_mg * (1.0 + relative_rank / 7.0);
                eg += self.connected_eg * (1.0 + relative_rank / 7.0);
            }

            if Self::has_phalanx_partner(file, rank, pawn_mask) {
                mg += self.phalanx_mg;
                eg += self.phalanx_eg;
            }
        }

        phase_value * mg + (1.0 - phase_value) * eg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;

    #[test]
    fn starting_position_has_no_pawn_structure_bonuses() {
        let evaluator = PawnStructureEvaluator::new(&EvalParams::empty());
        let board = Board::starting_position();
        assert_eq!(evaluator.evaluate(&board, Color::White, 1.0), 0.0);
    }

    #[test]
    fn isolated_pawn_is_penalised() {
        // White h-pawn has no neighbor on the g-file.
        let evaluator = PawnStructureEvaluator::new(&EvalParams::empty());
        let board =
            Board::from_fen("4k3/8/8/8/8/8/7P/4K3 w - - 0 1").unwrap();
        assert!(evaluator.evaluate(&board, Color::White, 1.0) < 0.0);
    }

    #[test]
    fn doubled_pawns_are_penalised_per_pawn_on_the_file() {
        let evaluator = PawnStructureEvaluator::new(&EvalParams::empty());
        let board = Board::from_fen("4k3/8/8/8/4P3/8/4P3/4K3 w - - 0 1").unwrap();
        let score = evaluator.evaluate(&board, Color::White, 1.0);
        // Both pawns on the e-file are doubled and isolated; the penalty
        // applies per pawn, not per pair.
        assert!(score <= -2.0 * PAWN_DOUBLED_MG);
    }

    #[test]
    fn passed_pawn_bonus_grows_with_advancement() {
        let evaluator = PawnStructureEvaluator::new(&EvalParams::empty());
        let rank5 = Board::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - - 0 1").unwrap();
        let rank6 = Board::from_fen("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(
            evaluator.evaluate(&rank6, Color::White, 1.0)
                > evaluator.evaluate(&rank5, Color::White, 1.0)
        );
    }

    #[test]
    fn phalanx_pawns_get_a_bonus() {
        let evaluator = PawnStructureEvaluator::new(&EvalParams::empty());
        let board = Board::from_fen("4k3/8/8/8/4PP2/8/8/4K3 w - - 0 1").unwrap();
        // e4/f4 phalanx: no isolation (mutually supporting files), bonus net positive.
        assert!(evaluator.evaluate(&board, Color::White, 1.0) > 0.0);
    }
}
