//! Strategic bonus feature evaluator. Not phase-weighted.

use shakmaty::{Color, Piece, Role, Square};

use crate::board::{masks, Board};
use crate::config::EvalParams;

use super::FeatureEvaluator;

pub const BISHOP_PAIR: f64 = 40.0;
pub const ROOK_OPEN: f64 = 20.0;
pub const ROOK_7TH_RANK: f64 = 40.0;
pub const KNIGHT_OUTPOST: f64 = 35.0;
pub const BAD_BISHOP: f64 = 15.0;
pub const TRAPPED_PIECE: f64 = 50.0;
pub const ROOK_BATTERY: f64 = 25.0;

pub struct StrategicBonusEvaluator {
    bishop_pair: f64,
    rook_open: f64,
    rook_7th_rank: f64,
    knight_outpost: f64,
    bad_bishop: f64,
    trapped_piece: f64,
    rook_battery: f64,
}

impl StrategicBonusEvaluator {
    pub fn new(params: &EvalParams) -> Self {
        StrategicBonusEvaluator {
            bishop_pair: params.get_or("bishop_pair", BISHOP_PAIR),
            rook_open: params.get_or("rook_open", ROOK_OPEN),
            rook_7th_rank: params.get_or("rook_7th_rank", ROOK_7TH_RANK),
            knight_outpost: params.get_or("knight_outpost", KNIGHT_OUTPOST),
            bad_bishop: params.get_or("bad_bishop", BAD_BISHOP),
            trapped_piece: params.get_or("trapped_piece", TRAPPED_PIECE),
            rook_battery: params.get_or("rook_battery", ROOK_BATTERY),
        }
    }

    fn is_outpost(board: &Board, square: Square, color: Color) -> bool {
        let index: u32 = square.into();
        let rank = (index / 8) as i32;
        let file = (index % 8) as i32;
        let relative_rank = if color == Color::White { rank } else { 7 - rank };
        if !(3..=5).contains(&relative_rank) {
            return false;
        }
        let pawn_rank = rank - if color == Color::White { 1 } else { -1 };
        for adjacent_file in [file - 1, file + 1] {
            if (0..8).contains(&adjacent_file) && (0..8).contains(&pawn_rank) {
                let sq = Square::new((pawn_rank * 8 + adjacent_file) as u32);
                if board.piece_at(sq) == Some(Piece { color, role: Role::Pawn }) {
                    return true;
                }
            }
        }
        false
    }

    fn is_seventh_rank(rank: u8, color: Color) -> bool {
        (color == Color::White && rank == 6) || (color == Color::Black && rank == 1)
    }

    fn bishop_pair_bonus(&self, board: &Board, color: Color) -> f64 {
        if board.pieces(Role::Bishop, color).count() < 2 {
            0.0
        } else {
            self.bishop_pair
        }
    }

    fn knight_outpost_bonus(&self, board: &Board, color: Color) -> f64 {
        let mut score = 0.0;
        for sq in masks::scan_forward(board.pieces(Role::Knight, color).0) {
            if Self::is_outpost(board, Square::new(sq as u32), color) {
                score += self.knight_outpost;
            }
        }
        score
    }

    fn rook_activity_bonus(&self, board: &Board, color: Color) -> f64 {
        let own_pawns = board.pieces(Role::Pawn, color).0;
        let enemy_pawns = board.pieces(Role::Pawn, color.other()).0;

        let mut score = 0.0;
        for sq in masks::scan_forward(board.pieces(Role::Rook, color).0) {
            let file = sq % 8;
            let rank = sq / 8;

            if Self::is_seventh_rank(rank, color) {
                score += self.rook_7th_rank;
            }

            let file_mask = masks::file_mask(file);
            let free_of_own = file_mask & own_pawns == 0;
            let free_of_enemy = file_mask & enemy_pawns == 0;
            if free_of_own {
                score += if free_of_enemy { self.rook_open } else { self.rook_open / 2.0 };
            }
        }
        score
    }

    fn bad_bishop_penalty(&self, board: &Board, color: Color) -> f64 {
        let pawns = board.pieces(Role::Pawn, color).0;
        let bishops = board.pieces(Role::Bishop, color).0;

        let mut score = 0.0;
        if bishops & masks::LIGHT_SQUARES != 0 {
            let count = (pawns & masks::LIGHT_SQUARES).count_ones();
            if count > 2 {
                score -= (count - 2) as f64 * self.bad_bishop;
            }
        }
        if bishops & masks::DARK_SQUARES != 0 {
            let count = (pawns & masks::DARK_SQUARES).count_ones();
            if count > 2 {
                score -= (count - 2) as f64 * self.bad_bishop;
            }
        }
        score
    }

    fn trapped_pieces_penalty(&self, board: &Board, color: Color) -> f64 {
        let mut score = 0.0;
        for sq in masks::scan_forward(board.pieces(Role::Knight, color).0) {
            if masks::CORNERS & (1 << sq) != 0 && board.attacks(Square::new(sq as u32)).count() < 3 {
                score -= self.trapped_piece;
            }
        }

        let king_sq = board.king(color);
        let (corner_king, corner_rook, corner_blocker) = if color == Color::White {
            (Square::G1, Square::H1, Square::F1)
        } else {
            (Square::G8, Square::H8, Square::F8)
        };
        if king_sq == corner_king
            && board.piece_at(corner_rook) == Some(Piece { color, role: Role::Rook })
        {
            if let Some(blocker) = board.piece_at(corner_blocker) {
                if blocker.role != Role::King {
                    score -= self.trapped_piece;
                }
            }
        }
        score
    }

    fn rook_battery_bonus(&self, board: &Board, color: Color) -> f64 {
        let rooks = board.pieces(Role::Rook, color).0;
        if rooks.count_ones() < 2 {
            return 0.0;
        }

        let mut score = 0.0;
        for sq in masks::scan_forward(rooks) {
            let file_mask = masks::file_mask(sq % 8);
            let others_on_file = (rooks & file_mask) & !(1u64 << sq);
            if board.attacks(Square::new(sq as u32)).0 & others_on_file != 0 {
                score += self.rook_battery / 2.0;
            }
        }
        score
    }
}

impl FeatureEvaluator for StrategicBonusEvaluator {
    fn evaluate(&self, board: &Board, color: Color, _phase_value: f64) -> f64 {
        self.bishop_pair_bonus(board, color)
            + self.knight_outpost_bonus(board, color)
            + self.rook_activity_bonus(board, color)
            + self.bad_bishop_penalty(board, color)
            + self.trapped_pieces_penalty(board, color)
            + self.rook_battery_bonus(board, color)
    }
}
