//! Board adapter.
//!
//! Thin wrapper around [`shakmaty`], the external chess-rules engine, adding
//! the two conveniences the core needs beyond `shakmaty`'s own `Position`
//! trait: a `push`/`pop` history stack (python-chess style make/unmake over
//! `shakmaty`'s otherwise immutable-functional `Chess::play`), and an
//! `outcome` that folds checkmate/stalemate/insufficient-material/fifty-move/
//! threefold-repetition into the single `-1`/`0`/absent signal the search
//! cores consume.

pub mod masks;

use shakmaty::{
    fen::Fen, Bitboard, CastlingMode, Chess, Color, Move, Piece, Position, Role, Square,
};

use crate::error::CoreError;

/// A position together with the history needed to undo moves and to detect
/// repetition.
#[derive(Clone, Debug)]
pub struct Board {
    current: Chess,
    history: Vec<Chess>,
}

impl Board {
    /// The standard starting position.
    pub fn starting_position() -> Self {
        Board {
            current: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Parse a position from Forsyth-Edwards Notation.
    pub fn from_fen(fen: &str) -> Result<Self, CoreError> {
        let fen: Fen = fen.parse().map_err(|_| CoreError::IllegalMove)?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|_| CoreError::IllegalMove)?;
        Ok(Board {
            current: position,
            history: Vec::new(),
        })
    }

    /// Play `mv`, pushing the prior position onto the history stack.
    pub fn push(&mut self, mv: &Move) -> Result<(), CoreError> {
        let next = self
            .current
            .clone()
            .play(mv)
            .map_err(|_| CoreError::IllegalMove)?;
        self.history.push(std::mem::replace(&mut self.current, next));
        Ok(())
    }

    /// Undo the most recent [`push`](Self::push).
    pub fn pop(&mut self) {
        self.current = self
            .history
            .pop()
            .expect("pop() called without a matching push()");
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.current.turn()
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.current.legal_moves().into_iter().collect()
    }

    /// All legal captures for the side to move.
    pub fn legal_captures(&self) -> Vec<Move> {
        self.current
            .legal_moves()
            .into_iter()
            .filter(|m| m.is_capture())
            .collect()
    }

    /// Whether `mv` is a capture (including en passant).
    pub fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    /// `-1` if the side to move is checkmated, `0` if the position is drawn
    /// (stalemate, insufficient material, fifty-move rule, or threefold
    /// repetition), otherwise absent.
    pub fn outcome(&self) -> Option<i8> {
        if self.is_checkmate() {
            Some(-1)
        } else if self.is_draw() {
            Some(0)
        } else {
            None
        }
    }

    /// Whether the side to move is checkmated.
    pub fn is_checkmate(&self) -> bool {
        self.current.is_checkmate()
    }

    /// Whether the side to move is stalemated.
    pub fn is_stalemate(&self) -> bool {
        self.current.is_stalemate()
    }

    /// Whether the position has insufficient material for either side to
    /// force checkmate.
    pub fn is_insufficient_material(&self) -> bool {
        self.current.is_insufficient_material()
    }

    fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_fifty_moves()
            || self.is_repetition(3)
    }

    pub fn is_fifty_moves(&self) -> bool {
        self.current.halfmoves() >= 100
    }

    /// Whether the current position (board placement and side to move) has
    /// occurred at least `count` times across this board's history,
    /// including the current occurrence.
    pub fn is_repetition(&self, count: usize) -> bool {
        let key = (self.current.board().clone(), self.current.turn());
        let mut occurrences = 1;
        for past in &self.history {
            if (past.board().clone(), past.turn()) == key {
                occurrences += 1;
                if occurrences >= count {
                    return true;
                }
            }
        }
        false
    }

    /// The piece occupying `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.current.board().piece_at(square)
    }

    /// Bitboard of all squares occupied by `role` pieces of `color`.
    pub fn pieces(&self, role: Role, color: Color) -> Bitboard {
        self.current.board().by_piece(Piece { color, role })
    }

    /// The square `color`'s king occupies.
    pub fn king(&self, color: Color) -> Square {
        self.current
            .board()
            .king_of(color)
            .expect("every legal chess position has both kings on the board")
    }

    /// The attack set of whatever piece occupies `square` (empty if the
    /// square is empty).
    pub fn attacks(&self, square: Square) -> Bitboard {
        let Some(piece) = self.piece_at(square) else {
            return Bitboard::EMPTY;
        };
        let occupied = self.current.board().occupied();
        match piece.role {
            Role::Pawn => shakmaty::attacks::pawn_attacks(piece.color, square),
            Role::Knight => shakmaty::attacks::knight_attacks(square),
            Role::Bishop => shakmaty::attacks::bishop_attacks(square, occupied),
            Role::Rook => shakmaty::attacks::rook_attacks(square, occupied),
            Role::Queen => shakmaty::attacks::queen_attacks(square, occupied),
            Role::King => shakmaty::attacks::king_attacks(square),
        }
    }
}
