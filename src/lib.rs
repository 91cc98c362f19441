//! # Chess Move-Selection Engine
//!
//! Given a legal chess position, chooses a move to play. Two independent
//! search cores share one static evaluator:
//!
//! - Alpha-beta negamax with quiescence extension and MVV-LVA move
//!   ordering ([`search::alpha_beta`]).
//! - Monte-Carlo tree search with UCT selection and static-evaluator leaf
//!   values, no random playouts ([`search::mcts`]).
//!
//! The default evaluator is a phase-weighted positional composite of six
//! feature evaluators: material, piece mobility, pawn structure, king
//! safety, strategic bonuses, and piece-square tables (see [`eval`]).
//!
//! The chess rules themselves (legal move generation, check/checkmate/
//! stalemate detection, bitboard primitives) are not reimplemented here;
//! [`board::Board`] is a thin adapter over [`shakmaty`], an external rules
//! engine.

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod mcts;
pub mod search;
