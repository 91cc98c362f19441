//! Error types for the core.
//!
//! The core is otherwise infallible: feature evaluators and the positional
//! evaluator always return a plain `f64`. The one fallible seam is the board
//! adapter's `push`, which can be asked (by a misbehaving caller) to play a
//! move the underlying position rejects.

use std::fmt;

/// Errors surfaced at the board-adapter boundary.
#[derive(Debug)]
pub enum CoreError {
    /// The requested move is not legal in the current position.
    IllegalMove,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::IllegalMove => write!(f, "move is not legal in the current position"),
        }
    }
}

impl std::error::Error for CoreError {}
