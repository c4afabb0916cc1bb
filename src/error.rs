use thiserror::Error;

use crate::simulation::{Bounds, Position};

/// All the ways a call into the automaton core can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The rule name does not match any known rule.
    #[error("unknown rule: {0:?}")]
    UnknownRule(String),

    /// A position outside `[0, max_x] x [0, max_y]` was read or written.
    #[error("position {position:?} is outside the torus bounds {bounds:?}")]
    OutOfBounds { position: Position, bounds: Bounds },

    /// A picture row has a different length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
