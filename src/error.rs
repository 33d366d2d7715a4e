//! Engine failures surfaced by the coordinator.
//!
//! Bad clicks and illegal human moves are not errors; they are dropped
//! (see `InputOutcome`). Everything here means the engine broke its
//! contract, and the game halts until the next restart.

use thiserror::Error;

use crate::core::{Cell, PlayerKind, Side};

/// Fatal coordinator errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("{kind} produced no move for {side}")]
    NoMoveGenerated { side: Side, kind: PlayerKind },
    #[error("{kind} produced illegal move {cell} for {side}")]
    IllegalGeneratedMove {
        side: Side,
        kind: PlayerKind,
        cell: Cell,
    },
    #[error("Move {cell} for {side} flipped no disks")]
    EmptyFlipSet { side: Side, cell: Cell },
}

impl FlowError {
    /// Side whose turn failed.
    #[must_use]
    pub fn side(&self) -> Side {
        match self {
            FlowError::NoMoveGenerated { side, .. }
            | FlowError::IllegalGeneratedMove { side, .. }
            | FlowError::EmptyFlipSet { side, .. } => *side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cell = Cell::from_xy(2, 3).unwrap();
        let err = FlowError::IllegalGeneratedMove {
            side: Side::White,
            kind: PlayerKind::SearchEngine,
            cell,
        };
        assert_eq!(err.to_string(), "search engine produced illegal move c4 for White");
        assert_eq!(err.side(), Side::White);
    }
}
