//! Move engine trait for board implementations.
//!
//! Engines implement `MoveEngine` to own the board:
//! - Legality checks per side and cell
//! - Move application, reporting the flipped disks
//! - Turn hand-off, including forced passes
//! - Random and search move generation
//! - Winner detection

use serde::{Deserialize, Serialize};

use crate::core::{Cell, FlipSet, Side};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// One side holds more disks.
    Winner(Side),
    /// Equal disk counts.
    Draw,
}

impl Outcome {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        match self {
            Outcome::Winner(s) => *s == side,
            Outcome::Draw => false,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Move engine trait.
///
/// The coordinator calls these methods from its tick and input handlers.
/// All calls are synchronous; an expensive search is the engine's problem.
///
/// ## Implementation Notes
///
/// - `apply_move`: called only after `is_legal_move` returned true; must
///   hand the turn to the opponent before returning
/// - `pass_turn`: hand the turn to the opponent without moving
/// - `generate_*_move`: return `None` only if no move can be produced
/// - `winner`: the coordinator calls this once per game, after a double pass
pub trait MoveEngine {
    /// Re-initialise the board for a new game. Black moves first.
    fn reset(&mut self);

    /// Side whose turn it is.
    fn current_side(&self) -> Side;

    /// Check whether `side` may play at `cell`.
    fn is_legal_move(&self, side: Side, cell: Cell) -> bool;

    /// Check whether `side` has any legal move at all.
    fn has_legal_moves(&self, side: Side) -> bool;

    /// Play `cell` for `side` and return the flipped cells.
    fn apply_move(&mut self, side: Side, cell: Cell) -> FlipSet;

    /// Give the turn to the other side without a move.
    fn pass_turn(&mut self);

    /// Final result of the game.
    fn winner(&self) -> Outcome;

    /// Pick a uniformly random legal move for `side`.
    fn generate_random_move(&mut self, side: Side) -> Option<Cell>;

    /// Pick a move for `side` by search, spending roughly `budget` effort.
    fn generate_search_move(&mut self, side: Side, budget: u32) -> Option<Cell>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(Side::White);
        assert!(!result.is_winner(Side::Black));
        assert!(result.is_winner(Side::White));

        let draw = Outcome::Draw;
        assert!(!draw.is_winner(Side::Black));
        assert!(!draw.is_winner(Side::White));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Side::Black).to_string(), "Black wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
