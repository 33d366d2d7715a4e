//! Active side tracking and engine move requests.

use tracing::debug;

use crate::core::{Cell, PlayerKind, Side, SideMap};
use crate::error::FlowError;
use crate::machine::GamePhase;
use crate::rules::MoveEngine;

/// A move produced by the engine for an engine-driven side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineMove {
    /// Side the move is for.
    pub side: Side,
    /// Generator that produced it.
    pub kind: PlayerKind,
    /// Chosen cell (not yet checked for legality).
    pub cell: Cell,
}

/// Tracks whose turn it is and who controls each side.
///
/// The active side is a mirror of `MoveEngine::current_side`; call
/// `sync_with` after every engine call that may change the turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnCoordinator {
    assignments: SideMap<PlayerKind>,
    active: Side,
    search_budget: u32,
}

impl TurnCoordinator {
    /// Create a coordinator with fixed assignments. Black starts.
    pub fn new(assignments: SideMap<PlayerKind>, search_budget: u32) -> Self {
        Self {
            assignments,
            active: Side::Black,
            search_budget,
        }
    }

    /// Replace the assignments for a new game.
    pub fn assign(&mut self, assignments: SideMap<PlayerKind>) {
        self.assignments = assignments;
    }

    /// Copy the engine's current side.
    pub fn sync_with<E: MoveEngine>(&mut self, engine: &E) {
        self.active = engine.current_side();
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Player kind of the active side.
    #[must_use]
    pub fn active_kind(&self) -> PlayerKind {
        self.assignments[self.active]
    }

    /// Player kind of `side`.
    #[must_use]
    pub fn assignment(&self, side: Side) -> PlayerKind {
        self.assignments[side]
    }

    /// Both assignments.
    #[must_use]
    pub fn assignments(&self) -> &SideMap<PlayerKind> {
        &self.assignments
    }

    /// Effort passed to the search generator.
    #[must_use]
    pub fn search_budget(&self) -> u32 {
        self.search_budget
    }

    /// True when pointer input may move for the active side.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.active_kind() == PlayerKind::Human
    }

    /// Ask the engine for the active side's move.
    ///
    /// Returns `Ok(None)` without calling the engine when the phase is not
    /// `AwaitingMove` or the active side is human. A generator that yields
    /// nothing is an engine failure.
    pub fn request_move<E: MoveEngine>(
        &self,
        phase: GamePhase,
        engine: &mut E,
    ) -> Result<Option<EngineMove>, FlowError> {
        if phase != GamePhase::AwaitingMove {
            return Ok(None);
        }

        let side = self.active;
        let kind = self.active_kind();
        let generated = match kind {
            PlayerKind::Human => return Ok(None),
            PlayerKind::RandomEngine => engine.generate_random_move(side),
            PlayerKind::SearchEngine => engine.generate_search_move(side, self.search_budget),
        };

        match generated {
            Some(cell) => {
                debug!(%side, %kind, %cell, "engine move generated");
                Ok(Some(EngineMove { side, kind, cell }))
            }
            None => Err(FlowError::NoMoveGenerated { side, kind }),
        }
    }
}
