//! Pixel to cell mapping for pointer input.

use serde::{Deserialize, Serialize};

use crate::core::{Cell, FlowConfig, BOARD_SIDE};
use crate::machine::GamePhase;

/// Why a pointer event did not become a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropReason {
    /// The game is not waiting for a move (initialising, animating, over).
    WrongPhase,
    /// The active side is engine-driven.
    NotHumanTurn,
    /// The pointer was outside the 8x8 grid.
    OutsideGrid,
    /// The engine rejected the cell.
    IllegalMove,
    /// The game halted after an engine failure.
    Halted,
}

/// Result of one pointer-down event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputOutcome {
    /// The move was applied and its animation started.
    Accepted(Cell),
    /// The event was ignored.
    Dropped(DropReason),
}

impl InputOutcome {
    /// True if the event became a move.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, InputOutcome::Accepted(_))
    }
}

/// Maps device pixels to board cells.
///
/// The grid's top-left corner sits at `(origin, origin)` and each cell is
/// `cell_size` pixels square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputMapper {
    origin: f64,
    cell_size: f64,
}

impl InputMapper {
    /// Create a mapper for the given grid geometry.
    pub fn new(origin: f64, cell_size: f64) -> Self {
        Self { origin, cell_size }
    }

    /// Create a mapper from a validated configuration.
    pub fn from_config(config: &FlowConfig) -> Self {
        Self::new(config.grid_origin, config.cell_size)
    }

    /// Map a pixel position to a cell, or `None` outside the grid.
    ///
    /// ```
    /// use reversi_flow::core::Cell;
    /// use reversi_flow::input::InputMapper;
    ///
    /// let mapper = InputMapper::new(8.0, 45.0);
    /// assert_eq!(mapper.cell_at(8.0, 8.0), Cell::from_xy(0, 0));
    /// assert_eq!(mapper.cell_at(400.0, 400.0), None);
    /// ```
    #[must_use]
    pub fn cell_at(&self, px: f64, py: f64) -> Option<Cell> {
        let x = self.axis(px)?;
        let y = self.axis(py)?;
        Cell::from_xy(x, y)
    }

    /// Gate a pointer-down event and map it to a cell.
    ///
    /// Events are only forwarded while the game awaits a move from a human
    /// side; the phase is checked before the side, and both before bounds.
    pub fn dispatch(
        &self,
        phase: GamePhase,
        human_turn: bool,
        px: f64,
        py: f64,
    ) -> Result<Cell, DropReason> {
        if phase != GamePhase::AwaitingMove {
            return Err(DropReason::WrongPhase);
        }
        if !human_turn {
            return Err(DropReason::NotHumanTurn);
        }
        self.cell_at(px, py).ok_or(DropReason::OutsideGrid)
    }

    /// Pixel position of a cell's top-left corner.
    #[must_use]
    pub fn cell_origin(&self, cell: Cell) -> (f64, f64) {
        (
            self.origin + f64::from(cell.x()) * self.cell_size,
            self.origin + f64::from(cell.y()) * self.cell_size,
        )
    }

    /// Pixel position of a cell's centre.
    #[must_use]
    pub fn cell_center(&self, cell: Cell) -> (f64, f64) {
        let (x, y) = self.cell_origin(cell);
        let half = self.cell_size / 2.0;
        (x + half, y + half)
    }

    /// Pixel size of one cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn axis(&self, pixel: f64) -> Option<u8> {
        let index = ((pixel - self.origin) / self.cell_size).floor();
        // NaN fails both comparisons.
        if index >= 0.0 && index < f64::from(BOARD_SIDE) {
            Some(index as u8)
        } else {
            None
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::from_config(&FlowConfig::default())
    }
}
