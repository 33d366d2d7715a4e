//! Board cell identification.
//!
//! ## Cell Layout
//!
//! Cells are numbered row-major from the top-left corner:
//! - `index = y * 8 + x`
//! - `x`, `y` in `0..8`
//!
//! ```
//! use reversi_flow::core::Cell;
//!
//! let cell = Cell::from_xy(3, 2).unwrap();
//! assert_eq!(cell.index(), 19);
//! assert_eq!((cell.x(), cell.y()), (3, 2));
//!
//! assert!(Cell::from_xy(8, 0).is_none());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of cells along one edge of the board.
pub const BOARD_SIDE: u8 = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: u8 = BOARD_SIDE * BOARD_SIDE;

/// Cells whose disks were flipped by one move, in engine order.
///
/// A single Reversi move flips at most 18 disks, so the inline capacity
/// covers every real move without touching the heap.
pub type FlipSet = SmallVec<[Cell; 20]>;

/// A cell on the 8x8 board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from its row-major index.
    ///
    /// Returns `None` for indices outside `0..64`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a cell from column `x` and row `y`.
    ///
    /// Returns `None` if either coordinate is outside `0..8`.
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIDE && y < BOARD_SIDE {
            Some(Self(y * BOARD_SIDE + x))
        } else {
            None
        }
    }

    /// Get the row-major index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Get the column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.0 % BOARD_SIDE
    }

    /// Get the row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.0 / BOARD_SIDE
    }

    /// Iterate over every cell in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Board notation: column letter, 1-based row.
        write!(f, "{}{}", (b'a' + self.x()) as char, self.y() + 1)
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or(index)
    }
}
