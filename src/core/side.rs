//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two competing players. `Black` always moves first.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for player assignments
//! and per-side engine bookkeeping.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a Reversi game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First mover.
    Black,
    /// Second mover.
    White,
}

impl Side {
    /// Both sides, in move order.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// Get the other side.
    ///
    /// ```
    /// use reversi_flow::core::Side;
    ///
    /// assert_eq!(Side::Black.opponent(), Side::White);
    /// assert_eq!(Side::White.opponent(), Side::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Get the slot index (0 for Black, 1 for White).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use reversi_flow::core::{Side, SideMap};
///
/// let mut disks: SideMap<u32> = SideMap::with_value(2);
/// disks[Side::Black] += 1;
///
/// assert_eq!(disks[Side::Black], 3);
/// assert_eq!(disks[Side::White], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap from explicit values.
    pub const fn new(black: T, white: T) -> Self {
        Self {
            data: [black, white],
        }
    }

    /// Create a new SideMap with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self::new(factory(Side::Black), factory(Side::White))
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in move order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
