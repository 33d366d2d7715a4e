//! Pointer input.
//!
//! `InputMapper` turns a pointer-down position into a board cell and drops
//! events that arrive at the wrong time or outside the grid.

pub mod mapper;

pub use mapper::{DropReason, InputMapper, InputOutcome};
