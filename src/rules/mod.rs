//! Move engine contract.
//!
//! The board itself lives behind `MoveEngine`:
//! - Which moves are legal for each side
//! - How a move changes the board (and which disks it flips)
//! - Move generation for engine-driven sides
//! - Who won
//!
//! The coordinator calls into `MoveEngine` but never looks at the board.

pub mod engine;

pub use engine::{MoveEngine, Outcome};
