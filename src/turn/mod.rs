//! Turn coordination.
//!
//! `TurnCoordinator` mirrors the engine's active side, knows which player
//! kind controls each side, and asks the engine for moves on behalf of
//! engine-driven sides.

pub mod coordinator;

pub use coordinator::{EngineMove, TurnCoordinator};
