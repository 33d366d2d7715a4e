//! # reversi-flow
//!
//! Turn, animation and end-of-game coordination for an 8x8 Reversi front
//! end.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: The board lives behind `MoveEngine`. The
//!    coordinator only asks for legality, applies moves and reads results.
//!
//! 2. **Renderer-Agnostic**: Renderers query phase, flip cells and scale;
//!    they never mutate state.
//!
//! 3. **One Owner Per Thing**: The state machine owns the engine, the
//!    animator owns the flip batch. Every mutation goes through `&mut self`.
//!
//! ## Architecture
//!
//! - **Tick-driven**: A host timer calls `GameStateMachine::tick()`; the
//!   machine advances phases, animation frames and engine turns from there.
//!
//! - **One move path**: Human clicks and engine-generated moves run through
//!   the same apply step, so animation and the pass rule do not care where a
//!   move came from.
//!
//! ## Modules
//!
//! - `core`: Sides, player kinds, cells, configuration
//! - `rules`: `MoveEngine` contract and game outcome
//! - `animation`: Flip animation controller
//! - `turn`: Active side tracking and engine move requests
//! - `input`: Pixel to cell mapping
//! - `machine`: Phase state machine
//! - `render`: Read-only sprite geometry for renderers
//! - `session`: Headless runner
//! - `games`: Bundled engines (scripted test engine)

pub mod core;
pub mod error;
pub mod rules;
pub mod animation;
pub mod turn;
pub mod input;
pub mod machine;
pub mod render;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Cell, FlipSet, Side, SideMap, PlayerKind,
    FlowConfig, ConfigError,
};

pub use crate::error::FlowError;

pub use crate::rules::{MoveEngine, Outcome};

pub use crate::animation::FlipAnimator;

pub use crate::turn::{EngineMove, TurnCoordinator};

pub use crate::input::{DropReason, InputMapper, InputOutcome};

pub use crate::machine::{GamePhase, GameStateMachine, TickReport};

pub use crate::render::FlipSprite;

pub use crate::session::{SeriesTally, SessionSummary};
