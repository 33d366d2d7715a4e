//! Game state machine.
//!
//! ## Phases
//!
//! `Init -> AwaitingMove -> Animating -> AwaitingMove -> ... -> Ended`
//!
//! ## Driving
//!
//! - `tick()`: called by the host's frame timer
//! - `pointer_down()`: called by the host's input handler
//! - `restart()`: called by the host's new-game control
//!
//! Renderers read `current_phase()`, `flipping_cells()`, `is_first_half()`,
//! `scale()` and `engine()`; none of these mutate anything.

pub mod phase;
pub mod state_machine;

pub use phase::GamePhase;
pub use state_machine::{GameStateMachine, TickReport};
