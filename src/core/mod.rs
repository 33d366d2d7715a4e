//! Core types: sides, player kinds, cells, configuration.
//!
//! Everything here is plain data shared by the coordinator, the engine
//! contract, and the renderer helpers.

pub mod side;
pub mod player;
pub mod cell;
pub mod config;

pub use side::{Side, SideMap};
pub use player::PlayerKind;
pub use cell::{Cell, FlipSet, BOARD_SIDE, CELL_COUNT};
pub use config::{ConfigError, FlowConfig};
