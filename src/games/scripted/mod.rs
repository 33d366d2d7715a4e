//! Scripted move engine for tests and headless runs.
//!
//! Not a Reversi board: each side gets a configured set of legal cells and
//! each cell a configured flip set. Enough to drive every coordinator path:
//! - Human and engine moves
//! - Single passes and double passes
//! - Generators that return nothing or an illegal cell
//!
//! Call counters let tests assert how often the coordinator hit the engine.

mod engine;

pub use engine::{ScriptedEngine, ScriptedEngineBuilder};
