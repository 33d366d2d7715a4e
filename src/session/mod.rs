//! Headless play.
//!
//! Drives a `GameStateMachine` to completion without a renderer, for
//! engine-vs-engine games and integration tests.

pub mod runner;

pub use runner::{play_out, play_series, SeriesTally, SessionSummary};
