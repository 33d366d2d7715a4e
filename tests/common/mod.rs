//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use reversi_flow::core::{Cell, FlowConfig, PlayerKind, Side};
use reversi_flow::games::scripted::ScriptedEngine;
use reversi_flow::machine::{GamePhase, GameStateMachine};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging.
///
/// Idempotent. Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn cell(x: u8, y: u8) -> Cell {
    Cell::from_xy(x, y).unwrap()
}

/// Build a machine with explicit assignments and default geometry.
pub fn machine(
    engine: ScriptedEngine,
    black: PlayerKind,
    white: PlayerKind,
) -> GameStateMachine<ScriptedEngine> {
    init_logging();
    let config = FlowConfig::default()
        .with_player(Side::Black, black)
        .with_player(Side::White, white);
    GameStateMachine::new(engine, config).unwrap()
}

/// Tick until the current animation has finished and been released.
pub fn finish_animation(machine: &mut GameStateMachine<ScriptedEngine>) {
    assert_eq!(machine.current_phase(), GamePhase::Animating);
    let frames = machine.animator().total_frames();
    for _ in 0..=frames {
        machine.tick().unwrap();
    }
}

/// Pixel at the centre of `cell` with default geometry.
pub fn pixel(cell: Cell) -> (f64, f64) {
    let size = 45.0;
    let origin = 8.0;
    (
        origin + (f64::from(cell.x()) + 0.5) * size,
        origin + (f64::from(cell.y()) + 0.5) * size,
    )
}
