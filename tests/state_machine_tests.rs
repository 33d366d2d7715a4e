//! Phase transition tests for GameStateMachine.

mod common;

use common::{cell, finish_animation, machine, pixel};
use reversi_flow::core::{PlayerKind, Side};
use reversi_flow::games::scripted::ScriptedEngineBuilder;
use reversi_flow::input::{DropReason, InputOutcome};
use reversi_flow::machine::GamePhase;
use reversi_flow::rules::Outcome;

// =============================================================================
// Init
// =============================================================================

#[test]
fn test_first_tick_leaves_init() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(2, 3)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);

    assert_eq!(machine.current_phase(), GamePhase::Init);
    let report = machine.tick().unwrap();

    assert!(report.redraw);
    assert_eq!(report.outcome, None);
    assert_eq!(machine.current_phase(), GamePhase::AwaitingMove);
}

#[test]
fn test_idle_human_turn_does_not_redraw() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(2, 3)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();

    for _ in 0..5 {
        let report = machine.tick().unwrap();
        assert!(!report.redraw);
        assert_eq!(machine.current_phase(), GamePhase::AwaitingMove);
    }
    assert_eq!(machine.engine().generate_calls(), 0);
}

// =============================================================================
// Pointer input
// =============================================================================

#[test]
fn test_pointer_at_grid_origin_plays_top_left() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(0, 0)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();

    let outcome = machine.pointer_down(8.0, 8.0).unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(outcome, InputOutcome::Accepted(cell(0, 0)));
    assert_eq!(machine.engine().history(), &[(Side::Black, cell(0, 0))]);
}

#[test]
fn test_pointer_outside_grid_rejected() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(7, 7)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();

    let outcome = machine.pointer_down(400.0, 400.0).unwrap();

    assert!(!outcome.is_accepted());
    assert_eq!(outcome, InputOutcome::Dropped(DropReason::OutsideGrid));
    assert_eq!(machine.current_phase(), GamePhase::AwaitingMove);
    assert_eq!(machine.engine().apply_calls(), 0);
}

#[test]
fn test_pointer_on_engine_turn_dropped() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(0, 0)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::SearchEngine, PlayerKind::Human);

    // Still in Init: the engine has not moved yet.
    let outcome = machine.pointer_down(8.0, 8.0).unwrap();
    assert_eq!(outcome, InputOutcome::Dropped(DropReason::WrongPhase));

    machine.tick().unwrap();
    assert_eq!(machine.current_phase(), GamePhase::AwaitingMove);
    let outcome = machine.pointer_down(8.0, 8.0).unwrap();
    assert_eq!(outcome, InputOutcome::Dropped(DropReason::NotHumanTurn));
    assert_eq!(machine.engine().apply_calls(), 0);
}

#[test]
fn test_human_move_during_animation_is_ignored() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(0, 0)])
        .legal(Side::White, [cell(5, 5)])
        .flips(cell(0, 0), [cell(1, 0), cell(2, 0)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();
    machine.submit_move(cell(0, 0)).unwrap();
    machine.tick().unwrap();
    machine.tick().unwrap();

    let cells_before = machine.flipping_cells().to_vec();
    let countdown_before = machine.animator().countdown();

    let (px, py) = pixel(cell(5, 5));
    let outcome = machine.pointer_down(px, py).unwrap();

    assert_eq!(outcome, InputOutcome::Dropped(DropReason::WrongPhase));
    assert_eq!(machine.current_phase(), GamePhase::Animating);
    assert_eq!(machine.flipping_cells(), cells_before.as_slice());
    assert_eq!(machine.animator().countdown(), countdown_before);
    assert_eq!(machine.engine().apply_calls(), 1);
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn test_animation_frames_through_machine() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(4, 1)])
        .legal(Side::White, [cell(0, 7)])
        .flips(cell(4, 1), [cell(4, 2), cell(4, 3), cell(4, 4)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();
    machine.submit_move(cell(4, 1)).unwrap();

    assert_eq!(machine.animator().countdown(), 16);
    assert!(machine.is_first_half());
    assert_eq!(machine.scale(), 1.0);

    for _ in 0..8 {
        machine.tick().unwrap();
    }
    assert!(!machine.is_first_half());
    assert_eq!(machine.scale(), 0.0);

    for _ in 0..8 {
        machine.tick().unwrap();
    }
    assert!(machine.animator().is_finished());
    assert_eq!(machine.current_phase(), GamePhase::Animating);

    machine.tick().unwrap();
    assert_eq!(machine.current_phase(), GamePhase::AwaitingMove);
    assert!(machine.flipping_cells().is_empty());
}

#[test]
fn test_engine_reply_starts_in_completion_tick() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(0, 0), cell(1, 1)])
        .legal(Side::White, [cell(6, 6)])
        .flips(cell(6, 6), [cell(5, 5)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::SearchEngine);
    machine.tick().unwrap();
    machine.submit_move(cell(0, 0)).unwrap();

    finish_animation(&mut machine);

    assert_eq!(machine.current_phase(), GamePhase::Animating);
    assert_eq!(machine.animator().mover(), Some(Side::White));
    assert_eq!(machine.flipping_cells(), &[cell(5, 5)]);
    assert_eq!(machine.active_side(), Side::Black);
    assert_eq!(machine.engine().last_search_budget(), Some(20_000));
}

// =============================================================================
// Ended
// =============================================================================

#[test]
fn test_ticks_after_end_are_noops() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(3, 3)])
        .outcome(Outcome::Winner(Side::Black))
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();
    machine.submit_move(cell(3, 3)).unwrap();
    finish_animation(&mut machine);
    assert_eq!(machine.current_phase(), GamePhase::Ended);

    let apply_calls = machine.engine().apply_calls();
    let pass_calls = machine.engine().pass_calls();
    for _ in 0..50 {
        let report = machine.tick().unwrap();
        assert!(!report.redraw);
        assert_eq!(report.outcome, None);
    }

    assert_eq!(machine.current_phase(), GamePhase::Ended);
    assert_eq!(machine.engine().apply_calls(), apply_calls);
    assert_eq!(machine.engine().pass_calls(), pass_calls);
    assert_eq!(machine.engine().winner_calls(), 1);
    assert_eq!(machine.outcome(), Some(Outcome::Winner(Side::Black)));
}

#[test]
fn test_input_after_end_dropped() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(3, 3)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();
    machine.submit_move(cell(3, 3)).unwrap();
    finish_animation(&mut machine);

    let outcome = machine.pointer_down(8.0, 8.0).unwrap();
    assert_eq!(outcome, InputOutcome::Dropped(DropReason::WrongPhase));
}

// =============================================================================
// Restart
// =============================================================================

#[test]
fn test_restart_during_animation() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(0, 0)])
        .legal(Side::White, [cell(7, 7)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();
    machine.submit_move(cell(0, 0)).unwrap();
    machine.tick().unwrap();
    assert_eq!(machine.current_phase(), GamePhase::Animating);

    machine.restart(PlayerKind::Human, PlayerKind::SearchEngine);

    assert_eq!(machine.current_phase(), GamePhase::Init);
    assert!(machine.flipping_cells().is_empty());
    assert!(machine.animator().is_finished());
    assert_eq!(machine.assignment(Side::Black), PlayerKind::Human);
    assert_eq!(machine.assignment(Side::White), PlayerKind::SearchEngine);
    assert_eq!(machine.active_side(), Side::Black);
    assert_eq!(machine.moves_applied(), 0);
    assert!(machine.engine().history().is_empty());
}

#[test]
fn test_restart_after_end() {
    let engine = ScriptedEngineBuilder::new()
        .legal(Side::Black, [cell(3, 3)])
        .build(42);
    let mut machine = machine(engine, PlayerKind::Human, PlayerKind::Human);
    machine.tick().unwrap();
    machine.submit_move(cell(3, 3)).unwrap();
    finish_animation(&mut machine);
    assert_eq!(machine.current_phase(), GamePhase::Ended);

    machine.restart(PlayerKind::RandomEngine, PlayerKind::Human);

    assert_eq!(machine.current_phase(), GamePhase::Init);
    assert_eq!(machine.outcome(), None);
    assert_eq!(machine.assignment(Side::Black), PlayerKind::RandomEngine);

    machine.tick().unwrap();
    machine.tick().unwrap();
    assert_eq!(machine.current_phase(), GamePhase::Animating);
    assert_eq!(machine.engine().history(), &[(Side::Black, cell(3, 3))]);
}
