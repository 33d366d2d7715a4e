//! Tick-driven game state machine.
//!
//! `GameStateMachine` is the single application context: it owns the move
//! engine, the turn coordinator, the flip animator and the input mapper.
//! Hosts call `tick()` from their frame timer, `pointer_down()` from their
//! input handler and `restart()` from their "new game" control, all on one
//! thread. Every entry point takes `&mut self`, so a tick can never overlap
//! an input event or a restart.

use tracing::{debug, error, info};

use crate::animation::FlipAnimator;
use crate::core::{Cell, ConfigError, FlowConfig, PlayerKind, Side, SideMap};
use crate::error::FlowError;
use crate::input::{DropReason, InputMapper, InputOutcome};
use crate::rules::{MoveEngine, Outcome};
use crate::turn::TurnCoordinator;

use super::phase::GamePhase;

/// What the host should do after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The board changed or a frame advanced; redraw it.
    pub redraw: bool,
    /// Set on the one tick where the game ends.
    pub outcome: Option<Outcome>,
}

impl TickReport {
    fn idle() -> Self {
        Self::default()
    }

    fn redraw() -> Self {
        Self {
            redraw: true,
            outcome: None,
        }
    }
}

/// Result of running a move through the shared apply path.
enum Applied {
    Accepted,
    WrongPhase,
    Illegal,
}

/// Phase owner and driver for one Reversi game at a time.
pub struct GameStateMachine<E: MoveEngine> {
    /// Board, legality and move generation.
    engine: E,

    /// Validated configuration.
    config: FlowConfig,

    /// Current phase.
    phase: GamePhase,

    /// Active side and player assignments.
    turns: TurnCoordinator,

    /// Flip batch of the last move.
    animator: FlipAnimator,

    /// Pointer to cell mapping.
    mapper: InputMapper,

    /// Cached result, computed once when the game ends.
    outcome: Option<Outcome>,

    /// Set after an engine failure; cleared by restart.
    halted: bool,

    /// Moves applied since the last restart.
    moves_applied: u32,
}

impl<E: MoveEngine> GameStateMachine<E> {
    /// Create a machine and start the first game with the configured
    /// assignments.
    pub fn new(engine: E, config: FlowConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let assignments = config.assignments();
        let mut machine = Self {
            engine,
            phase: GamePhase::Init,
            turns: TurnCoordinator::new(assignments, config.search_budget),
            animator: FlipAnimator::new(config.animation_frames),
            mapper: InputMapper::from_config(&config),
            outcome: None,
            halted: false,
            moves_applied: 0,
            config,
        };
        machine.restart(assignments[Side::Black], assignments[Side::White]);
        Ok(machine)
    }

    /// Start a new game with fresh assignments.
    ///
    /// Releases any flip batch, resets the engine's board and returns to
    /// `Init` in one step, whatever the current phase.
    pub fn restart(&mut self, black: PlayerKind, white: PlayerKind) {
        self.animator.reset();
        self.engine.reset();
        self.turns.assign(SideMap::new(black, white));
        self.turns.sync_with(&self.engine);
        self.outcome = None;
        self.halted = false;
        self.moves_applied = 0;
        self.phase = GamePhase::Init;

        info!(%black, %white, "game restarted");
    }

    /// Advance the game by one frame.
    ///
    /// ## Behavior
    ///
    /// - `Ended` (or halted): nothing happens
    /// - `Init`: request the first draw and move to `AwaitingMove`
    /// - `Animating`: when the animation has finished, release it, return to
    ///   `AwaitingMove` and apply the pass rule; then advance one frame
    /// - `AwaitingMove` with an engine-driven side: generate and apply its
    ///   move, starting the next animation
    ///
    /// An engine failure halts the game and is returned once.
    pub fn tick(&mut self) -> Result<TickReport, FlowError> {
        if self.halted {
            return Ok(TickReport::idle());
        }

        let mut report = match self.phase {
            GamePhase::Ended => return Ok(TickReport::idle()),
            GamePhase::Init => {
                self.phase = GamePhase::AwaitingMove;
                info!(side = %self.turns.active_side(), "game started");
                return Ok(TickReport::redraw());
            }
            GamePhase::Animating => {
                let mut report = TickReport::redraw();
                if self.animator.is_finished() {
                    report.outcome = self.finish_animation();
                }
                self.animator.step();
                report
            }
            GamePhase::AwaitingMove => TickReport::idle(),
        };

        if self.play_engine_turn()? {
            report.redraw = true;
        }
        Ok(report)
    }

    /// Handle a pointer-down at device pixel `(px, py)`.
    ///
    /// The event becomes a move only while the game awaits a move from a
    /// human side and the pixel lies on the grid; everything else is dropped
    /// without changing any state.
    pub fn pointer_down(&mut self, px: f64, py: f64) -> Result<InputOutcome, FlowError> {
        if self.halted {
            return Ok(InputOutcome::Dropped(DropReason::Halted));
        }

        match self
            .mapper
            .dispatch(self.phase, self.turns.is_human_turn(), px, py)
        {
            Ok(cell) => self.submit_move(cell),
            Err(reason) => {
                debug!(?reason, px, py, "pointer event dropped");
                Ok(InputOutcome::Dropped(reason))
            }
        }
    }

    /// Submit a human move by cell, skipping pixel mapping.
    ///
    /// Same gating as `pointer_down`.
    pub fn submit_move(&mut self, cell: Cell) -> Result<InputOutcome, FlowError> {
        if self.halted {
            return Ok(InputOutcome::Dropped(DropReason::Halted));
        }
        if self.phase != GamePhase::AwaitingMove {
            return Ok(InputOutcome::Dropped(DropReason::WrongPhase));
        }
        if !self.turns.is_human_turn() {
            return Ok(InputOutcome::Dropped(DropReason::NotHumanTurn));
        }

        let side = self.turns.active_side();
        let outcome = match self.apply_move(side, cell)? {
            Applied::Accepted => InputOutcome::Accepted(cell),
            Applied::WrongPhase => InputOutcome::Dropped(DropReason::WrongPhase),
            Applied::Illegal => InputOutcome::Dropped(DropReason::IllegalMove),
        };
        if !outcome.is_accepted() {
            debug!(?outcome, %side, %cell, "human move dropped");
        }
        Ok(outcome)
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn current_phase(&self) -> GamePhase {
        self.phase
    }

    /// Side whose turn it is (mirrors the engine).
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.turns.active_side()
    }

    /// Player kind controlling `side` in this game.
    #[must_use]
    pub fn assignment(&self, side: Side) -> PlayerKind {
        self.turns.assignment(side)
    }

    /// Result of the game, once it has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Cells currently flipping (empty unless animating).
    #[must_use]
    pub fn flipping_cells(&self) -> &[Cell] {
        self.animator.cells()
    }

    /// True while flipping disks show their pre-move colour.
    #[must_use]
    pub fn is_first_half(&self) -> bool {
        self.animator.is_first_half()
    }

    /// Vertical scale of flipping disks for this frame.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.animator.scale()
    }

    /// The flip animator, for renderers that need more than the shortcuts.
    #[must_use]
    pub fn animator(&self) -> &FlipAnimator {
        &self.animator
    }

    /// The input mapper (grid geometry).
    #[must_use]
    pub fn mapper(&self) -> &InputMapper {
        &self.mapper
    }

    /// The engine, for board occupancy queries.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The configuration this machine was built with.
    #[must_use]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// True after an engine failure, until the next restart.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Moves applied since the last restart.
    #[must_use]
    pub fn moves_applied(&self) -> u32 {
        self.moves_applied
    }

    // === Transitions ===

    /// Release the finished animation, return to `AwaitingMove` and apply
    /// the pass rule. Returns the outcome if the game ended.
    fn finish_animation(&mut self) -> Option<Outcome> {
        self.animator.reset();
        self.phase = GamePhase::AwaitingMove;
        self.turns.sync_with(&self.engine);

        let side = self.turns.active_side();
        if self.engine.has_legal_moves(side) {
            return None;
        }

        self.engine.pass_turn();
        self.turns.sync_with(&self.engine);
        let next = self.turns.active_side();
        info!(%side, %next, "no legal moves, turn passed");

        if self.engine.has_legal_moves(next) {
            return None;
        }

        let outcome = self.engine.winner();
        self.phase = GamePhase::Ended;
        self.outcome = Some(outcome);
        info!(%outcome, moves = self.moves_applied, "game over");
        Some(outcome)
    }

    /// Generate and apply a move for an engine-driven active side.
    ///
    /// Returns whether a move was applied.
    fn play_engine_turn(&mut self) -> Result<bool, FlowError> {
        let requested = match self.turns.request_move(self.phase, &mut self.engine) {
            Ok(requested) => requested,
            Err(err) => return Err(self.halt(err)),
        };
        let Some(mv) = requested else {
            return Ok(false);
        };

        match self.apply_move(mv.side, mv.cell)? {
            Applied::Accepted => Ok(true),
            Applied::WrongPhase => Ok(false),
            Applied::Illegal => Err(self.halt(FlowError::IllegalGeneratedMove {
                side: mv.side,
                kind: mv.kind,
                cell: mv.cell,
            })),
        }
    }

    /// Shared apply path for human and engine moves.
    fn apply_move(&mut self, side: Side, cell: Cell) -> Result<Applied, FlowError> {
        if self.phase != GamePhase::AwaitingMove {
            return Ok(Applied::WrongPhase);
        }
        if !self.engine.is_legal_move(side, cell) {
            return Ok(Applied::Illegal);
        }

        let flipped = self.engine.apply_move(side, cell);
        self.turns.sync_with(&self.engine);
        if flipped.is_empty() {
            return Err(self.halt(FlowError::EmptyFlipSet { side, cell }));
        }

        debug!(%side, %cell, flipped = flipped.len(), "move applied");
        self.moves_applied += 1;
        self.animator.start(side, flipped);
        self.phase = GamePhase::Animating;
        Ok(Applied::Accepted)
    }

    fn halt(&mut self, err: FlowError) -> FlowError {
        error!(error = %err, phase = %self.phase, "engine failure, game halted");
        self.halted = true;
        err
    }
}
