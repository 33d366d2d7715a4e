//! Headless game runner.
//!
//! Ticks a machine without a renderer, as fast as possible. Engine-driven
//! sides play themselves; a human side never receives input here, so a game
//! with a human side runs until the tick limit.

use tracing::{debug, info};

use crate::core::{PlayerKind, Side, SideMap};
use crate::error::FlowError;
use crate::machine::GameStateMachine;
use crate::rules::{MoveEngine, Outcome};

/// Summary of one headless game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Ticks spent.
    pub ticks: u32,
    /// Moves applied.
    pub moves: u32,
    /// Result, or `None` if the tick limit was hit first.
    pub outcome: Option<Outcome>,
}

/// Results of a series of headless games.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesTally {
    /// Games won per side.
    pub wins: SideMap<u32>,
    /// Drawn games.
    pub draws: u32,
    /// Games that hit the tick limit.
    pub unfinished: u32,
}

impl SeriesTally {
    /// Total games recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins[Side::Black] + self.wins[Side::White] + self.draws + self.unfinished
    }

    fn record(&mut self, outcome: Option<Outcome>) {
        match outcome {
            Some(Outcome::Winner(side)) => self.wins[side] += 1,
            Some(Outcome::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }
}

/// Tick `machine` until the game ends or `max_ticks` ticks have run.
///
/// Continues the game from whatever phase the machine is in. Engine
/// failures are returned as soon as they happen.
pub fn play_out<E: MoveEngine>(
    machine: &mut GameStateMachine<E>,
    max_ticks: u32,
) -> Result<SessionSummary, FlowError> {
    let start_moves = machine.moves_applied();
    let mut ticks = 0;

    while ticks < max_ticks && !machine.current_phase().is_terminal() {
        machine.tick()?;
        ticks += 1;
    }

    let summary = SessionSummary {
        ticks,
        moves: machine.moves_applied() - start_moves,
        outcome: machine.outcome(),
    };
    debug!(?summary, "session finished");
    Ok(summary)
}

/// Play `games` fresh games with the given assignments and tally results.
pub fn play_series<E: MoveEngine>(
    machine: &mut GameStateMachine<E>,
    black: PlayerKind,
    white: PlayerKind,
    games: u32,
    max_ticks: u32,
) -> Result<SeriesTally, FlowError> {
    let mut tally = SeriesTally::default();

    for _ in 0..games {
        machine.restart(black, white);
        let summary = play_out(machine, max_ticks)?;
        tally.record(summary.outcome);
    }

    info!(
        black_wins = tally.wins[Side::Black],
        white_wins = tally.wins[Side::White],
        draws = tally.draws,
        unfinished = tally.unfinished,
        "series finished"
    );
    Ok(tally)
}
