//! Game phases.

use serde::{Deserialize, Serialize};

/// Coarse game phase owned by `GameStateMachine`.
///
/// ```text
/// Init -> AwaitingMove -> Animating -> AwaitingMove -> ...
///                                           `-> Ended (double pass)
/// ```
///
/// Only a restart leaves `Ended`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board reset; waiting for the first draw.
    #[default]
    Init,
    /// Waiting for the active side to move.
    AwaitingMove,
    /// Showing the flips of the last move.
    Animating,
    /// Neither side can move.
    Ended,
}

impl GamePhase {
    /// True once the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Ended)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Init => "init",
            GamePhase::AwaitingMove => "awaiting move",
            GamePhase::Animating => "animating",
            GamePhase::Ended => "ended",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ended_is_terminal() {
        assert!(GamePhase::Ended.is_terminal());
        for phase in [GamePhase::Init, GamePhase::AwaitingMove, GamePhase::Animating] {
            assert!(!phase.is_terminal());
        }
        assert_eq!(GamePhase::default(), GamePhase::Init);
        assert_eq!(GamePhase::AwaitingMove.to_string(), "awaiting move");
    }
}
