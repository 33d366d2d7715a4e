//! Who controls each side.

use serde::{Deserialize, Serialize};

/// The kind of player driving one side.
///
/// Fixed for the duration of a game; only a restart changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves come from pointer input.
    #[default]
    Human,
    /// Moves come from the engine's random generator.
    RandomEngine,
    /// Moves come from the engine's search generator.
    SearchEngine,
}

impl PlayerKind {
    /// True for the engine-driven kinds.
    #[must_use]
    pub const fn is_engine(self) -> bool {
        match self {
            PlayerKind::Human => false,
            PlayerKind::RandomEngine | PlayerKind::SearchEngine => true,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::RandomEngine => write!(f, "random engine"),
            PlayerKind::SearchEngine => write!(f, "search engine"),
        }
    }
}
