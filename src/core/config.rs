//! Front-end configuration.
//!
//! `FlowConfig` gathers the fixed constants the coordinator needs:
//! - Animation length (frames per flip)
//! - Board geometry in device pixels (grid origin, cell size, disk radius)
//! - Search effort handed to the engine
//! - Default player assignments for the first game
//!
//! Hosts usually start from `FlowConfig::default()` and adjust with the
//! `with_*` methods, or load a JSON document with `FlowConfig::from_json`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerKind;
use super::side::{Side, SideMap};

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Animation frame count must be even and positive, got {0}")]
    AnimationFrames(u32),
    #[error("Grid origin must be a finite pixel offset, got {0}")]
    GridOrigin(f64),
    #[error("Cell size must be a positive number of pixels, got {0}")]
    CellSize(f64),
    #[error("Disk radius ratio must be within (0, 0.5], got {0}")]
    DiskRadius(f64),
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Coordinator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Frames in one flip animation (default: 16).
    /// Must be even so the animation splits into two equal halves.
    pub animation_frames: u32,

    /// Pixel offset of the grid's top-left corner (default: 8.0).
    pub grid_origin: f64,

    /// Pixel size of one cell (default: 45.0).
    pub cell_size: f64,

    /// Disk radius as a fraction of the cell size (default: 0.45).
    pub disk_radius_ratio: f64,

    /// Effort passed to the engine's search generator (default: 20000).
    pub search_budget: u32,

    /// Period the host should tick at, in milliseconds (default: 10).
    ///
    /// The machine never reads this; it is carried so a host can set up its
    /// frame timer from the same document. Animation speed is measured in
    /// ticks, not time.
    pub tick_interval_ms: u64,

    /// Assignment used for Black until the first restart.
    pub black: PlayerKind,

    /// Assignment used for White until the first restart.
    pub white: PlayerKind,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            animation_frames: 16,
            grid_origin: 8.0,
            cell_size: 45.0,
            disk_radius_ratio: 0.45,
            search_budget: 20_000,
            tick_interval_ms: 10,
            black: PlayerKind::Human,
            white: PlayerKind::SearchEngine,
        }
    }
}

impl FlowConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FlowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_frames == 0 || self.animation_frames % 2 != 0 {
            return Err(ConfigError::AnimationFrames(self.animation_frames));
        }
        if !self.grid_origin.is_finite() {
            return Err(ConfigError::GridOrigin(self.grid_origin));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.disk_radius_ratio > 0.0 && self.disk_radius_ratio <= 0.5) {
            return Err(ConfigError::DiskRadius(self.disk_radius_ratio));
        }
        Ok(())
    }

    /// Default assignments as a per-side map.
    #[must_use]
    pub fn assignments(&self) -> SideMap<PlayerKind> {
        SideMap::new(self.black, self.white)
    }

    /// Set the animation length.
    #[must_use]
    pub fn with_animation_frames(mut self, frames: u32) -> Self {
        self.animation_frames = frames;
        self
    }

    /// Set the grid geometry.
    #[must_use]
    pub fn with_grid(mut self, origin: f64, cell_size: f64) -> Self {
        self.grid_origin = origin;
        self.cell_size = cell_size;
        self
    }

    /// Set the search effort.
    #[must_use]
    pub fn with_search_budget(mut self, budget: u32) -> Self {
        self.search_budget = budget;
        self
    }

    /// Set the assignment for one side.
    #[must_use]
    pub fn with_player(mut self, side: Side, kind: PlayerKind) -> Self {
        match side {
            Side::Black => self.black = kind,
            Side::White => self.white = kind,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlowConfig::default();
        assert_eq!(config.animation_frames, 16);
        assert_eq!(config.grid_origin, 8.0);
        assert_eq!(config.cell_size, 45.0);
        assert_eq!(config.search_budget, 20_000);
        assert_eq!(config.black, PlayerKind::Human);
        assert_eq!(config.white, PlayerKind::SearchEngine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FlowConfig::default()
            .with_animation_frames(8)
            .with_grid(0.0, 10.0)
            .with_search_budget(100)
            .with_player(Side::Black, PlayerKind::RandomEngine);

        assert_eq!(config.animation_frames, 8);
        assert_eq!(config.cell_size, 10.0);
        assert_eq!(config.search_budget, 100);
        assert_eq!(config.assignments()[Side::Black], PlayerKind::RandomEngine);
    }

    #[test]
    fn test_validate_rejects_odd_frames() {
        let config = FlowConfig::default().with_animation_frames(15);
        assert!(matches!(config.validate(), Err(ConfigError::AnimationFrames(15))));

        let config = FlowConfig::default().with_animation_frames(0);
        assert!(matches!(config.validate(), Err(ConfigError::AnimationFrames(0))));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let config = FlowConfig::default().with_grid(8.0, 0.0);
        assert!(matches!(config.validate(), Err(ConfigError::CellSize(_))));

        let config = FlowConfig {
            disk_radius_ratio: 0.75,
            ..FlowConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DiskRadius(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite_origin() {
        for origin in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = FlowConfig::default().with_grid(origin, 45.0);
            assert!(matches!(config.validate(), Err(ConfigError::GridOrigin(_))));
        }
        assert!(FlowConfig::default().with_grid(-20.0, 45.0).validate().is_ok());
    }

    #[test]
    fn test_tick_interval_is_not_validated() {
        let config = FlowConfig::from_json(r#"{ "tick_interval_ms": 33 }"#).unwrap();
        assert_eq!(config.tick_interval_ms, 33);
        assert_eq!(config, FlowConfig { tick_interval_ms: 33, ..FlowConfig::default() });
    }

    #[test]
    fn test_from_json_partial() {
        let config = FlowConfig::from_json(r#"{ "animation_frames": 20, "black": "RandomEngine" }"#)
            .unwrap();
        assert_eq!(config.animation_frames, 20);
        assert_eq!(config.black, PlayerKind::RandomEngine);
        assert_eq!(config.cell_size, 45.0);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            FlowConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FlowConfig::from_json(r#"{ "animation_frames": 7 }"#),
            Err(ConfigError::AnimationFrames(7))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = FlowConfig::default().with_search_budget(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: FlowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
