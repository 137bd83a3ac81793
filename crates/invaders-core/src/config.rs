//! Level configuration.
//!
//! A level describes the formation grid, its firing cadence and speed, and
//! optional per-cell overrides for pre-damaged or pre-removed units. Levels
//! load from JSON; missing fields take their level-one defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::SHOOTING_VARIANCE;

/// Errors raised while loading a level.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid level: {0}")]
    Invalid(String),
}

/// Starting state for one formation cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOverride {
    pub column: usize,
    pub row: usize,
    /// Starting HP. Zero means the unit starts destroyed.
    pub hp: i32,
}

/// Everything needed to build one level's hostiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Level number; also selects the attack pattern.
    pub level: u32,
    /// Columns in the formation.
    pub formation_width: usize,
    /// Rows in the formation.
    pub formation_height: usize,
    /// Mean time between idle shots (ms).
    pub shooting_frequency_ms: u64,
    /// Jitter around the mean. Defaults to a fixed fraction of the frequency.
    pub shooting_variance_ms: Option<u64>,
    /// Movement threshold at full strength (frames between steps, before the floor).
    pub base_speed: i32,
    pub overrides: Vec<CellOverride>,
    /// Whether the level also fields a boss.
    pub boss: bool,
    /// RNG seed for this level. Falls back to the engine's seed.
    pub seed: Option<u64>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::for_level(1)
    }
}

impl LevelConfig {
    /// Built-in settings for a level number. Levels past the table reuse its last row.
    pub fn for_level(level: u32) -> Self {
        // (width, height, base speed, shooting frequency ms)
        let (formation_width, formation_height, base_speed, shooting_frequency_ms) = match level {
            0 | 1 => (5, 4, 60, 2000),
            2 => (5, 5, 50, 2500),
            3 => (6, 5, 40, 1500),
            4 => (6, 6, 30, 1500),
            5 => (7, 6, 20, 1000),
            6 => (7, 7, 10, 1000),
            _ => (8, 7, 2, 500),
        };
        Self {
            level,
            formation_width,
            formation_height,
            shooting_frequency_ms,
            shooting_variance_ms: None,
            base_speed,
            overrides: Vec::new(),
            boss: false,
            seed: None,
        }
    }

    /// Effective shooting variance (ms).
    pub fn shooting_variance(&self) -> u64 {
        self.shooting_variance_ms
            .unwrap_or((self.shooting_frequency_ms as f64 * SHOOTING_VARIANCE) as u64)
    }

    /// Reject levels the simulation cannot run. Out-of-range overrides are
    /// not an error; the formation skips them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.formation_width == 0 || self.formation_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "formation must be at least 1x1, got {}x{}",
                self.formation_width, self.formation_height
            )));
        }
        if self.shooting_frequency_ms == 0 {
            return Err(ConfigError::Invalid(
                "shooting frequency must be positive".into(),
            ));
        }
        if self.base_speed < 0 {
            return Err(ConfigError::Invalid(format!(
                "base speed must not be negative, got {}",
                self.base_speed
            )));
        }
        Ok(())
    }

    /// Parse and validate a level from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a level file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
