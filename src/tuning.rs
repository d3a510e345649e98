//! Data-driven game balance
//!
//! All gameplay constants live here. Defaults are compiled in; a JSON file
//! can override any subset of them once at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of level thresholds (levels run 0..=LEVEL_THRESHOLDS)
pub const LEVEL_THRESHOLDS: usize = 6;
/// Number of distinct difficulty levels
pub const LEVEL_COUNT: usize = LEVEL_THRESHOLDS + 1;

/// Errors raised while loading tuning overrides
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gameplay tuning (immutable once a run starts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Elapsed play seconds at which each level ends (ascending)
    pub level_thresholds: [f32; LEVEL_THRESHOLDS],
    /// Seconds between hazard spawns, per level (descending)
    pub generation_intervals: [f32; LEVEL_COUNT],
    /// Spawn interval during even-level transitions
    pub burst_interval: f32,

    /// Saturation of generated slot colors
    pub saturation: f32,
    /// Value (brightness) of generated slot colors
    pub value: f32,
    /// Hue drift applied to every color, degrees per second
    pub hue_drift: f32,

    /// Seconds for one quarter turn
    pub rotate_duration: f32,
    /// Seconds a level transition lasts
    pub transition_length: f32,

    /// Side length of the square arena
    pub arena_size: f32,
    /// Side length of the player body
    pub player_dim: f32,
    /// Lives at the start of a run
    pub starting_lives: u32,

    /// Distance from player center at which hazards appear
    pub spawn_distance: f32,
    /// Hazard travel speed (units per second)
    pub hazard_speed: f32,
    /// Hazard collision radius
    pub hazard_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            level_thresholds: [20.0, 40.0, 60.0, 80.0, 100.0, 120.0],
            generation_intervals: [1.6, 1.4, 1.2, 1.0, 0.8, 0.65, 0.5],
            burst_interval: 0.25,

            saturation: 0.75,
            value: 0.95,
            hue_drift: 6.0,

            rotate_duration: 0.05,
            transition_length: 2.0,

            arena_size: 16.0,
            player_dim: 1.0,
            starting_lives: 3,

            spawn_distance: 7.5,
            hazard_speed: 4.0,
            hazard_radius: 0.15,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON (missing fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load tuning overrides from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning from an optional path, falling back to defaults on error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(tuning)) => tuning,
            Some(Err(e)) => {
                log::warn!("Using default tuning: {e}");
                Self::default()
            }
            None => Self::default(),
        }
    }
}
