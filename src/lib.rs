//! Spin Match - A rotate-to-match reflex arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player, hazards, difficulty, substates)
//! - `renderer`: Drawable snapshot handed to an external render backend
//! - `audio`: Named cues handed to an external audio backend
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Fixed frame step used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frame step accepted by the host loop before clamping
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Number of cardinal sides (and maximum slots)
    pub const SIDES: usize = 4;
    /// Degrees turned per completed rotation
    pub const QUARTER_TURN_DEG: f32 = 90.0;
    /// Degrees in a full turn (hazard approach angles span [0, FULL_TURN_DEG))
    pub const FULL_TURN_DEG: f32 = 360.0;
    /// Full hue circle in degrees
    pub const HUE_CIRCLE: f32 = 360.0;

    /// Hue offset between consecutive slots, degrees [min, max)
    pub const HUE_STEP_MIN: f32 = 60.0;
    pub const HUE_STEP_MAX: f32 = 90.0;
}

/// Wrap a hue (or any angle in degrees) into [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::HUE_CIRCLE);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::HUE_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Axis-aligned rectangle (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if a circle overlaps the rectangle
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        closest.distance_squared(center) <= radius * radius
    }
}
