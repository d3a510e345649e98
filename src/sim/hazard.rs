//! Incoming colored hazards
//!
//! A hazard carries a continuous approach angle and a color. The angle picks
//! the lane (and so the player side) it travels down; it moves inward at a
//! constant speed until it is resolved against the player or leaves the arena.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Hsv;
use super::player::Side;
use crate::consts::QUARTER_TURN_DEG;
use crate::wrap_degrees;

/// Map a hazard approach angle (degrees) to the player side it strikes
///
/// Approach angles and player facing turn in opposite conventions:
///
/// | angle      | quadrant | side  |
/// |------------|----------|-------|
/// | [0, 90)    | 0        | South |
/// | [90, 180)  | 1        | East  |
/// | [180, 270) | 2        | North |
/// | [270, 360) | 3        | West  |
pub fn dir_to_facing(angle: f32) -> Side {
    const MAP: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];
    let quadrant = (wrap_degrees(angle) / QUARTER_TURN_DEG) as usize;
    MAP[quadrant.min(MAP.len() - 1)]
}

/// An approaching hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    /// Approach angle in degrees [0, 360)
    pub angle: f32,
    pub color: Hsv,
    /// Signed distance from the player center along the lane
    /// (negative once it has passed through the center)
    pub distance: f32,
    /// Travel speed toward the player, units per second
    pub speed: f32,
    pub radius: f32,
    /// Distance before the most recent `advance`
    pub prev_distance: f32,
    /// Crossed an empty side; no longer collides
    #[serde(default)]
    pub passed: bool,
}

impl Hazard {
    pub fn new(id: u32, angle: f32, color: Hsv, distance: f32, speed: f32, radius: f32) -> Self {
        Self {
            id,
            angle: wrap_degrees(angle),
            color,
            distance,
            speed,
            radius,
            prev_distance: distance,
            passed: false,
        }
    }

    /// Player side this hazard strikes
    pub fn side(&self) -> Side {
        dir_to_facing(self.angle)
    }

    /// World position given the player center
    pub fn position(&self, center: Vec2) -> Vec2 {
        center + self.side().outward() * self.distance
    }

    /// Move along the lane
    pub fn advance(&mut self, dt: f32) {
        self.prev_distance = self.distance;
        self.distance -= self.speed * dt;
    }

    /// Lane interval covered by the most recent `advance`, as (near, far)
    pub fn swept(&self) -> (f32, f32) {
        if self.prev_distance <= self.distance {
            (self.prev_distance, self.distance)
        } else {
            (self.distance, self.prev_distance)
        }
    }
}
