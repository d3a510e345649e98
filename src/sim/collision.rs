//! Color-match collision resolution
//!
//! Matching is by logical side, not rotated geometry: the stretch of lane a
//! hazard swept this frame decides *when* it meets the player, and the
//! player's color on the hazard's side decides the outcome. Testing the swept
//! interval keeps large frame steps from carrying a hazard across the body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Hsv;
use super::hazard::Hazard;
use super::player::Player;
use crate::Rect;

/// Result of a hazard striking a colored side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Colors equal: score
    Match,
    /// Colors differ: lose a life
    Mismatch,
}

/// Where a hazard stands relative to the player this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Not touching the player yet (or already passed through)
    Pending,
    /// Touching a side with no slot; the hazard keeps going
    PassThrough,
    /// Touching a colored side
    Hit(Outcome),
}

/// Compare a hazard color against the color on the side it strikes
///
/// Returns `None` for an empty side. Equality is exact.
pub fn classify(hazard_color: Hsv, side_color: Hsv) -> Option<Outcome> {
    if side_color.is_empty() {
        None
    } else if hazard_color == side_color {
        Some(Outcome::Match)
    } else {
        Some(Outcome::Mismatch)
    }
}

/// Did the hazard touch the player box at any point of its last move
///
/// Hazards ride the axis through the body center, so a circle touches the box
/// exactly when `|distance| <= dim / 2 + radius`.
pub fn reaches(player: &Player, hazard: &Hazard) -> bool {
    let reach = player.dim / 2.0 + hazard.radius;
    let (near, far) = hazard.swept();
    near <= reach && far >= -reach
}

/// Resolve one hazard against the player
pub fn resolve(player: &Player, hazard: &Hazard) -> Contact {
    if hazard.passed || !reaches(player, hazard) {
        return Contact::Pending;
    }
    match classify(hazard.color, player.col_on_side(hazard.side())) {
        Some(outcome) => Contact::Hit(outcome),
        None => Contact::PassThrough,
    }
}

/// Check if a hazard has left the arena
pub fn out_of_bounds(arena: &Rect, position: Vec2, radius: f32) -> bool {
    !arena.intersects_circle(position, radius)
}
