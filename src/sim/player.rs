//! The player avatar: a square body with up to four colored slots
//!
//! Slots sit on the North, East, South and West faces in the order they were
//! added. The player turns in quarter steps; turning shifts which slot faces
//! which side, and the incoming hazard on a side must match that slot.
//!
//! ```text
//!  |-o-|
//!  o x o
//!  |-o-|
//! ```

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::{ColorSampler, Hsv};
use crate::Rect;
use crate::consts::{QUARTER_TURN_DEG, SIDES};

/// Cardinal side, in player facing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; SIDES] = [Side::North, Side::East, Side::South, Side::West];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Side for any integer index, wrapped mod 4
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(SIDES as i32) as usize]
    }

    /// Side reached after one turn in the given direction
    pub fn turned(self, turn: Turn) -> Self {
        Self::from_index(self.index() as i32 + turn.sign())
    }

    /// Unit vector pointing out of this side (screen space, y down)
    pub fn outward(self) -> Vec2 {
        match self {
            Side::North => Vec2::new(0.0, -1.0),
            Side::East => Vec2::new(1.0, 0.0),
            Side::South => Vec2::new(0.0, 1.0),
            Side::West => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl Turn {
    pub fn sign(self) -> i32 {
        match self {
            Turn::Left => -1,
            Turn::Right => 1,
        }
    }
}

/// Rotation interpolation state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Idle,
    /// A quarter turn in flight, `progress` normalized to [0, 1]
    Turning { turn: Turn, progress: f32 },
}

impl Rotation {
    /// Start a turn unless one is already in flight
    pub fn request(self, turn: Turn) -> Self {
        match self {
            Rotation::Idle => Rotation::Turning {
                turn,
                progress: 0.0,
            },
            turning => turning,
        }
    }

    /// Advance by `dt`; returns the new state and the turn that completed, if any
    pub fn step(self, dt: f32, duration: f32) -> (Self, Option<Turn>) {
        match self {
            Rotation::Idle => (Rotation::Idle, None),
            Rotation::Turning { turn, progress } => {
                let progress = progress + dt / duration;
                if progress > 1.0 {
                    (Rotation::Idle, Some(turn))
                } else {
                    (Rotation::Turning { turn, progress }, None)
                }
            }
        }
    }

    pub fn is_turning(&self) -> bool {
        matches!(self, Rotation::Turning { .. })
    }

    /// Signed eased fraction of a quarter turn already travelled
    pub fn offset(&self) -> f32 {
        match *self {
            Rotation::Idle => 0.0,
            Rotation::Turning { turn, progress } => turn.sign() as f32 * easing(progress),
        }
    }
}

/// Ease-in-out curve for turns: f(x) = x²(x-2)²
///
/// Lowest-degree polynomial with f(0) = 0, f(1) = 1 and zero slope at both
/// ends, so a turn starts and stops at rest.
#[inline]
pub fn easing(x: f32) -> f32 {
    let d = x - 2.0;
    x * x * d * d
}

/// A colored collider on one face of the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub color: Hsv,
    /// Opacity in [0, 1]
    pub alpha: f32,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center of the body
    pub position: Vec2,
    /// Side length of the body
    pub dim: f32,
    pub score: u64,
    pub lives: u32,
    slots: Vec<Slot>,
    facing: Side,
    rotation: Rotation,
    rotate_duration: f32,
}

impl Player {
    pub fn new(position: Vec2, dim: f32, lives: u32, rotate_duration: f32) -> Self {
        Self {
            position,
            dim,
            score: 0,
            lives,
            slots: Vec::with_capacity(SIDES),
            facing: Side::North,
            rotation: Rotation::Idle,
            rotate_duration,
        }
    }

    /// Add a new slot on the next empty side, hue-shifted from the last one
    ///
    /// Returns the new slot index, or `None` when all sides are taken.
    pub fn add_slot<R: Rng>(&mut self, sampler: &ColorSampler, rng: &mut R) -> Option<usize> {
        if self.slots.len() >= SIDES {
            return None;
        }
        let prev = self.slots.last().map(|s| s.color.h);
        self.slots.push(Slot {
            color: sampler.sample(prev, rng),
            alpha: 1.0,
        });
        Some(self.slots.len() - 1)
    }

    /// Begin a quarter turn (ignored while already turning)
    pub fn rotate(&mut self, turn: Turn) {
        self.rotation = self.rotation.request(turn);
    }

    /// Advance the turn animation, committing the facing when it completes
    pub fn update(&mut self, dt: f32) {
        let (rotation, done) = self.rotation.step(dt, self.rotate_duration);
        self.rotation = rotation;
        if let Some(turn) = done {
            self.facing = self.facing.turned(turn);
        }
    }

    /// Visual rotation in degrees (clockwise, screen space)
    pub fn angle(&self) -> f32 {
        QUARTER_TURN_DEG * (self.facing.index() as f32 + self.rotation.offset())
    }

    /// Color currently presented on `side`, or `Hsv::EMPTY` if no slot is there
    pub fn col_on_side(&self, side: Side) -> Hsv {
        let slot = (side.index() as i32 - self.facing.index() as i32).rem_euclid(SIDES as i32);
        self.slots
            .get(slot as usize)
            .map(|s| s.color)
            .unwrap_or(Hsv::EMPTY)
    }

    /// Color of a slot by index; indices past the end read the last slot
    pub fn slot_color(&self, index: usize) -> Hsv {
        match self.slots.last() {
            None => Hsv::EMPTY,
            Some(last) => self.slots.get(index).unwrap_or(last).color,
        }
    }

    /// Color of a uniformly random slot
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Hsv {
        if self.slots.is_empty() {
            return Hsv::EMPTY;
        }
        self.slots[rng.random_range(0..self.slots.len())].color
    }

    /// Shift every slot hue by `factor` degrees
    pub fn cycle_hue(&mut self, factor: f32) {
        for slot in &mut self.slots {
            slot.color = slot.color.cycled(factor);
        }
    }

    pub fn set_alpha(&mut self, index: usize, alpha: f32) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Body bounding box, ignoring rotation
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.position, Vec2::splat(self.dim))
    }

    /// Unrotated slot center relative to the body center
    pub fn slot_offset(&self, index: usize) -> Vec2 {
        Side::from_index(index as i32).outward() * (self.dim / 3.0)
    }

    /// Side length of a slot square
    pub fn slot_dim(&self) -> f32 {
        self.dim / 3.0
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn facing(&self) -> Side {
        self.facing
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DURATION: f32 = 0.05;

    fn player_with_slots(n: usize) -> (Player, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(42);
        let sampler = ColorSampler::new(0.75, 0.95);
        let mut player = Player::new(Vec2::new(8.0, 8.0), 1.0, 3, DURATION);
        for _ in 0..n {
            player.add_slot(&sampler, &mut rng);
        }
        (player, rng)
    }

    /// Drive a pending turn to completion
    fn finish_turn(player: &mut Player) {
        for _ in 0..10 {
            player.update(DURATION / 4.0);
        }
        assert!(!player.rotation().is_turning());
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(easing(0.0), 0.0);
        assert_eq!(easing(1.0), 1.0);
        assert!((easing(0.5) - 0.5625).abs() < 1e-6);
    }

    #[test]
    fn test_add_slot_caps_at_four() {
        let (mut player, mut rng) = player_with_slots(4);
        let sampler = ColorSampler::new(0.75, 0.95);
        assert_eq!(player.num_slots(), 4);
        assert_eq!(player.add_slot(&sampler, &mut rng), None);
        assert_eq!(player.num_slots(), 4);
        assert!(player.slots().iter().all(|s| s.alpha == 1.0));
    }

    #[test]
    fn test_rotate_while_turning_is_ignored() {
        let (mut player, _) = player_with_slots(1);
        player.rotate(Turn::Right);
        player.update(DURATION * 0.25);
        player.rotate(Turn::Left);
        match player.rotation() {
            Rotation::Turning { turn, progress } => {
                assert_eq!(turn, Turn::Right);
                assert!((progress - 0.25).abs() < 1e-5);
            }
            Rotation::Idle => panic!("turn should still be in flight"),
        }
        finish_turn(&mut player);
        assert_eq!(player.facing(), Side::East);
    }

    #[test]
    fn test_facing_wraps_both_ways() {
        let (mut player, _) = player_with_slots(1);
        player.rotate(Turn::Left);
        finish_turn(&mut player);
        assert_eq!(player.facing(), Side::West);
        player.rotate(Turn::Right);
        finish_turn(&mut player);
        player.rotate(Turn::Right);
        finish_turn(&mut player);
        assert_eq!(player.facing(), Side::East);
    }

    #[test]
    fn test_facing_commits_only_past_one() {
        let (mut player, _) = player_with_slots(1);
        player.rotate(Turn::Right);
        player.update(DURATION);
        // progress is exactly 1.0, not past it
        assert!(player.rotation().is_turning());
        assert_eq!(player.facing(), Side::North);
        assert!((player.angle() - 90.0).abs() < 1e-4);
        player.update(DURATION * 0.1);
        assert_eq!(player.facing(), Side::East);
        assert_eq!(player.angle(), 90.0);
    }

    #[test]
    fn test_angle_mid_turn() {
        let (mut player, _) = player_with_slots(1);
        player.rotate(Turn::Left);
        player.update(DURATION * 0.5);
        assert!((player.angle() + 90.0 * 0.5625).abs() < 1e-3);
    }

    #[test]
    fn test_col_on_side_follows_facing() {
        let (mut player, _) = player_with_slots(2);
        let north = player.slot_color(0);
        let east = player.slot_color(1);
        assert_eq!(player.col_on_side(Side::North), north);
        assert_eq!(player.col_on_side(Side::East), east);
        assert!(player.col_on_side(Side::South).is_empty());
        assert!(player.col_on_side(Side::West).is_empty());

        player.rotate(Turn::Right);
        finish_turn(&mut player);
        assert_eq!(player.col_on_side(Side::East), north);
        assert_eq!(player.col_on_side(Side::South), east);
        assert!(player.col_on_side(Side::North).is_empty());
    }

    #[test]
    fn test_slot_color_clamps_to_last() {
        let (player, _) = player_with_slots(3);
        assert_eq!(player.slot_color(7), player.slot_color(2));
        let (empty, _) = player_with_slots(0);
        assert!(empty.slot_color(0).is_empty());
    }

    #[test]
    fn test_sample_returns_existing_color() {
        let (player, mut rng) = player_with_slots(3);
        for _ in 0..20 {
            let c = player.sample(&mut rng);
            assert!(player.slots().iter().any(|s| s.color == c));
        }
    }

    #[test]
    fn test_set_alpha_clamps_and_ignores_out_of_range() {
        let (mut player, _) = player_with_slots(2);
        player.set_alpha(0, 1.5);
        player.set_alpha(1, -0.5);
        player.set_alpha(9, 0.5);
        assert_eq!(player.slots()[0].alpha, 1.0);
        assert_eq!(player.slots()[1].alpha, 0.0);
    }

    #[test]
    fn test_cycle_hue_wraps() {
        let (mut player, _) = player_with_slots(2);
        let before: Vec<f32> = player.slots().iter().map(|s| s.color.h).collect();
        player.cycle_hue(360.0);
        for (slot, h) in player.slots().iter().zip(before) {
            assert!((0.0..360.0).contains(&slot.color.h));
            assert!((slot.color.h - h).abs() < 1e-3);
        }
    }

    #[test]
    fn test_bounds_ignore_rotation() {
        let (mut player, _) = player_with_slots(1);
        let before = player.bounds();
        player.rotate(Turn::Right);
        player.update(DURATION * 0.5);
        assert_eq!(player.bounds(), before);
        assert_eq!(before.min, Vec2::new(7.5, 7.5));
        assert_eq!(before.max, Vec2::new(8.5, 8.5));
    }

    #[test]
    fn test_slot_offsets() {
        let (player, _) = player_with_slots(0);
        let third = 1.0 / 3.0;
        assert_eq!(player.slot_offset(0), Vec2::new(0.0, -third));
        assert_eq!(player.slot_offset(1), Vec2::new(third, 0.0));
        assert_eq!(player.slot_offset(2), Vec2::new(0.0, third));
        assert_eq!(player.slot_offset(3), Vec2::new(-third, 0.0));
    }
}
