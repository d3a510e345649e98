//! HSV colors and the slot color generator

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{HUE_CIRCLE, HUE_STEP_MAX, HUE_STEP_MIN};
use crate::wrap_degrees;

/// A color in hue/saturation/value space
///
/// Compared with exact equality: every gameplay color comes from the same
/// generator and is only ever shifted by shared hue offsets, so two colors
/// that should match are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees [0, 360)
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// "No collider" sentinel (black)
    pub const EMPTY: Hsv = Hsv {
        h: 0.0,
        s: 0.0,
        v: 0.0,
    };

    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Same color with the hue shifted by `factor` degrees
    pub fn cycled(self, factor: f32) -> Self {
        Self {
            h: wrap_degrees(self.h + factor),
            ..self
        }
    }

    /// Convert to linear RGB in [0, 1]
    pub fn to_rgb(self) -> Vec3 {
        let c = self.v * self.s;
        let hp = wrap_degrees(self.h) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.v - c;
        Vec3::new(r + m, g + m, b + m)
    }

    /// RGBA array ready for a vertex buffer
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let rgb = self.to_rgb();
        [rgb.x, rgb.y, rgb.z, alpha.clamp(0.0, 1.0)]
    }
}

/// Generates visually distinct slot colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSampler {
    pub saturation: f32,
    pub value: f32,
}

impl ColorSampler {
    pub fn new(saturation: f32, value: f32) -> Self {
        Self { saturation, value }
    }

    /// Pick a hue at least 60° (and under 90°) past `prev`, or anywhere
    /// on the circle when there is no previous hue
    pub fn next_hue<R: Rng>(&self, prev: Option<f32>, rng: &mut R) -> f32 {
        match prev {
            Some(prev) => wrap_degrees(prev + rng.random_range(HUE_STEP_MIN..HUE_STEP_MAX)),
            None => rng.random_range(0.0..HUE_CIRCLE),
        }
    }

    pub fn sample<R: Rng>(&self, prev: Option<f32>, rng: &mut R) -> Hsv {
        Hsv::new(self.next_hue(prev, rng), self.saturation, self.value)
    }
}
