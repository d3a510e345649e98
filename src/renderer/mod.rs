//! Drawable snapshot of the game
//!
//! The core only builds geometry and orders draw calls. Rasterization, text
//! layout and presentation belong to the host's [`RenderTarget`].

pub mod shapes;
pub mod vertex;

use glam::{Affine2, Vec2};

use crate::sim::{GameState, Substate};
pub use vertex::{Vertex, colors};

/// Segments used for hazard circles
const HAZARD_SEGMENTS: u32 = 16;

/// Drawing backend provided by the host
pub trait RenderTarget {
    /// Draw a triangle list
    fn draw_vertices(&mut self, vertices: &[Vertex]);
    /// Draw a text string anchored at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32, color: [f32; 4]);
}

/// Draw the player body and its slots
pub fn draw_player(state: &GameState, target: &mut dyn RenderTarget, transform: &Affine2) {
    let player = &state.player;
    let local = *transform
        * Affine2::from_angle_translation(player.angle().to_radians(), player.position);

    target.draw_vertices(&shapes::square(&local, Vec2::ZERO, player.dim, colors::PLAYER_BODY));
    for (i, slot) in player.slots().iter().enumerate() {
        let color = slot.color.to_rgba(slot.alpha);
        target.draw_vertices(&shapes::square(&local, player.slot_offset(i), player.slot_dim(), color));
    }
}

/// Draw every live hazard
pub fn draw_hazards(state: &GameState, target: &mut dyn RenderTarget, transform: &Affine2) {
    for hazard in &state.hazards {
        let pos = hazard.position(state.player.position);
        let color = hazard.color.to_rgba(1.0);
        target.draw_vertices(&shapes::circle(transform, pos, hazard.radius, color, HAZARD_SEGMENTS));
    }
}

/// Draw score, lives and the pause banner
pub fn draw_hud(state: &GameState, target: &mut dyn RenderTarget, transform: &Affine2) {
    let size = state.tuning.arena_size;
    let lives: String = "^".repeat(state.player.lives as usize);

    target.draw_text(
        &state.player.score.to_string(),
        transform.transform_point2(Vec2::new(size * 5.0 / 6.0, size / 15.0)),
        0.1,
        colors::TEXT,
    );
    target.draw_text(
        &lives,
        transform.transform_point2(Vec2::new(size * 5.0 / 6.0, 0.0)),
        0.1,
        state.hud_tint.to_rgba(1.0),
    );
    if state.substate == Substate::Paused {
        target.draw_text(
            "PAUSED",
            transform.transform_point2(Vec2::splat(size / 2.0)),
            0.2,
            colors::TEXT,
        );
    }
}

/// Draw the whole frame in order: player (unless dying), hazards, HUD
pub fn draw(state: &GameState, target: &mut dyn RenderTarget, transform: &Affine2) {
    if state.substate != Substate::Dying {
        draw_player(state, target, transform);
    }
    draw_hazards(state, target, transform);
    draw_hud(state, target, transform);
}
