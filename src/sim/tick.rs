//! Per-frame simulation step
//!
//! Order within a frame: input, then physics and collisions, then
//! transitions and spawning. The host renders afterwards, so every draw sees
//! a fully settled frame.

use rand::Rng;

use super::collision::{self, Contact, Outcome};
use super::player::{Side, Turn};
use super::state::{GameEvent, GameState, Substate, SubstateEvent};
use crate::consts::{FULL_TURN_DEG, SIDES};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Quarter turn request (left/right key)
    pub rotate: Option<Turn>,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - AI turns the player
    pub autopilot: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        state.apply(SubstateEvent::PauseToggled);
    }
    if !state.substate.is_running() {
        return;
    }

    let rotate = match input.rotate {
        Some(turn) => Some(turn),
        None if input.autopilot => autopilot_turn(state),
        None => None,
    };
    if let Some(turn) = rotate {
        if state.substate.accepts_rotation() {
            state.player.rotate(turn);
        }
    }

    // --- PHYSICS ---
    state.elapsed += dt;
    state.player.update(dt);

    let drift = state.tuning.hue_drift * dt;
    if drift != 0.0 {
        state.player.cycle_hue(drift);
        state.hud_tint = state.hud_tint.cycled(drift);
        for hazard in &mut state.hazards {
            hazard.color = hazard.color.cycled(drift);
        }
    }

    for hazard in &mut state.hazards {
        hazard.advance(dt);
    }

    resolve_collisions(state);
    if state.substate == Substate::Dying {
        return;
    }

    // --- SUBSTATE ---
    match state.substate {
        Substate::Transitioning => {
            state.transition_timer += dt;
            let length = state.tuning.transition_length;
            if let Some(index) = state.fading_slot {
                let alpha = if length > 0.0 {
                    state.transition_timer / length
                } else {
                    1.0
                };
                state.player.set_alpha(index, alpha);
            }
            if state.transition_timer >= length {
                state.finish_transition();
            }
        }
        Substate::Transitioned => state.finish_transition(),
        Substate::Play => {
            if state.duration_level() as i32 > state.current_level {
                state.begin_transition();
            }
        }
        _ => {}
    }

    // --- SPAWNING ---
    if state.elapsed >= 0.0 && state.substate.is_running() {
        state.spawn_timer += dt;
        let interval = state.generation_interval();
        if state.spawn_timer >= interval {
            // One spawn per frame; a long frame must not leave a backlog
            state.spawn_timer = (state.spawn_timer - interval).min(interval);
            spawn_random_hazard(state);
        }
    }

    // Ensure deterministic ordering
    state.normalize_order();
}

/// Resolve every hazard touching the player or leaving the arena
fn resolve_collisions(state: &mut GameState) {
    let arena = state.arena();
    let hazards = std::mem::take(&mut state.hazards);
    let mut kept = Vec::with_capacity(hazards.len());

    for mut hazard in hazards {
        if state.substate == Substate::Dying {
            kept.push(hazard);
            continue;
        }
        match collision::resolve(&state.player, &hazard) {
            Contact::Hit(Outcome::Match) => {
                state.player.score += 1;
                log::debug!("Hazard {} matched on {:?}", hazard.id, hazard.side());
                state.events.push(GameEvent::Matched {
                    hazard_id: hazard.id,
                    side: hazard.side(),
                });
            }
            Contact::Hit(Outcome::Mismatch) => {
                log::debug!("Hazard {} mismatched on {:?}", hazard.id, hazard.side());
                state.events.push(GameEvent::Mismatched {
                    hazard_id: hazard.id,
                    side: hazard.side(),
                });
                state.lose_life();
            }
            Contact::PassThrough => {
                hazard.passed = true;
                kept.push(hazard);
            }
            Contact::Pending => {
                let position = hazard.position(state.player.position);
                if collision::out_of_bounds(&arena, position, hazard.radius) {
                    log::debug!("Hazard {} missed", hazard.id);
                    state.events.push(GameEvent::Missed {
                        hazard_id: hazard.id,
                    });
                } else {
                    kept.push(hazard);
                }
            }
        }
    }

    state.hazards = kept;
}

/// Spawn a hazard on a random lane, colored like one of the player's slots
fn spawn_random_hazard(state: &mut GameState) {
    let angle = state.rng.random_range(0.0..FULL_TURN_DEG);
    let color = state.player.sample(&mut state.rng);
    let distance = state.tuning.spawn_distance;
    let id = state.spawn_hazard(angle, color, distance);
    log::debug!("Spawned hazard {id} at {angle:.0}°");
}

/// Pick the turn that brings the matching slot to the nearest hazard
pub fn autopilot_turn(state: &GameState) -> Option<Turn> {
    if state.player.rotation().is_turning() {
        return None;
    }
    let hazard = state
        .hazards
        .iter()
        .filter(|h| !h.passed && h.distance > 0.0)
        .min_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    let slot = state
        .player
        .slots()
        .iter()
        .position(|s| s.color == hazard.color)?;

    // Facing that puts `slot` on the hazard's side
    let target = Side::from_index(hazard.side().index() as i32 - slot as i32);
    let delta = (target.index() as i32 - state.player.facing().index() as i32).rem_euclid(SIDES as i32);
    match delta {
        0 => None,
        3 => Some(Turn::Left),
        _ => Some(Turn::Right),
    }
}
