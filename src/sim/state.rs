//! Game state and the play substate machine
//!
//! The game state exclusively owns the player and the live hazards. Renderers
//! and audio read it (or the drained events) but never mutate it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::color::{ColorSampler, Hsv};
use super::difficulty::DifficultyCurve;
use super::hazard::Hazard;
use super::player::{Player, Side};
use crate::Rect;
use crate::audio::Cue;
use crate::tuning::Tuning;

/// Current mode of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Substate {
    /// Active gameplay
    Play,
    /// Everything frozen until toggled back
    Paused,
    /// Level change animation in progress
    Transitioning,
    /// One-frame pass-through that finalizes a transition
    Transitioned,
    /// Out of lives (terminal)
    Dying,
}

/// Inputs to the substate transition function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstateEvent {
    PauseToggled,
    LevelCrossed,
    TransitionElapsed,
    Settled,
    LivesExhausted,
}

impl Substate {
    /// Transition function; pairs not listed leave the substate unchanged
    pub fn next(self, event: SubstateEvent) -> Substate {
        use Substate::*;
        use SubstateEvent::*;
        match (self, event) {
            (Dying, _) => Dying,
            (_, LivesExhausted) => Dying,
            (Play, PauseToggled) => Paused,
            (Paused, PauseToggled) => Play,
            (Play, LevelCrossed) => Transitioning,
            (Transitioning, TransitionElapsed) => Transitioned,
            (Transitioned, Settled) => Play,
            (state, _) => state,
        }
    }

    /// Whether the simulation advances in this substate
    pub fn is_running(self) -> bool {
        matches!(self, Substate::Play | Substate::Transitioning | Substate::Transitioned)
    }

    /// Whether rotate input is accepted
    pub fn accepts_rotation(self) -> bool {
        matches!(self, Substate::Play | Substate::Transitioning)
    }
}

/// Something that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hazard matched the side it struck
    Matched { hazard_id: u32, side: Side },
    /// Hazard struck a side of a different color
    Mismatched { hazard_id: u32, side: Side },
    /// Hazard left the arena without striking a colored side
    Missed { hazard_id: u32 },
    Spawned { hazard_id: u32, side: Side },
    /// A level transition began
    LevelUp { level: i32 },
    /// A new slot started fading in
    SlotGranted { index: usize },
    /// Lives ran out
    Died { score: u64 },
}

impl GameEvent {
    /// Audio cue for this event, if any
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::Matched { .. } => Some(Cue::Match),
            GameEvent::Mismatched { .. } => Some(Cue::Mismatch),
            GameEvent::Died { .. } => Some(Cue::Death),
            _ => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub curve: DifficultyCurve,
    pub sampler: ColorSampler,
    pub substate: Substate,
    /// Seconds of play; starts at `-transition_length` so the opening
    /// fade-in ends exactly at zero
    pub elapsed: f32,
    /// Level currently in effect
    pub current_level: i32,
    /// Seconds into the current transition
    pub transition_timer: f32,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    pub player: Player,
    /// Live hazards (sorted by id)
    pub hazards: Vec<Hazard>,
    /// Slot fading in during the current transition
    pub fading_slot: Option<usize>,
    /// Tint for the lives readout, resampled on level up
    pub hud_tint: Hsv,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state, entering mid-transition into level 0
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let center = Vec2::splat(tuning.arena_size / 2.0);
        let player = Player::new(
            center,
            tuning.player_dim,
            tuning.starting_lives,
            tuning.rotate_duration,
        );
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            curve: DifficultyCurve::from_tuning(&tuning),
            sampler: ColorSampler::new(tuning.saturation, tuning.value),
            substate: Substate::Transitioning,
            elapsed: -tuning.transition_length,
            current_level: 0,
            transition_timer: 0.0,
            spawn_timer: 0.0,
            player,
            hazards: Vec::new(),
            fading_slot: None,
            hud_tint: Hsv::EMPTY,
            events: Vec::new(),
            next_id: 1,
            tuning,
        };

        // The first slot fades in over the opening transition
        state.grant_slot();
        state.hud_tint = state.player.sample(&mut state.rng);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Play area
    pub fn arena(&self) -> Rect {
        Rect::from_center(self.player.position, Vec2::splat(self.tuning.arena_size))
    }

    /// Level implied by elapsed time
    pub fn duration_level(&self) -> usize {
        self.curve.level_for_duration(self.elapsed)
    }

    /// Current spawn cadence in seconds
    pub fn generation_interval(&self) -> f32 {
        self.curve.generation_interval(
            self.duration_level(),
            self.substate,
            self.current_level,
        )
    }

    /// Apply a substate event
    pub fn apply(&mut self, event: SubstateEvent) {
        let next = self.substate.next(event);
        if next != self.substate {
            log::debug!("Substate {:?} -> {:?} ({:?})", self.substate, next, event);
            self.substate = next;
        }
    }

    /// Add a slot (if any side is free) and start fading it in
    pub fn grant_slot(&mut self) -> Option<usize> {
        let index = self.player.add_slot(&self.sampler, &mut self.rng)?;
        self.player.set_alpha(index, 0.0);
        self.fading_slot = Some(index);
        self.events.push(GameEvent::SlotGranted { index });
        Some(index)
    }

    /// Leave PLAY for the next level's transition
    pub fn begin_transition(&mut self) {
        if self.substate != Substate::Play {
            return;
        }
        self.apply(SubstateEvent::LevelCrossed);
        self.current_level += 1;
        self.transition_timer = 0.0;
        log::info!("Level {} (t={:.1}s)", self.current_level, self.elapsed);
        self.events.push(GameEvent::LevelUp {
            level: self.current_level,
        });
        if self.current_level % 2 == 1 {
            self.grant_slot();
        }
        self.hud_tint = self.player.sample(&mut self.rng);
    }

    /// Finish the current transition and resume play
    pub fn finish_transition(&mut self) {
        self.apply(SubstateEvent::TransitionElapsed);
        if let Some(index) = self.fading_slot.take() {
            self.player.set_alpha(index, 1.0);
        }
        self.apply(SubstateEvent::Settled);
    }

    /// Insert a hazard with the configured speed and radius
    pub fn spawn_hazard(&mut self, angle: f32, color: Hsv, distance: f32) -> u32 {
        let id = self.next_entity_id();
        let hazard = Hazard::new(
            id,
            angle,
            color,
            distance,
            self.tuning.hazard_speed,
            self.tuning.hazard_radius,
        );
        self.events.push(GameEvent::Spawned {
            hazard_id: id,
            side: hazard.side(),
        });
        self.hazards.push(hazard);
        id
    }

    /// Lose a life; entering DYING when none remain
    pub fn lose_life(&mut self) {
        self.player.lives = self.player.lives.saturating_sub(1);
        if self.player.lives == 0 && self.substate != Substate::Dying {
            self.apply(SubstateEvent::LivesExhausted);
            log::info!("Out of lives, final score {}", self.player.score);
            self.events.push(GameEvent::Died {
                score: self.player.score,
            });
        }
    }

    /// Take all events since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Ensure hazards are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.hazards.sort_by_key(|h| h.id);
    }
}
