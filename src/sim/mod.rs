//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Frame-stepped, single-threaded
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod color;
pub mod difficulty;
pub mod hazard;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Contact, Outcome, classify, resolve};
pub use color::{ColorSampler, Hsv};
pub use difficulty::DifficultyCurve;
pub use hazard::{Hazard, dir_to_facing};
pub use player::{Player, Rotation, Side, Slot, Turn, easing};
pub use state::{GameEvent, GameState, Substate, SubstateEvent};
pub use tick::{TickInput, autopilot_turn, tick};
