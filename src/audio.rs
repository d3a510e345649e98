//! Audio cues
//!
//! The core never touches samples or devices. It names a cue; an
//! [`AudioSink`] supplied by the host owns loading and playback.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Hazard matched its side
    Match,
    /// Hazard struck the wrong color
    Mismatch,
    /// Out of lives
    Death,
}

impl Cue {
    /// Stable name used by sample lookups
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Match => "hit_good",
            Cue::Mismatch => "hit_bad",
            Cue::Death => "dead",
        }
    }
}

/// Playback backend provided by the host
pub trait AudioSink {
    /// Play `cue` at `volume` in [0, 1]
    fn play(&mut self, cue: Cue, volume: f32);
}

/// Sink that records cues to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogSink {
    pub played: Vec<Cue>,
}

impl AudioSink for LogSink {
    fn play(&mut self, cue: Cue, volume: f32) {
        log::info!("cue: {} (vol {:.2})", cue.name(), volume);
        self.played.push(cue);
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AudioManager {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut manager = Self {
            master_volume: 0.0,
            sfx_volume: 0.0,
            muted: settings.muted,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue
    pub fn play(&self, cue: Cue, sink: &mut dyn AudioSink) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        sink.play(cue, vol);
    }

    /// Play the cue of every event that has one
    pub fn dispatch(&self, events: &[GameEvent], sink: &mut dyn AudioSink) {
        for cue in events.iter().filter_map(GameEvent::cue) {
            self.play(cue, sink);
        }
    }
}
