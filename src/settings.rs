//! Player preferences
//!
//! Kept apart from [`Tuning`](crate::Tuning): tuning defines the game,
//! settings only change how it is presented.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no continuous hue drift)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring bad settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with no maps; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Hue drift after accessibility preferences
    pub fn effective_hue_drift(&self, tuning: &Tuning) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            tuning.hue_drift
        }
    }

    /// Fold presentation preferences into a run's tuning
    pub fn apply(&self, tuning: &mut Tuning) {
        tuning.hue_drift = self.effective_hue_drift(tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_stops_drift() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        let mut tuning = Tuning::default();
        settings.apply(&mut tuning);
        assert_eq!(tuning.hue_drift, 0.0);

        let mut tuning = Tuning::default();
        Settings::default().apply(&mut tuning);
        assert_eq!(tuning.hue_drift, Tuning::default().hue_drift);
    }

    #[test]
    fn test_json_round_trip_and_fallback() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()), settings);
        assert_eq!(Settings::from_json("garbage"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"muted": true}"#).master_volume, 0.8);
    }
}
