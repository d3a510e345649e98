//! Time-driven difficulty: levels and hazard cadence

use serde::{Deserialize, Serialize};

use super::state::Substate;
use crate::tuning::{LEVEL_COUNT, LEVEL_THRESHOLDS, Tuning};

/// Maps elapsed play time to a level and a spawn cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    /// Ascending level end times (seconds)
    pub thresholds: [f32; LEVEL_THRESHOLDS],
    /// Spawn interval per level (seconds)
    pub intervals: [f32; LEVEL_COUNT],
    /// Spawn interval during even-level transitions
    pub burst_interval: f32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

impl DifficultyCurve {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            thresholds: tuning.level_thresholds,
            intervals: tuning.generation_intervals,
            burst_interval: tuning.burst_interval,
        }
    }

    /// Level for an elapsed duration: the index of the first threshold not
    /// yet reached, or one past the last threshold
    pub fn level_for_duration(&self, duration: f32) -> usize {
        self.thresholds
            .iter()
            .position(|&t| duration < t)
            .unwrap_or(LEVEL_THRESHOLDS)
    }

    /// Seconds until the next spawn
    ///
    /// Transitions into an even level fire a fast burst timed to the
    /// transition animation.
    pub fn generation_interval(&self, level: usize, substate: Substate, current_level: i32) -> f32 {
        if substate == Substate::Transitioning && current_level.rem_euclid(2) == 0 {
            return self.burst_interval;
        }
        self.intervals[level.min(LEVEL_COUNT - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_steps() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.level_for_duration(-2.0), 0);
        assert_eq!(curve.level_for_duration(0.0), 0);
        for (i, &t) in curve.thresholds.iter().enumerate() {
            assert_eq!(curve.level_for_duration(t - 0.001), i);
            assert_eq!(curve.level_for_duration(t), i + 1);
        }
        assert_eq!(curve.level_for_duration(1.0e6), 6);
    }

    #[test]
    fn test_interval_table() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.generation_interval(0, Substate::Play, 0), 1.6);
        assert_eq!(curve.generation_interval(6, Substate::Play, 6), 0.5);
        assert_eq!(curve.generation_interval(99, Substate::Play, 6), 0.5);
    }

    #[test]
    fn test_burst_only_on_even_transitions() {
        let curve = DifficultyCurve::default();
        for level in [0, 2, 4, 6] {
            assert_eq!(curve.generation_interval(level as usize, Substate::Transitioning, level), 0.25);
        }
        for level in [1, 3, 5] {
            assert_eq!(
                curve.generation_interval(level as usize, Substate::Transitioning, level),
                curve.intervals[level as usize]
            );
        }
        assert_eq!(curve.generation_interval(2, Substate::Play, 2), 1.2);
    }
}
