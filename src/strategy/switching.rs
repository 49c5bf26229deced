//! Target-color switching heuristics.

use crate::constants::SWITCH_MIN_SPINS;
use crate::wheel::{Color, Wheel};
use serde::{Deserialize, Serialize};

/// Ratio of two color counts. A zero denominator gives `+inf` so the
/// comparison against a finite threshold stays meaningful; `0 / 0` is 0.
pub fn color_ratio(numerator: u64, denominator: u64) -> f64 {
    match (numerator, denominator) {
        (0, 0) => 0.0,
        (_, 0) => f64::INFINITY,
        (n, d) => n as f64 / d as f64,
    }
}

/// Thresholds for both switches. Read-only during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchPolicy {
    /// Flip when `count(other) / count(target)` reaches this value.
    pub ratio_threshold: f64,
    /// Spins that must elapse before the dominance switch can fire and
    /// after which reaching the bet floor ends the run.
    pub min_spins: u64,
    pub dominance_enabled: bool,
    pub early_floor_enabled: bool,
}

impl Default for SwitchPolicy {
    fn default() -> Self {
        Self {
            ratio_threshold: 1.5,
            min_spins: SWITCH_MIN_SPINS,
            dominance_enabled: true,
            early_floor_enabled: true,
        }
    }
}

impl SwitchPolicy {
    /// Both heuristics off: the target color never changes.
    pub fn disabled() -> Self {
        Self {
            dominance_enabled: false,
            early_floor_enabled: false,
            ..Default::default()
        }
    }

    /// New target color if the other color dominates the observed spins.
    pub fn dominance_switch(
        &self,
        target: Color,
        red_count: u64,
        black_count: u64,
        spins: u64,
    ) -> Option<Color> {
        if !self.dominance_enabled || spins < self.min_spins {
            return None;
        }
        let (target_count, other_count) = match target {
            Color::Red => (red_count, black_count),
            Color::Black => (black_count, red_count),
            Color::Green => return None,
        };
        if color_ratio(other_count, target_count) >= self.ratio_threshold {
            Some(target.opposite())
        } else {
            None
        }
    }

    /// Same as [`Self::dominance_switch`], reading counts from a wheel.
    pub fn dominance_switch_on(&self, target: Color, wheel: &Wheel) -> Option<Color> {
        self.dominance_switch(
            target,
            wheel.count(Color::Red),
            wheel.count(Color::Black),
            wheel.spin_count(),
        )
    }

    /// New target color if the bet floor was reached before `min_spins`.
    /// `None` means the floor is a genuine stop.
    pub fn early_floor_switch(&self, target: Color, spins: u64) -> Option<Color> {
        if self.early_floor_enabled && spins < self.min_spins {
            Some(target.opposite())
        } else {
            None
        }
    }
}
