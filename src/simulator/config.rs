//! Simulation configuration.

use crate::error::{Result, SimError};
use crate::strategy::{AdjustmentTable, SwitchPolicy};
use crate::wheel::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a batch of strategy runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of independent runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = entropy). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Spin budget per run
    pub spins_per_run: u64,

    /// Extra spins allowed past the budget while waiting for a profit stop
    pub extension_spins: u64,

    pub starting_bankroll: f64,
    pub starting_bet: f64,

    /// A win that brings the bet to or below this ends the run
    pub min_bet: f64,

    /// A loss that brings the bet to or above this ends the run
    pub max_bet: f64,

    /// Net profit that must be exceeded for the end-of-budget profit stop
    pub profit_threshold: f64,

    /// Color bet on at the start of every run
    pub target_color: Color,

    /// La Partage: even-money bets lose half on zero
    pub half_loss: bool,

    pub switching: SwitchPolicy,

    pub table: AdjustmentTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            spins_per_run: 100,
            extension_spins: 0,
            starting_bankroll: 1000.00,
            starting_bet: 1.00,
            min_bet: 0.20,
            max_bet: 20.00,
            profit_threshold: 1.00,
            target_color: Color::Red,
            half_loss: true,
            switching: SwitchPolicy::default(),
            table: AdjustmentTable::default(),
        }
    }
}

impl SimConfig {
    /// Quick config for a small seeded batch
    pub fn quick(num_runs: u32, seed: u64) -> Self {
        Self {
            num_runs,
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Plain table strategy on a fixed color, no heuristics
    pub fn without_switching() -> Self {
        Self {
            switching: SwitchPolicy::disabled(),
            ..Default::default()
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot describe a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.num_runs == 0 {
            return Err(SimError::Config("num_runs must be at least 1".to_string()));
        }
        if self.spins_per_run == 0 {
            return Err(SimError::Config(
                "spins_per_run must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("starting_bankroll", self.starting_bankroll),
            ("starting_bet", self.starting_bet),
            ("min_bet", self.min_bet),
            ("max_bet", self.max_bet),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !self.profit_threshold.is_finite() || self.profit_threshold < 0.0 {
            return Err(SimError::Config(format!(
                "profit_threshold must be non-negative, got {}",
                self.profit_threshold
            )));
        }
        if self.min_bet >= self.max_bet {
            return Err(SimError::Config(format!(
                "min_bet {} must be below max_bet {}",
                self.min_bet, self.max_bet
            )));
        }
        if self.min_bet < self.table.min_bet() || self.max_bet > self.table.max_bet() {
            return Err(SimError::Config(format!(
                "min_bet {} and max_bet {} must lie within the adjustment table [{}, {}]",
                self.min_bet,
                self.max_bet,
                self.table.min_bet(),
                self.table.max_bet()
            )));
        }
        // A starting bet the bankroll cannot cover ends the run as bankrupt
        // before the first spin, so it needs no table coverage.
        if self.starting_bet <= self.starting_bankroll {
            if self.starting_bet <= self.min_bet || self.starting_bet >= self.max_bet {
                return Err(SimError::Config(format!(
                    "starting_bet {} must lie strictly between min_bet {} and max_bet {}",
                    self.starting_bet, self.min_bet, self.max_bet
                )));
            }
            if !self.table.covers(self.starting_bet) {
                return Err(SimError::Config(format!(
                    "starting_bet {} is not covered by the adjustment table",
                    self.starting_bet
                )));
            }
        }
        if self.target_color == Color::Green {
            return Err(SimError::Config(
                "target_color must be red or black".to_string(),
            ));
        }
        if !(self.switching.ratio_threshold > 0.0) {
            return Err(SimError::Config(format!(
                "ratio_threshold must be positive, got {}",
                self.switching.ratio_threshold
            )));
        }
        Ok(())
    }
}

/// Configuration for the streak estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    pub trials: u32,
    pub spins_per_trial: u32,
    pub streak_length: u32,
    pub seed: Option<u64>,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            trials: 30_000,
            spins_per_trial: 100,
            streak_length: 7,
            seed: None,
        }
    }
}

impl StreakConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(SimError::Config("trials must be at least 1".to_string()));
        }
        if self.streak_length == 0 {
            return Err(SimError::Config(
                "streak_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
