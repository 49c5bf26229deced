//! Streak Monte Carlo estimator.
//!
//! Independent of the strategy simulator: each trial draws a fresh
//! three-symbol sequence and counts non-overlapping target streaks.

mod estimator;
mod trial;

pub use estimator::{
    estimate, estimate_with_rng, exact_at_least_one, StreakCounts, StreakReport,
    TARGET_PROBABILITY,
};
pub use trial::{count_streaks, draw_trial, TrialSymbol};
