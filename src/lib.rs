//! Partage - single-zero roulette strategy lab.
//!
//! Simulates an adaptive even-money strategy under the La Partage rule and
//! estimates how often multiple non-overlapping color streaks appear.

pub mod bets;
pub mod constants;
pub mod error;
pub mod random_source;
pub mod simulator;
pub mod strategy;
pub mod streaks;
pub mod wheel;

pub use error::{Result, SimError};
