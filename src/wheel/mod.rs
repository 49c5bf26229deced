//! Single-zero roulette wheel.
//!
//! The wheel either draws uniformly from its own seeded generator or replays
//! a supplied sequence of outcomes cyclically, which is how externally
//! fetched true-random numbers enter a simulation.

pub mod logic;
pub mod types;

pub use logic::{Wheel, WheelStats};
pub use types::{color_of, numbers_of, to_outcome, Color, Outcome};
