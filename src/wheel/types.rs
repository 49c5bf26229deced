//! Wheel outcome and color types.

use crate::constants::{BLACK_NUMBERS, MAX_OUTCOME, RED_NUMBERS};
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pocket number in [0, 36].
pub type Outcome = u8;

/// Pocket color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Black,
    Green,
}

impl Color {
    /// The other betting color. Green has no opposite and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
            Color::Green => Color::Green,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an outcome. Zero is green; everything else is a set lookup.
pub fn color_of(outcome: Outcome) -> Color {
    if outcome == 0 {
        Color::Green
    } else if RED_NUMBERS.contains(&outcome) {
        Color::Red
    } else {
        Color::Black
    }
}

/// Whether a number is a pocket on the wheel.
pub fn is_valid_outcome(n: i64) -> bool {
    (0..=MAX_OUTCOME as i64).contains(&n)
}

/// Convert a raw integer into an outcome, rejecting anything off the wheel.
pub fn to_outcome(n: i64) -> Result<Outcome> {
    if is_valid_outcome(n) {
        Ok(n as Outcome)
    } else {
        Err(SimError::InvalidOutcome(n))
    }
}

/// All pockets of a given color, in ascending order.
pub fn numbers_of(color: Color) -> &'static [Outcome] {
    match color {
        Color::Red => &RED_NUMBERS,
        Color::Black => &BLACK_NUMBERS,
        Color::Green => &[0],
    }
}
