//! Table-driven bet sizing.
//!
//! A loss raises the bet by the step of the range that contains it. A win
//! lowers it by the same step, except exactly on a range's lower bound,
//! where the previous (smaller) range's step applies. That asymmetry decides
//! whether alternating wins and losses return to the exact starting bet, so
//! it is kept as is.

use crate::constants::DEFAULT_ADJUSTMENT_TABLE;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Round to cent precision.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One tier of the adjustment table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl BetRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, bet: f64) -> bool {
        self.min <= bet && bet <= self.max
    }
}

/// Sorted, non-overlapping bet ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BetRange>", into = "Vec<BetRange>")]
pub struct AdjustmentTable {
    ranges: Vec<BetRange>,
}

impl AdjustmentTable {
    /// Build a table, checking that ranges are well formed, sorted, strictly
    /// separated and that steps never shrink as bets grow.
    pub fn new(ranges: Vec<BetRange>) -> Result<Self> {
        if ranges.is_empty() {
            return Err(SimError::InvalidTable("no ranges".to_string()));
        }
        for (i, range) in ranges.iter().enumerate() {
            if !(range.min < range.max) {
                return Err(SimError::InvalidTable(format!(
                    "range {} has min {} >= max {}",
                    i, range.min, range.max
                )));
            }
            if !(range.step > 0.0) {
                return Err(SimError::InvalidTable(format!(
                    "range {} has non-positive step {}",
                    i, range.step
                )));
            }
            if i > 0 {
                let prev = &ranges[i - 1];
                if range.min <= prev.max {
                    return Err(SimError::InvalidTable(format!(
                        "range {} starts at {} inside or before range {} ending at {}",
                        i,
                        range.min,
                        i - 1,
                        prev.max
                    )));
                }
                if range.step < prev.step {
                    return Err(SimError::InvalidTable(format!(
                        "range {} step {} is smaller than the previous step {}",
                        i, range.step, prev.step
                    )));
                }
            }
        }
        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[BetRange] {
        &self.ranges
    }

    /// Smallest bet the table covers.
    pub fn min_bet(&self) -> f64 {
        self.ranges[0].min
    }

    /// Largest bet the table covers.
    pub fn max_bet(&self) -> f64 {
        self.ranges[self.ranges.len() - 1].max
    }

    /// Index of the range containing `bet`.
    pub fn find(&self, bet: f64) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(bet))
    }

    pub fn covers(&self, bet: f64) -> bool {
        self.find(bet).is_some()
    }

    /// Step of the range containing `bet`.
    pub fn step_for(&self, bet: f64) -> Result<f64> {
        self.find(bet)
            .map(|i| self.ranges[i].step)
            .ok_or(SimError::OutOfRange { bet })
    }

    /// Bet after a loss.
    pub fn increase(&self, current: f64) -> Result<f64> {
        let step = self.step_for(current)?;
        Ok(round_cents(current + step))
    }

    /// Bet after a win.
    pub fn decrease(&self, current: f64) -> Result<f64> {
        let index = self.find(current).ok_or(SimError::OutOfRange { bet: current })?;
        let step = if current == self.ranges[index].min && index > 0 {
            self.ranges[index - 1].step
        } else {
            self.ranges[index].step
        };
        Ok(round_cents(current - step))
    }

    /// Bet for the next spin given whether the last one won.
    pub fn next_bet(&self, current: f64, won: bool) -> Result<f64> {
        if won {
            self.decrease(current)
        } else {
            self.increase(current)
        }
    }
}

impl Default for AdjustmentTable {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_ADJUSTMENT_TABLE
                .iter()
                .map(|&(min, max, step)| BetRange::new(min, max, step))
                .collect(),
        }
    }
}

impl TryFrom<Vec<BetRange>> for AdjustmentTable {
    type Error = SimError;

    fn try_from(ranges: Vec<BetRange>) -> Result<Self> {
        Self::new(ranges)
    }
}

impl From<AdjustmentTable> for Vec<BetRange> {
    fn from(table: AdjustmentTable) -> Self {
        table.ranges
    }
}
