//! Adaptive even-money betting strategy: bet sizing and color switching.

pub mod adjustment;
pub mod switching;

pub use adjustment::{round_cents, AdjustmentTable, BetRange};
pub use switching::{color_ratio, SwitchPolicy};
