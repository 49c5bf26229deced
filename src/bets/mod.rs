//! Bets and payouts.

pub mod payout;
pub mod types;

pub use payout::{payout, play_round};
pub use types::{Bet, BetKind};
