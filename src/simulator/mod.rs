//! Monte Carlo simulator for the La Partage color strategy.
//!
//! Run thousands of independent bankroll runs to analyze:
//! - How runs end (bankruptcy, bet floor/ceiling, profit stops)
//! - Profit/loss distribution across runs
//! - Whether switching the target color correlates with profit
//!
//! Each run owns its wheel; the adjustment table and any replay sequence
//! are shared read-only between runs.

mod config;
mod report;
mod run_stats;
mod runner;

pub use config::{SimConfig, StreakConfig};
pub use report::{bucket_index, ProfitBucket, RunHighlight, SimReport};
pub use run_stats::{RunStats, StopReason};
pub use runner::{run_simulation, simulate_single_run, SpinSource};
