//! Random number sources for replay sequences.
//!
//! Numbers are fetched in batches, optionally saved to CSV, and later read
//! back to drive a replay wheel.

mod csv;
mod local;
mod remote;

pub use csv::{read_numbers_csv, write_numbers_csv};
pub use local::LocalSource;
pub use remote::{parse_plain_integers, RandomOrgSource};

use crate::error::Result;
use crate::wheel::Outcome;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Anything that can hand out batches of wheel outcomes.
pub trait NumberSource {
    /// Short name for log lines.
    fn name(&self) -> &str;

    /// Fetch the next batch. Every value lies in `0..=36`.
    fn next_batch(&mut self) -> Result<Vec<Outcome>>;

    /// Pause to leave between consecutive batches.
    fn pause(&self) -> Duration {
        Duration::ZERO
    }
}

/// Pull `batches` batches from `source` and concatenate them.
pub fn collect_numbers(source: &mut dyn NumberSource, batches: u32) -> Result<Vec<Outcome>> {
    let mut numbers = Vec::new();
    for batch in 0..batches {
        if batch > 0 && !source.pause().is_zero() {
            thread::sleep(source.pause());
        }
        info!("Fetching batch {}/{} from {}...", batch + 1, batches, source.name());
        numbers.extend(source.next_batch()?);
    }
    info!("Collected {} numbers from {}", numbers.len(), source.name());
    Ok(numbers)
}
