//! Wheel layout and strategy constants shared by the engine and the CLI.

// =============================================================================
// WHEEL LAYOUT
// =============================================================================

/// Highest number on a single-zero wheel.
pub const MAX_OUTCOME: u8 = 36;

/// Number of pockets (0-36).
pub const POCKETS: u8 = MAX_OUTCOME + 1;

/// Red pockets.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Black pockets (every non-zero pocket that is not red).
pub const BLACK_NUMBERS: [u8; 18] = [
    2, 4, 6, 8, 10, 11, 13, 15, 17, 20, 22, 24, 26, 28, 29, 31, 33, 35,
];

// =============================================================================
// STRATEGY
// =============================================================================

/// Spins that must elapse before the color heuristics treat the observed
/// red/black split as meaningful.
pub const SWITCH_MIN_SPINS: u64 = 12;

/// Default adjustment table as (min, max, step).
/// Gaps between ranges are intentional: a bet landing in one is an error.
pub const DEFAULT_ADJUSTMENT_TABLE: [(f64, f64, f64); 6] = [
    (0.20, 0.90, 0.10),
    (1.00, 1.80, 0.20),
    (2.00, 3.60, 0.40),
    (4.00, 7.20, 0.80),
    (8.00, 12.80, 1.20),
    (14.00, 20.00, 2.00),
];

/// Profit/loss bucket boundaries for the batch report.
/// Bucket i covers [BOUNDS[i-1], BOUNDS[i]) with open ends at both sides.
pub const PROFIT_BUCKET_BOUNDS: [f64; 7] = [-500.0, -200.0, -100.0, 0.0, 100.0, 200.0, 500.0];

/// Labels for the eight profit/loss buckets.
pub const PROFIT_BUCKET_LABELS: [&str; 8] = [
    "< -$500",
    "-$500 to -$200",
    "-$200 to -$100",
    "-$100 to $0",
    "$0 to $100",
    "$100 to $200",
    "$200 to $500",
    "> $500",
];

// =============================================================================
// RANDOM SOURCE
// =============================================================================

/// Numbers requested per remote batch.
pub const REMOTE_BATCH_SIZE: usize = 8000;

/// Pause between remote batches, in milliseconds.
pub const REMOTE_BATCH_PAUSE_MS: u64 = 2000;

/// Header row of the exported random-number CSV.
pub const CSV_HEADER: &str = "random_number";
