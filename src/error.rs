//! Error type shared by the simulation engine and its collaborators.

use thiserror::Error;

/// Errors raised by the wheel, the bet-size table, the random sources and
/// configuration loading.
#[derive(Error, Debug)]
pub enum SimError {
    /// Bet magnitude not covered by any range of the adjustment table
    /// (below it, above it, or in a gap between two ranges).
    #[error("current bet {bet:.2} out of adjustment table range")]
    OutOfRange { bet: f64 },

    #[error("invalid adjustment table: {0}")]
    InvalidTable(String),

    #[error("invalid bet: {0}")]
    InvalidBet(String),

    #[error("outcome {0} is not on the wheel (expected 0-36)")]
    InvalidOutcome(i64),

    #[error("replay sequence is empty")]
    EmptySequence,

    // Random source collaborator
    #[error("random source request failed: {0}")]
    Source(String),

    #[error("malformed random source response: {0}")]
    Malformed(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = SimError::OutOfRange { bet: 0.95 };
        assert_eq!(
            err.to_string(),
            "current bet 0.95 out of adjustment table range"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.csv")?)
        }
        assert!(matches!(open_missing(), Err(SimError::Io(_))));
    }
}
