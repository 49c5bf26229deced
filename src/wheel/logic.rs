//! Wheel emulator: random or replayed outcomes, history and running counts.

use super::types::{color_of, is_valid_outcome, Color, Outcome};
use crate::constants::POCKETS;
use crate::error::{Result, SimError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::sync::Arc;

/// Where outcomes come from.
#[derive(Debug, Clone)]
enum Source {
    Random(ChaCha8Rng),
    /// Shared read-only sequence; position is `(offset + spin_count) % len`.
    Replay {
        sequence: Arc<[Outcome]>,
        offset: usize,
    },
}

/// Summary of everything the wheel has produced so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WheelStats {
    pub total_spins: u64,
    pub red_count: u64,
    pub black_count: u64,
    pub zero_count: u64,
    pub even_count: u64,
    pub odd_count: u64,
    pub last_10: Vec<Outcome>,
}

/// Single-zero wheel owned by one simulation run.
#[derive(Debug, Clone)]
pub struct Wheel {
    source: Source,
    history: Vec<Outcome>,
    red_count: u64,
    black_count: u64,
    green_count: u64,
    spin_count: u64,
}

impl Wheel {
    /// Uniform wheel driven by a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform wheel driven by an entropy-seeded generator.
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        Self::from_source(Source::Random(rng))
    }

    /// Deterministic wheel that replays `sequence` cyclically from its start.
    pub fn replay(sequence: Vec<Outcome>) -> Result<Self> {
        Self::replay_shared(Arc::from(sequence), 0)
    }

    /// Deterministic wheel over a shared sequence, starting `offset` numbers in.
    /// Lets many runs read disjoint windows of one long fetched sequence.
    pub fn replay_shared(sequence: Arc<[Outcome]>, offset: usize) -> Result<Self> {
        if sequence.is_empty() {
            return Err(SimError::EmptySequence);
        }
        if let Some(&bad) = sequence.iter().find(|&&n| !is_valid_outcome(n as i64)) {
            return Err(SimError::InvalidOutcome(bad as i64));
        }
        let offset = offset % sequence.len();
        Ok(Self::from_source(Source::Replay { sequence, offset }))
    }

    fn from_source(source: Source) -> Self {
        Self {
            source,
            history: Vec::new(),
            red_count: 0,
            black_count: 0,
            green_count: 0,
            spin_count: 0,
        }
    }

    /// Spin the wheel. The outcome is recorded before it is returned.
    pub fn spin(&mut self) -> Outcome {
        let outcome = match &mut self.source {
            Source::Random(rng) => rng.gen_range(0..POCKETS),
            Source::Replay { sequence, offset } => {
                let index = (*offset + self.spin_count as usize) % sequence.len();
                sequence[index]
            }
        };

        self.history.push(outcome);
        self.spin_count += 1;
        match color_of(outcome) {
            Color::Red => self.red_count += 1,
            Color::Black => self.black_count += 1,
            Color::Green => self.green_count += 1,
        }

        outcome
    }

    pub fn spin_count(&self) -> u64 {
        self.spin_count
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    pub fn count(&self, color: Color) -> u64 {
        match color {
            Color::Red => self.red_count,
            Color::Black => self.black_count,
            Color::Green => self.green_count,
        }
    }

    /// Index of the next replayed outcome, or `None` for a random wheel.
    pub fn cursor(&self) -> Option<usize> {
        match &self.source {
            Source::Random(_) => None,
            Source::Replay { sequence, offset } => {
                Some((*offset + self.spin_count as usize) % sequence.len())
            }
        }
    }

    /// Clear history and counters. A replay wheel restarts at its offset.
    pub fn reset(&mut self) {
        self.history.clear();
        self.red_count = 0;
        self.black_count = 0;
        self.green_count = 0;
        self.spin_count = 0;
    }

    /// Consecutive outcomes of `color` at the end of the history.
    pub fn trailing_streak(&self, color: Color) -> u32 {
        self.history
            .iter()
            .rev()
            .take_while(|&&n| color_of(n) == color)
            .count() as u32
    }

    pub fn statistics(&self) -> WheelStats {
        let start = self.history.len().saturating_sub(10);
        WheelStats {
            total_spins: self.spin_count,
            red_count: self.red_count,
            black_count: self.black_count,
            zero_count: self.green_count,
            even_count: self
                .history
                .iter()
                .filter(|&&n| n != 0 && n % 2 == 0)
                .count() as u64,
            odd_count: self.history.iter().filter(|&&n| n % 2 == 1).count() as u64,
            last_10: self.history[start..].to_vec(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_history(&mut self, history: Vec<Outcome>) {
        self.reset();
        for n in &history {
            match color_of(*n) {
                Color::Red => self.red_count += 1,
                Color::Black => self.black_count += 1,
                Color::Green => self.green_count += 1,
            }
        }
        self.spin_count = history.len() as u64;
        self.history = history;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_returns_valid_number() {
        let mut wheel = Wheel::seeded(42);
        for _ in 0..1000 {
            assert!(wheel.spin() <= 36);
        }
    }

    #[test]
    fn test_spin_adds_to_history_and_count() {
        let mut wheel = Wheel::seeded(42);
        let result = wheel.spin();
        assert_eq!(wheel.history(), &[result]);
        assert_eq!(wheel.spin_count(), 1);
        for _ in 0..4 {
            wheel.spin();
        }
        assert_eq!(wheel.spin_count(), 5);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = Wheel::seeded(42);
        let mut b = Wheel::seeded(123);
        let ra: Vec<_> = (0..10).map(|_| a.spin()).collect();
        let rb: Vec<_> = (0..10).map(|_| b.spin()).collect();
        assert_ne!(ra, rb);
    }

    #[test]
    fn test_same_seed_repeats() {
        let mut a = Wheel::seeded(7);
        let mut b = Wheel::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.spin(), b.spin());
        }
    }

    #[test]
    fn test_replay_cycles_through_sequence() {
        let mut wheel = Wheel::replay(vec![1, 2, 3, 4, 5]).unwrap();
        let results: Vec<_> = (0..10).map(|_| wheel.spin()).collect();
        assert_eq!(results, vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_replay_cursor_wraps() {
        let mut wheel = Wheel::replay(vec![5, 15, 25, 35]).unwrap();
        assert_eq!(wheel.cursor(), Some(0));
        for _ in 0..4 {
            wheel.spin();
        }
        assert_eq!(wheel.cursor(), Some(0));
        wheel.spin();
        assert_eq!(wheel.spin_count(), 5);
        assert_eq!(wheel.history().last(), Some(&5));
    }

    #[test]
    fn test_replay_edge_numbers() {
        let mut wheel = Wheel::replay(vec![0, 36, 1, 35]).unwrap();
        assert_eq!(wheel.spin(), 0);
        assert_eq!(wheel.spin(), 36);
        assert_eq!(wheel.spin(), 1);
        assert_eq!(wheel.spin(), 35);
    }

    #[test]
    fn test_replay_offset() {
        let seq: Arc<[Outcome]> = Arc::from(vec![7, 14, 21]);
        let mut wheel = Wheel::replay_shared(seq, 4).unwrap();
        assert_eq!(wheel.spin(), 14);
        assert_eq!(wheel.spin(), 21);
        assert_eq!(wheel.spin(), 7);
    }

    #[test]
    fn test_replay_rejects_bad_sequences() {
        assert!(matches!(Wheel::replay(vec![]), Err(SimError::EmptySequence)));
        assert!(matches!(
            Wheel::replay(vec![3, 37]),
            Err(SimError::InvalidOutcome(37))
        ));
    }

    #[test]
    fn test_random_wheel_has_no_cursor() {
        assert_eq!(Wheel::seeded(1).cursor(), None);
    }

    #[test]
    fn test_reset_restarts_replay() {
        let mut wheel = Wheel::replay(vec![10, 20, 30]).unwrap();
        wheel.spin();
        wheel.spin();
        wheel.reset();
        assert_eq!(wheel.spin_count(), 0);
        assert!(wheel.history().is_empty());
        assert_eq!(wheel.spin(), 10);
    }

    #[test]
    fn test_counts_track_colors() {
        let mut wheel = Wheel::replay(vec![1, 2, 0, 3]).unwrap();
        for _ in 0..4 {
            wheel.spin();
        }
        assert_eq!(wheel.count(Color::Red), 2);
        assert_eq!(wheel.count(Color::Black), 1);
        assert_eq!(wheel.count(Color::Green), 1);
    }

    #[test]
    fn test_statistics() {
        let mut wheel = Wheel::replay((0..=12).collect()).unwrap();
        for _ in 0..13 {
            wheel.spin();
        }
        let stats = wheel.statistics();
        assert_eq!(stats.total_spins, 13);
        assert_eq!(stats.zero_count, 1);
        assert_eq!(stats.even_count, 6);
        assert_eq!(stats.odd_count, 6);
        assert_eq!(stats.last_10, vec![3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_trailing_streak_empty_history() {
        let wheel = Wheel::seeded(42);
        assert_eq!(wheel.trailing_streak(Color::Red), 0);
        assert_eq!(wheel.trailing_streak(Color::Black), 0);
    }

    #[test]
    fn test_trailing_streak_broken_by_zero() {
        let mut wheel = Wheel::seeded(42);
        wheel.set_history(vec![1, 3, 5, 0, 7, 9]);
        assert_eq!(wheel.trailing_streak(Color::Red), 2);
        assert_eq!(wheel.trailing_streak(Color::Black), 0);

        wheel.set_history(vec![1, 3, 5, 7, 9, 0]);
        assert_eq!(wheel.trailing_streak(Color::Red), 0);
    }

    #[test]
    fn test_trailing_streak_after_mixed_history() {
        let mut wheel = Wheel::seeded(42);
        wheel.set_history(vec![1, 2, 0, 4, 6, 8, 10, 11, 13, 15]);
        assert_eq!(wheel.trailing_streak(Color::Black), 7);
        assert_eq!(wheel.trailing_streak(Color::Red), 0);

        wheel.set_history(vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(wheel.trailing_streak(Color::Red), 1);
    }
}
