use super::NumberSource;
use crate::constants::{POCKETS, REMOTE_BATCH_SIZE};
use crate::error::Result;
use crate::wheel::Outcome;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pseudo-random stand-in for the remote source.
pub struct LocalSource {
    rng: ChaCha8Rng,
    batch_size: usize,
}

impl LocalSource {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            batch_size: REMOTE_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }
}

impl NumberSource for LocalSource {
    fn name(&self) -> &str {
        "local generator"
    }

    fn next_batch(&mut self) -> Result<Vec<Outcome>> {
        Ok((0..self.batch_size)
            .map(|_| self.rng.gen_range(0..POCKETS))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_batch_matches_remote_size() {
        let mut source = LocalSource::seeded(1);
        assert_eq!(source.next_batch().unwrap().len(), REMOTE_BATCH_SIZE);
    }

    #[test]
    fn test_seeded_batches_repeat() {
        let a = LocalSource::seeded(9).with_batch_size(50).next_batch().unwrap();
        let b = LocalSource::seeded(9).with_batch_size(50).next_batch().unwrap();
        assert_eq!(a, b);
    }
}
