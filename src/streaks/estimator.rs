//! Monte Carlo estimate of how often multiple streaks show up.

use super::trial::{count_streaks, draw_trial};
use crate::error::Result;
use crate::simulator::StreakConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Probability of the target color on one spin (18/37).
pub const TARGET_PROBABILITY: f64 = 18.0 / 37.0;

/// Streak counts across all trials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreakCounts {
    pub zero: u32,
    pub exactly_one: u32,
    pub exactly_two: u32,
    pub exactly_three: u32,
    pub four_or_more: u32,
}

impl StreakCounts {
    pub fn record(&mut self, streaks: u32) {
        match streaks {
            0 => self.zero += 1,
            1 => self.exactly_one += 1,
            2 => self.exactly_two += 1,
            3 => self.exactly_three += 1,
            _ => self.four_or_more += 1,
        }
    }

    pub fn at_least_one(&self) -> u32 {
        self.exactly_one + self.at_least_two()
    }

    pub fn at_least_two(&self) -> u32 {
        self.exactly_two + self.at_least_three()
    }

    pub fn at_least_three(&self) -> u32 {
        self.exactly_three + self.four_or_more
    }

    pub fn total(&self) -> u32 {
        self.zero + self.at_least_one()
    }
}

/// Result of a streak estimation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakReport {
    pub trials: u32,
    pub spins_per_trial: u32,
    pub streak_length: u32,
    pub counts: StreakCounts,
    /// Analytic probability of at least one streak, in percent.
    pub exact_at_least_one_pct: f64,
}

impl StreakReport {
    fn pct(&self, count: u32) -> f64 {
        count as f64 / self.trials as f64 * 100.0
    }

    pub fn zero_pct(&self) -> f64 {
        self.pct(self.counts.zero)
    }

    pub fn at_least_one_pct(&self) -> f64 {
        self.pct(self.counts.at_least_one())
    }

    pub fn at_least_two_pct(&self) -> f64 {
        self.pct(self.counts.at_least_two())
    }

    pub fn at_least_three_pct(&self) -> f64 {
        self.pct(self.counts.at_least_three())
    }

    pub fn exactly_one_pct(&self) -> f64 {
        self.pct(self.counts.exactly_one)
    }

    pub fn exactly_two_pct(&self) -> f64 {
        self.pct(self.counts.exactly_two)
    }

    pub fn exactly_three_pct(&self) -> f64 {
        self.pct(self.counts.exactly_three)
    }

    pub fn four_or_more_pct(&self) -> f64 {
        self.pct(self.counts.four_or_more)
    }

    /// At-least-two over at-least-one. `None` when no trial had a streak.
    pub fn ratio_two_to_one(&self) -> Option<f64> {
        let one = self.counts.at_least_one();
        if one == 0 {
            None
        } else {
            Some(self.counts.at_least_two() as f64 / one as f64)
        }
    }

    pub fn to_text(&self) -> String {
        let k = self.streak_length;
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 STREAK PROBABILITY ESTIMATE\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Trials: {}, {} spins each, streak of {} consecutive target\n",
            self.trials, self.spins_per_trial, k
        ));
        report.push_str(&format!(
            "Target probability: 18/37 = {:.4} ({:.2}%)\n\n",
            TARGET_PROBABILITY,
            TARGET_PROBABILITY * 100.0
        ));

        report.push_str("── NON-OVERLAPPING STREAKS ──────────────────────────────────────\n");
        let rows = [
            ("Zero streaks", self.zero_pct()),
            ("At least one", self.at_least_one_pct()),
            ("Exactly one", self.exactly_one_pct()),
            ("At least two", self.at_least_two_pct()),
            ("Exactly two", self.exactly_two_pct()),
            ("At least three", self.at_least_three_pct()),
            ("Exactly three", self.exactly_three_pct()),
            ("Four or more", self.four_or_more_pct()),
        ];
        for (label, pct) in rows {
            report.push_str(&format!("  {:<16} {:6.2}%\n", label, pct));
        }
        report.push('\n');

        report.push_str("── CHECK ────────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Exact P(at least one): {:6.2}%\n",
            self.exact_at_least_one_pct
        ));
        match self.ratio_two_to_one() {
            Some(ratio) => report.push_str(&format!("  Ratio two/one:         {:.4}\n", ratio)),
            None => report.push_str("  Ratio two/one:         n/a (no streaks)\n"),
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }
}

/// Probability that `spins` independent draws with success chance `p`
/// contain at least one run of `streak_length` successes.
///
/// Tracks the distribution of the current run length; mass that reaches
/// `streak_length` is absorbed.
pub fn exact_at_least_one(spins: u32, streak_length: u32, p: f64) -> f64 {
    if streak_length == 0 {
        return 1.0;
    }
    if streak_length > spins {
        return 0.0;
    }
    let k = streak_length as usize;
    let mut state = vec![0.0; k];
    state[0] = 1.0;
    let mut hit = 0.0;

    for _ in 0..spins {
        let mut next = vec![0.0; k];
        next[0] = state.iter().sum::<f64>() * (1.0 - p);
        for run in 0..k - 1 {
            next[run + 1] = state[run] * p;
        }
        hit += state[k - 1] * p;
        state = next;
    }
    hit
}

/// Run the estimate with a seeded (or entropy-seeded) generator.
pub fn estimate(config: &StreakConfig) -> Result<StreakReport> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    estimate_with_rng(config, &mut rng)
}

/// Run the estimate drawing from `rng`.
pub fn estimate_with_rng<R: Rng>(config: &StreakConfig, rng: &mut R) -> Result<StreakReport> {
    config.validate()?;

    let mut counts = StreakCounts::default();
    for trial in 0..config.trials {
        let symbols = draw_trial(rng, config.spins_per_trial);
        counts.record(count_streaks(&symbols, config.streak_length));

        if (trial + 1) % 10_000 == 0 {
            debug!("Completed {}/{} trials", trial + 1, config.trials);
        }
    }

    let report = StreakReport {
        trials: config.trials,
        spins_per_trial: config.spins_per_trial,
        streak_length: config.streak_length,
        counts,
        exact_at_least_one_pct: exact_at_least_one(
            config.spins_per_trial,
            config.streak_length,
            TARGET_PROBABILITY,
        ) * 100.0,
    };
    info!(
        trials = report.trials,
        at_least_one = report.at_least_one_pct(),
        exact = report.exact_at_least_one_pct,
        "streak estimate finished"
    );
    Ok(report)
}
