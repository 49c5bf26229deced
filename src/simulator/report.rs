//! Simulation report generation.

use super::config::SimConfig;
use super::run_stats::{RunStats, StopReason};
use crate::constants::{PROFIT_BUCKET_BOUNDS, PROFIT_BUCKET_LABELS};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Index of the profit bucket for `profit`. Lower bounds are inclusive.
pub fn bucket_index(profit: f64) -> usize {
    PROFIT_BUCKET_BOUNDS
        .iter()
        .take_while(|&&bound| profit >= bound)
        .count()
}

/// One bar of the profit/loss histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitBucket {
    pub label: &'static str,
    pub count: u32,
    pub percentage: f64,
}

/// Identifies a notable run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunHighlight {
    pub run_index: u32,
    pub profit_loss: f64,
    pub spins: u64,
}

impl From<&RunStats> for RunHighlight {
    fn from(run: &RunStats) -> Self {
        Self {
            run_index: run.run_index,
            profit_loss: run.profit_loss,
            spins: run.spins_completed,
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub starting_bankroll: f64,

    pub avg_final_bankroll: f64,
    pub avg_profit_loss: f64,
    pub avg_spins: f64,

    pub winning_runs: u32,
    pub losing_runs: u32,
    pub breakeven_runs: u32,
    pub aborted_runs: u32,

    pub best_run: Option<RunHighlight>,
    pub worst_run: Option<RunHighlight>,

    pub stop_reasons: BTreeMap<StopReason, u32>,
    pub profit_buckets: Vec<ProfitBucket>,

    pub mean_wins: f64,
    pub median_wins: f64,
    pub mean_losses: f64,

    // Switch / outcome correlation
    pub switched_runs: u32,
    pub profitable_runs: u32,
    pub switched_and_profitable: u32,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, n: usize) -> f64 {
    values.sum::<f64>() / n.max(1) as f64
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

fn count_where(runs: &[RunStats], pred: impl Fn(&RunStats) -> bool) -> u32 {
    runs.iter().filter(|r| pred(r)).count() as u32
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, config: &SimConfig) -> Self {
        let n = runs.len();
        let num_runs = n as u32;

        let avg_final_bankroll = mean(runs.iter().map(|r| r.final_bankroll), n);
        let avg_profit_loss = mean(runs.iter().map(|r| r.profit_loss), n);
        let avg_spins = mean(runs.iter().map(|r| r.spins_completed as f64), n);

        let winning_runs = count_where(&runs, |r| r.profit_loss > 0.0);
        let losing_runs = count_where(&runs, |r| r.profit_loss < 0.0);
        let breakeven_runs = count_where(&runs, |r| r.profit_loss == 0.0);
        let aborted_runs = count_where(&runs, |r| r.stop_reason == StopReason::Aborted);

        // First run wins ties
        let best_run = runs
            .iter()
            .reduce(|best, r| if r.profit_loss > best.profit_loss { r } else { best })
            .map(RunHighlight::from);
        let worst_run = runs
            .iter()
            .reduce(|worst, r| if r.profit_loss < worst.profit_loss { r } else { worst })
            .map(RunHighlight::from);

        let mut stop_reasons = BTreeMap::new();
        for run in &runs {
            *stop_reasons.entry(run.stop_reason).or_insert(0) += 1;
        }

        let mut bucket_counts = [0u32; PROFIT_BUCKET_LABELS.len()];
        for run in &runs {
            bucket_counts[bucket_index(run.profit_loss)] += 1;
        }
        let profit_buckets = PROFIT_BUCKET_LABELS
            .iter()
            .zip(bucket_counts)
            .map(|(&label, count)| ProfitBucket {
                label,
                count,
                percentage: percent(count, num_runs),
            })
            .collect();

        let mean_wins = mean(runs.iter().map(|r| r.wins as f64), n);
        let median_wins = median(runs.iter().map(|r| r.wins as f64).collect());
        let mean_losses = mean(runs.iter().map(|r| r.losses as f64), n);

        let switched_runs = count_where(&runs, |r| r.switched());
        let profitable_runs = count_where(&runs, |r| r.is_profitable());
        let switched_and_profitable = count_where(&runs, |r| r.switched() && r.is_profitable());

        Self {
            num_runs,
            starting_bankroll: config.starting_bankroll,
            avg_final_bankroll,
            avg_profit_loss,
            avg_spins,
            winning_runs,
            losing_runs,
            breakeven_runs,
            aborted_runs,
            best_run,
            worst_run,
            stop_reasons,
            profit_buckets,
            mean_wins,
            median_wins,
            mean_losses,
            switched_runs,
            profitable_runs,
            switched_and_profitable,
            run_stats: runs,
        }
    }

    pub fn stop_count(&self, reason: StopReason) -> u32 {
        self.stop_reasons.get(&reason).copied().unwrap_or(0)
    }

    pub fn switched_pct(&self) -> f64 {
        percent(self.switched_runs, self.num_runs)
    }

    pub fn profitable_pct(&self) -> f64 {
        percent(self.profitable_runs, self.num_runs)
    }

    pub fn switched_and_profitable_pct(&self) -> f64 {
        percent(self.switched_and_profitable, self.num_runs)
    }

    /// Share of switching runs that ended in profit.
    pub fn profitable_given_switch_pct(&self) -> f64 {
        percent(self.switched_and_profitable, self.switched_runs)
    }

    /// Share of non-switching runs that ended in profit.
    pub fn profitable_given_no_switch_pct(&self) -> f64 {
        percent(
            self.profitable_runs - self.switched_and_profitable,
            self.num_runs - self.switched_runs,
        )
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 LA PARTAGE STRATEGY REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} winning, {} losing, {} break-even",
            self.num_runs, self.winning_runs, self.losing_runs, self.breakeven_runs
        ));
        if self.aborted_runs > 0 {
            report.push_str(&format!(", {} aborted", self.aborted_runs));
        }
        report.push_str("\n\n");

        report.push_str("── BANKROLL ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Starting Bankroll:   ${:.2}\n",
            self.starting_bankroll
        ));
        report.push_str(&format!(
            "  Avg Final Bankroll:  ${:.2}\n",
            self.avg_final_bankroll
        ));
        report.push_str(&format!(
            "  Avg Profit/Loss:     ${:+.2}\n",
            self.avg_profit_loss
        ));
        report.push_str(&format!("  Avg Spins:           {:.1}\n", self.avg_spins));
        if let Some(best) = self.best_run {
            report.push_str(&format!(
                "  Best Run:            #{} ${:+.2} ({} spins)\n",
                best.run_index + 1,
                best.profit_loss,
                best.spins
            ));
        }
        if let Some(worst) = self.worst_run {
            report.push_str(&format!(
                "  Worst Run:           #{} ${:+.2} ({} spins)\n",
                worst.run_index + 1,
                worst.profit_loss,
                worst.spins
            ));
        }
        report.push('\n');

        report.push_str("── WINS / LOSSES ────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean Wins:           {:.2}\n", self.mean_wins));
        report.push_str(&format!("  Median Wins:         {:.1}\n", self.median_wins));
        report.push_str(&format!("  Mean Losses:         {:.2}\n\n", self.mean_losses));

        report.push_str("── STOP REASONS ─────────────────────────────────────────────────\n");
        for reason in StopReason::ALL {
            let count = self.stop_count(reason);
            if count == 0 {
                continue;
            }
            report.push_str(&format!(
                "  {:<40} {:6} ({:5.1}%)\n",
                reason.description(),
                count,
                percent(count, self.num_runs)
            ));
        }
        report.push('\n');

        report.push_str("── PROFIT/LOSS DISTRIBUTION ─────────────────────────────────────\n");
        for bucket in &self.profit_buckets {
            let bar: String = "█".repeat((bucket.percentage / 2.0) as usize);
            report.push_str(&format!(
                "  {:>14}: {:6} ({:5.1}%) {}\n",
                bucket.label, bucket.count, bucket.percentage, bar
            ));
        }
        report.push('\n');

        report.push_str("── COLOR SWITCHING ──────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Runs With Switch:    {} ({:.1}%)\n",
            self.switched_runs,
            self.switched_pct()
        ));
        report.push_str(&format!(
            "  Profitable Runs:     {} ({:.1}%)\n",
            self.profitable_runs,
            self.profitable_pct()
        ));
        report.push_str(&format!(
            "  Switched & Profit:   {} ({:.1}%)\n",
            self.switched_and_profitable,
            self.switched_and_profitable_pct()
        ));
        report.push_str(&format!(
            "  Win Rate | Switch:   {:.1}%\n",
            self.profitable_given_switch_pct()
        ));
        report.push_str(&format!(
            "  Win Rate | No Switch:{:>5.1}%\n",
            self.profitable_given_no_switch_pct()
        ));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::run_stats::sample_run;
    use super::*;

    fn report_for(runs: Vec<RunStats>) -> SimReport {
        SimReport::from_runs(runs, &SimConfig::default())
    }

    #[test]
    fn test_bucket_lower_bound_inclusive() {
        assert_eq!(bucket_index(-600.0), 0);
        assert_eq!(bucket_index(-500.0), 1);
        assert_eq!(bucket_index(-100.01), 2);
        assert_eq!(bucket_index(-0.5), 3);
        assert_eq!(bucket_index(0.0), 4);
        assert_eq!(bucket_index(199.99), 5);
        assert_eq!(bucket_index(500.0), 7);
    }

    #[test]
    fn test_report_generation() {
        let mut switched = sample_run(1, 25.0, StopReason::EndStopProfit);
        switched.dominance_switches = 2;
        switched.wins = 60;
        let runs = vec![
            sample_run(0, -40.0, StopReason::MaxBet),
            switched,
            sample_run(2, 0.0, StopReason::Completed),
            sample_run(3, 10.0, StopReason::MinBet),
        ];

        let report = report_for(runs);
        assert_eq!(report.num_runs, 4);
        assert_eq!(report.winning_runs, 2);
        assert_eq!(report.losing_runs, 1);
        assert_eq!(report.breakeven_runs, 1);
        assert!((report.avg_profit_loss - (-1.25)).abs() < 1e-9);
        assert_eq!(report.best_run.map(|b| b.run_index), Some(1));
        assert_eq!(report.worst_run.map(|b| b.run_index), Some(0));
        assert_eq!(report.stop_count(StopReason::MaxBet), 1);
        assert_eq!(report.stop_count(StopReason::Bankruptcy), 0);

        // wins: 50, 60, 50, 50
        assert!((report.mean_wins - 52.5).abs() < 1e-9);
        assert_eq!(report.median_wins, 50.0);

        assert_eq!(report.switched_runs, 1);
        assert_eq!(report.profitable_runs, 2);
        assert_eq!(report.switched_and_profitable, 1);
        assert_eq!(report.profitable_given_switch_pct(), 100.0);
        // one of the three non-switching runs made money
        assert!((report.profitable_given_no_switch_pct() - 100.0 / 3.0).abs() < 1e-9);

        let counts: Vec<u32> = report.profit_buckets.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![0, 0, 0, 1, 3, 0, 0, 0]);
    }

    #[test]
    fn test_median_of_even_count_averages_middle() {
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(vec![]), 0.0);
    }

    #[test]
    fn test_empty_report() {
        let report = report_for(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_profit_loss, 0.0);
        assert!(report.best_run.is_none());
        assert!(report.to_text().contains("Runs: 0 total"));
    }

    #[test]
    fn test_text_and_json_output() {
        let report = report_for(vec![
            sample_run(0, -40.0, StopReason::MaxBet),
            sample_run(1, 600.0, StopReason::EndStopProfit),
        ]);
        let text = report.to_text();
        assert!(text.contains("STOP REASONS"));
        assert!(text.contains("Reached maximum bet"));
        assert!(text.contains("> $500"));
        assert!(text.contains("█"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["num_runs"], 2);
        assert_eq!(json["stop_reasons"]["max_bet"], 1);
        assert!(json.get("run_stats").is_none());
    }
}
