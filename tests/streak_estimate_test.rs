//! Integration test: streak estimate against the analytic value

use partage::simulator::StreakConfig;
use partage::streaks::{estimate, exact_at_least_one, TARGET_PROBABILITY};

/// 30,000 trials of 100 spins, streaks of 7: the estimate of
/// "at least one streak" should sit within a couple of points of the
/// exact probability.
#[test]
fn test_default_estimate_matches_exact_value() {
    let config = StreakConfig {
        seed: Some(2024),
        ..Default::default()
    };
    assert_eq!(config.trials, 30_000);
    assert_eq!(config.spins_per_trial, 100);
    assert_eq!(config.streak_length, 7);

    let report = estimate(&config).unwrap();
    let exact = exact_at_least_one(100, 7, TARGET_PROBABILITY) * 100.0;

    assert!((report.exact_at_least_one_pct - exact).abs() < 1e-12);
    assert!(
        (report.at_least_one_pct() - exact).abs() < 2.0,
        "estimate {:.2}% vs exact {:.2}%",
        report.at_least_one_pct(),
        exact
    );

    // Buckets nest
    assert!(report.at_least_two_pct() <= report.at_least_one_pct());
    assert!(report.at_least_three_pct() <= report.at_least_two_pct());
    assert!(report.four_or_more_pct() <= report.at_least_three_pct());

    let ratio = report.ratio_two_to_one().unwrap();
    assert!(ratio > 0.0 && ratio < 1.0);
}

#[test]
fn test_exact_value_grows_with_spins() {
    let mut last = 0.0;
    for spins in [10, 50, 100, 200, 500] {
        let p = exact_at_least_one(spins, 7, TARGET_PROBABILITY);
        assert!(p > last);
        assert!(p < 1.0);
        last = p;
    }
}

#[test]
fn test_report_text_lists_buckets() {
    let config = StreakConfig {
        trials: 1000,
        spins_per_trial: 60,
        streak_length: 4,
        seed: Some(5),
    };
    let text = estimate(&config).unwrap().to_text();
    for label in ["Zero streaks", "Exactly two", "Four or more", "Exact P(at least one)"] {
        assert!(text.contains(label), "missing {}", label);
    }
}
