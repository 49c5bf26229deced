//! Property tests for the wheel, payouts and the adjustment table

use partage::bets::{payout, Bet, BetKind};
use partage::strategy::AdjustmentTable;
use partage::wheel::{color_of, Color, Wheel};
use proptest::prelude::*;

#[test]
fn test_color_partition() {
    let count = |c: Color| (0..=36u8).filter(|&n| color_of(n) == c).count();
    assert_eq!(count(Color::Red), 18);
    assert_eq!(count(Color::Black), 18);
    assert_eq!(count(Color::Green), 1);
}

#[test]
fn test_table_steps_never_shrink() {
    let table = AdjustmentTable::default();
    let mut bet = table.min_bet();
    let mut last_step = 0.0;
    while bet < table.max_bet() {
        let step = table.step_for(bet).unwrap();
        assert!(step >= last_step);
        let next = table.increase(bet).unwrap();
        assert!(next > bet);
        last_step = step;
        bet = next;
    }
    assert_eq!(bet, 20.00);
}

#[test]
fn test_decrease_boundary_asymmetry() {
    let table = AdjustmentTable::default();
    assert_eq!(table.decrease(1.00).unwrap(), 0.90);
    assert_eq!(table.decrease(1.40).unwrap(), 1.20);
    assert!(table.increase(0.10).is_err());
    assert!(table.increase(25.00).is_err());
    assert!(table.increase(0.95).is_err());
}

proptest! {
    #[test]
    fn prop_replay_returns_sequence_mod_len(
        sequence in prop::collection::vec(0u8..=36, 1..50),
        spins in 0usize..200,
    ) {
        let mut wheel = Wheel::replay(sequence.clone()).unwrap();
        for i in 0..spins {
            prop_assert_eq!(wheel.spin(), sequence[i % sequence.len()]);
        }
        prop_assert_eq!(wheel.spin_count(), spins as u64);
        prop_assert_eq!(wheel.history().len(), spins);
    }

    #[test]
    fn prop_zero_halves_even_money_losses(stake in 0.01f64..1000.0) {
        for kind in BetKind::ALL.into_iter().filter(|k| k.is_even_money()) {
            let bet = Bet::outside(kind, stake).unwrap();
            prop_assert_eq!(payout(&bet, 0, true), -stake / 2.0);
            prop_assert_eq!(payout(&bet, 0, false), -stake);
        }
    }

    #[test]
    fn prop_red_bet_wins_on_red_only(outcome in 0u8..=36, stake in 0.2f64..20.0) {
        let bet = Bet::on_color(Color::Red, stake).unwrap();
        let profit = payout(&bet, outcome, true);
        if color_of(outcome) == Color::Red {
            prop_assert_eq!(profit, stake);
        } else {
            prop_assert!(profit < 0.0);
        }
    }
}
