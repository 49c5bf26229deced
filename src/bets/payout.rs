//! Payout calculation, including the La Partage half-loss rule.

use super::types::Bet;
use crate::wheel::{Outcome, Wheel};

/// Net profit of `bet` when `outcome` comes up.
///
/// An even-money bet hit by zero loses half its stake when `half_loss` is
/// on; otherwise a winning bet returns `stake * (multiplier - 1)` and a
/// losing one `-stake`.
pub fn payout(bet: &Bet, outcome: Outcome, half_loss: bool) -> f64 {
    if outcome == 0 && half_loss && bet.kind().is_even_money() {
        return -bet.stake() / 2.0;
    }

    if bet.wins(outcome) {
        bet.stake() * (bet.kind().multiplier() as f64 - 1.0)
    } else {
        -bet.stake()
    }
}

/// Spin once and settle several simultaneous bets.
/// Returns the outcome and the summed net profit.
pub fn play_round(wheel: &mut Wheel, bets: &[Bet], half_loss: bool) -> (Outcome, f64) {
    let outcome = wheel.spin();
    let total = bets.iter().map(|bet| payout(bet, outcome, half_loss)).sum();
    (outcome, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bets::types::BetKind;

    #[test]
    fn test_half_loss_on_zero() {
        for kind in BetKind::ALL.iter().filter(|k| k.is_even_money()) {
            let bet = Bet::outside(*kind, 100.0).unwrap();
            assert_eq!(payout(&bet, 0, true), -50.0);
            assert_eq!(payout(&bet, 0, false), -100.0);
        }
    }

    #[test]
    fn test_half_loss_skips_other_bets() {
        let dozen = Bet::outside(BetKind::Dozen1, 20.0).unwrap();
        assert_eq!(payout(&dozen, 0, true), -20.0);
        let straight = Bet::straight(0, 10.0).unwrap();
        assert_eq!(payout(&straight, 0, true), 350.0);
    }

    #[test]
    fn test_wins_and_losses() {
        let red = Bet::outside(BetKind::Red, 10.0).unwrap();
        assert_eq!(payout(&red, 1, true), 10.0);
        assert_eq!(payout(&red, 2, true), -10.0);

        let straight = Bet::straight(17, 10.0).unwrap();
        assert_eq!(payout(&straight, 17, true), 350.0);
        assert_eq!(payout(&straight, 18, true), -10.0);

        let column = Bet::outside(BetKind::Column2, 5.0).unwrap();
        assert_eq!(payout(&column, 5, true), 10.0);
    }

    #[test]
    fn test_play_round_sums_bets() {
        let mut wheel = Wheel::replay(vec![17]).unwrap();
        let bets = vec![
            Bet::outside(BetKind::Black, 5.0).unwrap(),
            Bet::straight(17, 10.0).unwrap(),
            Bet::outside(BetKind::Dozen1, 20.0).unwrap(),
        ];
        let (outcome, total) = play_round(&mut wheel, &bets, true);
        assert_eq!(outcome, 17);
        // black wins 5, straight wins 350, first dozen loses 20
        assert_eq!(total, 335.0);
        assert_eq!(wheel.spin_count(), 1);
    }
}
