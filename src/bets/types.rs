//! Bet categories and bet values.

use crate::error::{Result, SimError};
use crate::wheel::types::{color_of, is_valid_outcome, Color, Outcome};
use serde::{Deserialize, Serialize};

/// The seventeen bet categories on a French layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetKind {
    // Inside bets
    Straight,
    Split,
    Street,
    Corner,
    Line,
    // Outside bets
    Red,
    Black,
    Even,
    Odd,
    Low,
    High,
    Dozen1,
    Dozen2,
    Dozen3,
    Column1,
    Column2,
    Column3,
}

impl BetKind {
    pub const ALL: [BetKind; 17] = [
        BetKind::Straight,
        BetKind::Split,
        BetKind::Street,
        BetKind::Corner,
        BetKind::Line,
        BetKind::Red,
        BetKind::Black,
        BetKind::Even,
        BetKind::Odd,
        BetKind::Low,
        BetKind::High,
        BetKind::Dozen1,
        BetKind::Dozen2,
        BetKind::Dozen3,
        BetKind::Column1,
        BetKind::Column2,
        BetKind::Column3,
    ];

    /// Payout ratio including the returned stake (35:1 is 36).
    pub fn multiplier(self) -> u32 {
        match self {
            BetKind::Straight => 36,
            BetKind::Split => 18,
            BetKind::Street => 12,
            BetKind::Corner => 9,
            BetKind::Line => 6,
            BetKind::Dozen1
            | BetKind::Dozen2
            | BetKind::Dozen3
            | BetKind::Column1
            | BetKind::Column2
            | BetKind::Column3 => 3,
            BetKind::Red
            | BetKind::Black
            | BetKind::Even
            | BetKind::Odd
            | BetKind::Low
            | BetKind::High => 2,
        }
    }

    /// Even-money bets are the ones the half-loss rule applies to.
    pub fn is_even_money(self) -> bool {
        matches!(
            self,
            BetKind::Red
                | BetKind::Black
                | BetKind::Even
                | BetKind::Odd
                | BetKind::Low
                | BetKind::High
        )
    }

    /// How many numbers an inside bet must cover. `None` for outside bets.
    pub fn inside_size(self) -> Option<usize> {
        match self {
            BetKind::Straight => Some(1),
            BetKind::Split => Some(2),
            BetKind::Street => Some(3),
            BetKind::Corner => Some(4),
            BetKind::Line => Some(6),
            _ => None,
        }
    }

    /// Even-money color bet for a target color.
    pub fn for_color(color: Color) -> Option<Self> {
        match color {
            Color::Red => Some(BetKind::Red),
            Color::Black => Some(BetKind::Black),
            Color::Green => None,
        }
    }

    /// Winning predicate for outside bets. Inside bets need their numbers,
    /// see [`Bet::wins`].
    fn outside_wins(self, outcome: Outcome) -> bool {
        if outcome == 0 {
            return false;
        }
        match self {
            BetKind::Red => color_of(outcome) == Color::Red,
            BetKind::Black => color_of(outcome) == Color::Black,
            BetKind::Even => outcome % 2 == 0,
            BetKind::Odd => outcome % 2 == 1,
            BetKind::Low => (1..=18).contains(&outcome),
            BetKind::High => (19..=36).contains(&outcome),
            BetKind::Dozen1 => (1..=12).contains(&outcome),
            BetKind::Dozen2 => (13..=24).contains(&outcome),
            BetKind::Dozen3 => (25..=36).contains(&outcome),
            BetKind::Column1 => outcome % 3 == 1,
            BetKind::Column2 => outcome % 3 == 2,
            BetKind::Column3 => outcome % 3 == 0,
            BetKind::Straight
            | BetKind::Split
            | BetKind::Street
            | BetKind::Corner
            | BetKind::Line => false,
        }
    }
}

/// A single wager. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bet {
    kind: BetKind,
    stake: f64,
    numbers: Vec<Outcome>,
}

impl Bet {
    /// Outside bet (color, parity, range, dozen, column).
    pub fn outside(kind: BetKind, stake: f64) -> Result<Self> {
        if kind.inside_size().is_some() {
            return Err(SimError::InvalidBet(format!(
                "{:?} is an inside bet and needs numbers",
                kind
            )));
        }
        validate_stake(stake)?;
        Ok(Self {
            kind,
            stake,
            numbers: Vec::new(),
        })
    }

    /// Inside bet covering an explicit set of numbers.
    pub fn inside(kind: BetKind, stake: f64, numbers: Vec<Outcome>) -> Result<Self> {
        let expected = kind.inside_size().ok_or_else(|| {
            SimError::InvalidBet(format!("{:?} is an outside bet and takes no numbers", kind))
        })?;
        if numbers.len() != expected {
            return Err(SimError::InvalidBet(format!(
                "{:?} covers {} numbers, got {}",
                kind,
                expected,
                numbers.len()
            )));
        }
        if let Some(&bad) = numbers.iter().find(|&&n| !is_valid_outcome(n as i64)) {
            return Err(SimError::InvalidOutcome(bad as i64));
        }
        validate_stake(stake)?;
        Ok(Self {
            kind,
            stake,
            numbers,
        })
    }

    pub fn straight(number: Outcome, stake: f64) -> Result<Self> {
        Self::inside(BetKind::Straight, stake, vec![number])
    }

    /// Even-money bet on red or black.
    pub fn on_color(color: Color, stake: f64) -> Result<Self> {
        let kind = BetKind::for_color(color)
            .ok_or_else(|| SimError::InvalidBet("cannot bet on green as a color".to_string()))?;
        Self::outside(kind, stake)
    }

    pub fn kind(&self) -> BetKind {
        self.kind
    }

    pub fn stake(&self) -> f64 {
        self.stake
    }

    pub fn numbers(&self) -> &[Outcome] {
        &self.numbers
    }

    /// Whether `outcome` satisfies this bet's winning condition.
    pub fn wins(&self, outcome: Outcome) -> bool {
        match self.kind.inside_size() {
            Some(_) => self.numbers.contains(&outcome),
            None => self.kind.outside_wins(outcome),
        }
    }
}

fn validate_stake(stake: f64) -> Result<()> {
    if stake.is_finite() && stake > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidBet(format!(
            "stake must be positive, got {}",
            stake
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_even_money_kinds() {
        let even: Vec<_> = BetKind::ALL.iter().filter(|k| k.is_even_money()).collect();
        assert_eq!(even.len(), 6);
        for kind in even {
            assert_eq!(kind.multiplier(), 2);
        }
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(BetKind::Straight.multiplier(), 36);
        assert_eq!(BetKind::Split.multiplier(), 18);
        assert_eq!(BetKind::Street.multiplier(), 12);
        assert_eq!(BetKind::Corner.multiplier(), 9);
        assert_eq!(BetKind::Line.multiplier(), 6);
        assert_eq!(BetKind::Dozen2.multiplier(), 3);
        assert_eq!(BetKind::Column3.multiplier(), 3);
    }

    #[test]
    fn test_zero_never_wins_outside() {
        for kind in BetKind::ALL.iter().filter(|k| k.inside_size().is_none()) {
            let bet = Bet::outside(*kind, 1.0).unwrap();
            assert!(!bet.wins(0), "{:?} should lose on zero", kind);
        }
    }

    #[test]
    fn test_outside_predicates() {
        let win = |kind, n| Bet::outside(kind, 1.0).unwrap().wins(n);
        assert!(win(BetKind::Red, 1));
        assert!(!win(BetKind::Red, 2));
        assert!(win(BetKind::Black, 2));
        assert!(win(BetKind::Even, 36));
        assert!(win(BetKind::Odd, 35));
        assert!(win(BetKind::Low, 18));
        assert!(!win(BetKind::Low, 19));
        assert!(win(BetKind::High, 19));
        assert!(win(BetKind::Dozen1, 12));
        assert!(win(BetKind::Dozen2, 13));
        assert!(win(BetKind::Dozen3, 36));
        assert!(win(BetKind::Column1, 34));
        assert!(win(BetKind::Column2, 35));
        assert!(win(BetKind::Column3, 36));
        assert!(!win(BetKind::Column3, 34));
    }

    #[test]
    fn test_inside_bet_matches_numbers() {
        let bet = Bet::inside(BetKind::Corner, 5.0, vec![1, 2, 4, 5]).unwrap();
        assert!(bet.wins(4));
        assert!(!bet.wins(3));
        let zero = Bet::straight(0, 1.0).unwrap();
        assert!(zero.wins(0));
    }

    #[test]
    fn test_inside_bet_validation() {
        assert!(Bet::inside(BetKind::Split, 1.0, vec![1]).is_err());
        assert!(Bet::inside(BetKind::Straight, 1.0, vec![37]).is_err());
        assert!(Bet::inside(BetKind::Red, 1.0, vec![1]).is_err());
        assert!(Bet::outside(BetKind::Line, 1.0).is_err());
    }

    #[test]
    fn test_stake_validation() {
        assert!(Bet::outside(BetKind::Red, 0.0).is_err());
        assert!(Bet::outside(BetKind::Red, -1.0).is_err());
        assert!(Bet::outside(BetKind::Red, f64::NAN).is_err());
    }

    #[test]
    fn test_cannot_bet_on_green() {
        assert!(Bet::on_color(Color::Green, 1.0).is_err());
        assert_eq!(Bet::on_color(Color::Black, 1.0).unwrap().kind(), BetKind::Black);
    }
}
