//! Single streak trial: draw a three-symbol sequence and count streaks.

use crate::constants::POCKETS;
use rand::Rng;

/// One spin of the simplified wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialSymbol {
    /// The color the streak is counted for (18 of 37 pockets).
    Target,
    /// The opposite color (18 of 37 pockets).
    Other,
    /// Zero (1 of 37 pockets). Breaks any streak.
    Neutral,
}

impl TrialSymbol {
    /// Map a pocket number in `1..=37` onto a symbol.
    pub fn from_draw(draw: u32) -> Self {
        match draw {
            1..=18 => TrialSymbol::Target,
            19..=36 => TrialSymbol::Other,
            _ => TrialSymbol::Neutral,
        }
    }
}

/// Draw `spins` symbols.
pub fn draw_trial<R: Rng>(rng: &mut R, spins: u32) -> Vec<TrialSymbol> {
    (0..spins)
        .map(|_| TrialSymbol::from_draw(rng.gen_range(1..=POCKETS as u32)))
        .collect()
}

/// Count non-overlapping runs of `streak_length` target symbols.
///
/// The running length resets after every complete run and on any other
/// symbol, so `2k` targets in a row count twice and `k - 1` count zero.
pub fn count_streaks(symbols: &[TrialSymbol], streak_length: u32) -> u32 {
    if streak_length == 0 {
        return 0;
    }
    let mut streaks = 0;
    let mut current = 0;
    for &symbol in symbols {
        if symbol == TrialSymbol::Target {
            current += 1;
            if current == streak_length {
                streaks += 1;
                current = 0;
            }
        } else {
            current = 0;
        }
    }
    streaks
}
