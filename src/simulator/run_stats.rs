//! Per-run results and stop reasons.

use crate::wheel::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal state of a run. Every run starts out running and ends in exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Bankruptcy,
    MinBet,
    MaxBet,
    EqualRedBlackStop,
    EndStopProfit,
    ExtStopProfit,
    Completed,
    /// The bet left the adjustment table; the run was abandoned.
    Aborted,
}

impl StopReason {
    pub const ALL: [StopReason; 8] = [
        StopReason::Completed,
        StopReason::MinBet,
        StopReason::MaxBet,
        StopReason::Bankruptcy,
        StopReason::EqualRedBlackStop,
        StopReason::EndStopProfit,
        StopReason::ExtStopProfit,
        StopReason::Aborted,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StopReason::Bankruptcy => "bankruptcy",
            StopReason::MinBet => "min_bet",
            StopReason::MaxBet => "max_bet",
            StopReason::EqualRedBlackStop => "equal_red_black_stop",
            StopReason::EndStopProfit => "end_stop_profit",
            StopReason::ExtStopProfit => "ext_stop_profit",
            StopReason::Completed => "completed",
            StopReason::Aborted => "aborted",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StopReason::Bankruptcy => "Bankruptcy (insufficient funds)",
            StopReason::MinBet => "Reached minimum bet",
            StopReason::MaxBet => "Reached maximum bet",
            StopReason::EqualRedBlackStop => "Red/black even while ahead",
            StopReason::EndStopProfit => "Profit at end of budget",
            StopReason::ExtStopProfit => "More wins than losses at end of budget",
            StopReason::Completed => "Completed all spins",
            StopReason::Aborted => "Aborted (bet outside table)",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single run, frozen once the run stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub run_index: u32,
    pub final_bankroll: f64,
    pub profit_loss: f64,
    pub spins_completed: u64,
    pub stop_reason: StopReason,
    pub wins: u32,
    pub losses: u32,
    pub final_bet: f64,
    pub final_target: Color,
    pub dominance_switches: u32,
    pub early_floor_switches: u32,
    pub red_count: u64,
    pub black_count: u64,
    pub zero_count: u64,
    /// Error that aborted the run, if any.
    pub error: Option<String>,
}

impl RunStats {
    pub fn switch_count(&self) -> u32 {
        self.dominance_switches + self.early_floor_switches
    }

    pub fn switched(&self) -> bool {
        self.switch_count() > 0
    }

    pub fn is_profitable(&self) -> bool {
        self.profit_loss > 0.0
    }

    /// One-line summary for per-run output.
    pub fn summary_line(&self) -> String {
        format!(
            "Run #{:4} | Spins {:3} | Bankroll ${:8.2} | P/L {:+8.2} | Bet ${:5.2} | W/L {:3}/{:<3} | Switches {:2} | {}",
            self.run_index + 1,
            self.spins_completed,
            self.final_bankroll,
            self.profit_loss,
            self.final_bet,
            self.wins,
            self.losses,
            self.switch_count(),
            self.stop_reason
        )
    }
}

#[cfg(test)]
pub(crate) fn sample_run(run_index: u32, profit_loss: f64, stop_reason: StopReason) -> RunStats {
    RunStats {
        run_index,
        final_bankroll: 1000.0 + profit_loss,
        profit_loss,
        spins_completed: 100,
        stop_reason,
        wins: 50,
        losses: 50,
        final_bet: 1.0,
        final_target: Color::Red,
        dominance_switches: 0,
        early_floor_switches: 0,
        red_count: 49,
        black_count: 48,
        zero_count: 3,
        error: None,
    }
}
