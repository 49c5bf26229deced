//! Strategy simulation runner.
//!
//! One run advances a bankroll spin by spin until a stop condition fires.
//! A batch runs many independent runs, each with its own wheel, and folds
//! the frozen results into a [`SimReport`].

use super::config::SimConfig;
use super::report::SimReport;
use super::run_stats::{RunStats, StopReason};
use crate::bets::{payout, Bet};
use crate::error::Result;
use crate::strategy::round_cents;
use crate::wheel::{Color, Outcome, Wheel};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where each run's wheel gets its outcomes.
#[derive(Debug, Clone)]
pub enum SpinSource {
    /// Seeded (or entropy-seeded) generator per run.
    Random,
    /// Shared replay sequence. Run `i` starts `i * spins_per_run` numbers in
    /// so runs read different windows; the wheel wraps at the end.
    Replay(Arc<[Outcome]>),
}

impl SpinSource {
    pub fn replay(sequence: Vec<Outcome>) -> Result<Self> {
        let sequence: Arc<[Outcome]> = Arc::from(sequence);
        Wheel::replay_shared(Arc::clone(&sequence), 0)?;
        Ok(SpinSource::Replay(sequence))
    }

    fn wheel_for_run(&self, config: &SimConfig, run_index: u32) -> Result<Wheel> {
        match self {
            SpinSource::Random => Ok(match config.seed {
                Some(seed) => Wheel::seeded(seed.wrapping_add(run_index as u64)),
                None => Wheel::from_entropy(),
            }),
            SpinSource::Replay(sequence) => {
                let offset = (run_index as u64).wrapping_mul(config.spins_per_run) as usize;
                Wheel::replay_shared(Arc::clone(sequence), offset)
            }
        }
    }
}

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig, source: &SpinSource) -> Result<SimReport> {
    config.validate()?;

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut wheel = source.wheel_for_run(config, run_idx)?;
        let run = simulate_single_run(config, &mut wheel, run_idx);

        debug!(
            run = run_idx + 1,
            spins = run.spins_completed,
            bankroll = run.final_bankroll,
            reason = %run.stop_reason,
            "run finished"
        );
        all_runs.push(run);

        if (run_idx + 1) % 100 == 0 {
            info!("Completed {}/{} simulations", run_idx + 1, config.num_runs);
        }
    }

    Ok(SimReport::from_runs(all_runs, config))
}

/// Mutable state of a run in progress.
struct RunState {
    bankroll: f64,
    bet: f64,
    target: Color,
    wins: u32,
    losses: u32,
    dominance_switches: u32,
    early_floor_switches: u32,
}

impl RunState {
    fn new(config: &SimConfig) -> Self {
        Self {
            bankroll: config.starting_bankroll,
            bet: config.starting_bet,
            target: config.target_color,
            wins: 0,
            losses: 0,
            dominance_switches: 0,
            early_floor_switches: 0,
        }
    }

    /// Stop conditions checked before each bet, in precedence order.
    fn pre_spin_stop(&self, config: &SimConfig, wheel: &Wheel) -> Option<StopReason> {
        let spins = wheel.spin_count();
        let budget_reached = spins >= config.spins_per_run;

        if self.bankroll < self.bet {
            return Some(StopReason::Bankruptcy);
        }
        if budget_reached && self.bankroll - config.starting_bankroll > config.profit_threshold {
            return Some(StopReason::EndStopProfit);
        }
        if budget_reached && self.wins > self.losses {
            return Some(StopReason::ExtStopProfit);
        }
        if spins >= config.switching.min_spins
            && wheel.count(Color::Red) == wheel.count(Color::Black)
            && self.bankroll > config.starting_bankroll
        {
            return Some(StopReason::EqualRedBlackStop);
        }
        None
    }

    fn freeze(
        self,
        config: &SimConfig,
        wheel: &Wheel,
        run_index: u32,
        stop_reason: StopReason,
        error: Option<String>,
    ) -> RunStats {
        RunStats {
            run_index,
            final_bankroll: self.bankroll,
            profit_loss: round_cents(self.bankroll - config.starting_bankroll),
            spins_completed: wheel.spin_count(),
            stop_reason,
            wins: self.wins,
            losses: self.losses,
            final_bet: self.bet,
            final_target: self.target,
            dominance_switches: self.dominance_switches,
            early_floor_switches: self.early_floor_switches,
            red_count: wheel.count(Color::Red),
            black_count: wheel.count(Color::Black),
            zero_count: wheel.count(Color::Green),
            error,
        }
    }
}

/// Simulate one run on `wheel` until a stop condition fires.
///
/// A bet that falls outside the adjustment table aborts the run; the error
/// is kept on the returned stats rather than clamped away.
pub fn simulate_single_run(config: &SimConfig, wheel: &mut Wheel, run_index: u32) -> RunStats {
    let mut state = RunState::new(config);
    let hard_cap = config.spins_per_run.saturating_add(config.extension_spins);

    let (stop_reason, error) = match play_until_stop(config, wheel, &mut state, hard_cap) {
        Ok(reason) => (reason, None),
        Err(e) => {
            warn!(run = run_index + 1, bet = state.bet, "run aborted: {}", e);
            (StopReason::Aborted, Some(e.to_string()))
        }
    };

    state.freeze(config, wheel, run_index, stop_reason, error)
}

fn play_until_stop(
    config: &SimConfig,
    wheel: &mut Wheel,
    state: &mut RunState,
    hard_cap: u64,
) -> Result<StopReason> {
    let table = &config.table;
    let policy = &config.switching;

    loop {
        if let Some(reason) = state.pre_spin_stop(config, wheel) {
            return Ok(reason);
        }
        if wheel.spin_count() >= hard_cap {
            return Ok(StopReason::Completed);
        }

        let wager = Bet::on_color(state.target, state.bet)?;
        let outcome = wheel.spin();
        let profit = payout(&wager, outcome, config.half_loss);
        state.bankroll = round_cents(state.bankroll + profit);

        // Half-loss on zero is still a loss.
        let won = profit > 0.0;
        if won {
            state.wins += 1;
        } else {
            state.losses += 1;
        }

        let next = table.next_bet(state.bet, won)?;
        let spins = wheel.spin_count();

        if won && next <= config.min_bet {
            if let Some(new_target) = policy.early_floor_switch(state.target, spins) {
                debug!(spins, from = %state.target, to = %new_target, "early floor switch");
                state.target = new_target;
                state.bet = config.starting_bet;
                state.early_floor_switches += 1;
                continue;
            }
            state.bet = config.min_bet;
            return Ok(StopReason::MinBet);
        }

        if !won && next >= config.max_bet {
            state.bet = config.max_bet;
            return Ok(StopReason::MaxBet);
        }

        state.bet = next;

        if let Some(new_target) = policy.dominance_switch_on(state.target, wheel) {
            debug!(spins, from = %state.target, to = %new_target, "dominance switch");
            state.target = new_target;
            state.dominance_switches += 1;
        }
    }
}
