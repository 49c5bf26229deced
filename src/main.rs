//! Partage CLI.
//!
//! Usage:
//!   partage simulate [OPTIONS]     # La Partage strategy batch
//!   partage streaks [OPTIONS]      # Streak probability estimate
//!   partage fetch [OPTIONS]        # Save random numbers to CSV
//!
//! Examples:
//!   partage simulate -n 100 --seed 42
//!   partage simulate --replay random_numbers.csv --per-run
//!   partage streaks --trials 30000 --spins 100 --length 7
//!   partage fetch --batches 10 --output random_numbers.csv

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use partage::random_source::{
    collect_numbers, read_numbers_csv, write_numbers_csv, LocalSource, NumberSource,
    RandomOrgSource,
};
use partage::simulator::{run_simulation, SimConfig, SpinSource, StreakConfig};
use partage::streaks::estimate;
use partage::strategy::SwitchPolicy;
use partage::wheel::{Color, Outcome};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-zero roulette strategy lab", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a batch of strategy simulations
    Simulate(SimulateArgs),
    /// Estimate multiple-streak probabilities
    Streaks(StreakArgs),
    /// Fetch random numbers and save them to CSV
    Fetch(FetchArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum TargetArg {
    Red,
    Black,
}

impl From<TargetArg> for Color {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Red => Color::Red,
            TargetArg::Black => Color::Black,
        }
    }
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short = 'n', long)]
    runs: Option<u32>,

    #[arg(long)]
    spins: Option<u64>,

    /// Extra spins allowed past the budget while waiting for a profit stop
    #[arg(long)]
    extension: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    bankroll: Option<f64>,

    #[arg(long)]
    bet: Option<f64>,

    #[arg(long)]
    min_bet: Option<f64>,

    #[arg(long)]
    max_bet: Option<f64>,

    /// Dominance ratio that flips the target color
    #[arg(long)]
    ratio: Option<f64>,

    /// Net profit required for the end-of-budget profit stop
    #[arg(long)]
    profit_threshold: Option<f64>,

    #[arg(long, value_enum)]
    target: Option<TargetArg>,

    /// Disable both color-switch heuristics
    #[arg(long)]
    no_switch: bool,

    /// Even-money bets lose the full stake on zero
    #[arg(long)]
    no_half_loss: bool,

    /// Replay outcomes from a CSV written by `fetch`
    #[arg(long, conflicts_with = "remote")]
    replay: Option<PathBuf>,

    /// Replay freshly fetched random.org numbers (number of batches)
    #[arg(long)]
    remote: Option<u32>,

    /// Print one line per run
    #[arg(long)]
    per_run: bool,

    /// Also save the report as timestamped JSON
    #[arg(long)]
    json: bool,
}

impl SimulateArgs {
    fn build_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(runs) = self.runs {
            config.num_runs = runs;
        }
        if let Some(spins) = self.spins {
            config.spins_per_run = spins;
        }
        if let Some(extension) = self.extension {
            config.extension_spins = extension;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(bankroll) = self.bankroll {
            config.starting_bankroll = bankroll;
        }
        if let Some(bet) = self.bet {
            config.starting_bet = bet;
        }
        if let Some(min_bet) = self.min_bet {
            config.min_bet = min_bet;
        }
        if let Some(max_bet) = self.max_bet {
            config.max_bet = max_bet;
        }
        if let Some(ratio) = self.ratio {
            config.switching.ratio_threshold = ratio;
        }
        if let Some(threshold) = self.profit_threshold {
            config.profit_threshold = threshold;
        }
        if let Some(target) = self.target {
            config.target_color = target.into();
        }
        if self.no_switch {
            config.switching = SwitchPolicy {
                ratio_threshold: config.switching.ratio_threshold,
                ..SwitchPolicy::disabled()
            };
        }
        if self.no_half_loss {
            config.half_loss = false;
        }

        config.validate().context("invalid simulation config")?;
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct StreakArgs {
    #[arg(long)]
    trials: Option<u32>,

    #[arg(long)]
    spins: Option<u32>,

    /// Streak length to count
    #[arg(long)]
    length: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct FetchArgs {
    #[arg(long, default_value_t = 10)]
    batches: u32,

    #[arg(short, long, default_value = "random_numbers.csv")]
    output: PathBuf,

    /// Use the local generator instead of random.org
    #[arg(long)]
    local: bool,

    /// Seed for the local generator
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::WARN
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn local_source(seed: Option<u64>) -> LocalSource {
    match seed {
        Some(seed) => LocalSource::seeded(seed),
        None => LocalSource::from_entropy(),
    }
}

/// Fetch from random.org, falling back to the local generator on failure.
fn fetch_with_fallback(batches: u32, seed: Option<u64>) -> Result<Vec<Outcome>> {
    let mut remote = RandomOrgSource::new();
    match collect_numbers(&mut remote, batches) {
        Ok(numbers) => Ok(numbers),
        Err(e) => {
            warn!("{} unavailable ({}), using local generator", remote.name(), e);
            let mut local = local_source(seed);
            collect_numbers(&mut local, batches).context("local generator failed")
        }
    }
}

fn save_json(json: &str) -> Result<PathBuf> {
    let filename = PathBuf::from(format!(
        "sim_report_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::write(&filename, json)
        .with_context(|| format!("failed to write {}", filename.display()))?;
    Ok(filename)
}

fn cmd_simulate(args: &SimulateArgs) -> Result<()> {
    let config = args.build_config()?;

    let source = if let Some(path) = &args.replay {
        let numbers = read_numbers_csv(path)
            .with_context(|| format!("failed to read replay file {}", path.display()))?;
        info!("Replaying {} numbers from {}", numbers.len(), path.display());
        SpinSource::replay(numbers)?
    } else if let Some(batches) = args.remote {
        SpinSource::replay(fetch_with_fallback(batches, config.seed)?)?
    } else {
        SpinSource::Random
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LA PARTAGE STRATEGY SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Spins per Run:  {}", config.spins_per_run);
    if config.extension_spins > 0 {
        println!("  Extension:      {}", config.extension_spins);
    }
    println!("  Bankroll:       ${:.2}", config.starting_bankroll);
    println!(
        "  Bet:            ${:.2} (min ${:.2}, max ${:.2})",
        config.starting_bet, config.min_bet, config.max_bet
    );
    println!("  Target:         {}", config.target_color);
    println!(
        "  Switching:      dominance {}, early floor {} (ratio {:.2})",
        on_off(config.switching.dominance_enabled),
        on_off(config.switching.early_floor_enabled),
        config.switching.ratio_threshold
    );
    println!(
        "  Outcomes:       {}",
        match source {
            SpinSource::Random => "seeded generator",
            SpinSource::Replay(_) => "replay sequence",
        }
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config, &source).context("simulation failed")?;

    if args.per_run {
        for run in &report.run_stats {
            println!("{}", run.summary_line());
        }
        println!();
    }

    println!("{}", report.to_text());

    if args.json {
        let filename = save_json(&report.to_json()?)?;
        println!("JSON report saved to: {}", filename.display());
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

fn cmd_streaks(args: &StreakArgs) -> Result<()> {
    let defaults = StreakConfig::default();
    let config = StreakConfig {
        trials: args.trials.unwrap_or(defaults.trials),
        spins_per_trial: args.spins.unwrap_or(defaults.spins_per_trial),
        streak_length: args.length.unwrap_or(defaults.streak_length),
        seed: args.seed,
    };

    info!(
        "Running {} trials of {} spins (streak length {})...",
        config.trials, config.spins_per_trial, config.streak_length
    );
    let report = estimate(&config).context("streak estimate failed")?;
    println!("{}", report.to_text());
    Ok(())
}

fn cmd_fetch(args: &FetchArgs) -> Result<()> {
    let numbers = if args.local {
        collect_numbers(&mut local_source(args.seed), args.batches)?
    } else {
        fetch_with_fallback(args.batches, args.seed)?
    };
    write_csv(&args.output, &numbers)?;
    println!("Saved {} random numbers to {}", numbers.len(), args.output.display());
    Ok(())
}

fn write_csv(path: &Path, numbers: &[Outcome]) -> Result<()> {
    write_numbers_csv(path, numbers).with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Streaks(args) => cmd_streaks(args),
        Command::Fetch(args) => cmd_fetch(args),
    }
}
