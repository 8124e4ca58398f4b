//! Console driver for the Reef ecosystem simulation.

mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use reef_core::{RunConfig, ScenarioConfig};
use reef_world::Ocean;
use std::path::PathBuf;
use tokio::signal;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, instrument};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to run
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Delay before each tick, in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Seed for the random engine (OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON scenario describing the board size and initial occupants
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Log only; do not print the board
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            num_ticks: self.ticks.unwrap_or(defaults.num_ticks),
            tick_delay_ms: self.delay_ms.unwrap_or(defaults.tick_delay_ms),
            seed: self.seed.or(defaults.seed),
        }
    }

    fn scenario(&self) -> Result<ScenarioConfig> {
        match &self.scenario {
            Some(path) => ScenarioConfig::from_json_file(path)
                .with_context(|| format!("failed to load scenario {}", path.display())),
            None => Ok(ScenarioConfig::default()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    telemetry::init_telemetry()?;

    let run_config = args.run_config();
    let scenario = args.scenario()?;
    let mut ocean = Ocean::from_scenario(&scenario, run_config.seed)
        .context("failed to set up the initial board")?;

    info!(
        width = scenario.world.width,
        height = scenario.world.height,
        num_ticks = run_config.num_ticks,
        tick_delay_ms = run_config.tick_delay_ms,
        seed = ?run_config.seed,
        "Starting Reef simulation"
    );

    if !args.quiet {
        print!("Initial state:\n{}", ocean.grid());
    }

    let interrupted = tokio::select! {
        _ = run(&mut ocean, &run_config, args.quiet) => false,
        _ = shutdown_signal() => true,
    };

    if interrupted {
        info!(ticks = ocean.tick_count(), "Simulation interrupted");
    } else {
        info!(ticks = ocean.tick_count(), census = ?ocean.census(), "Simulation finished");
    }

    Ok(())
}

#[instrument(skip_all, fields(num_ticks = config.num_ticks))]
async fn run(ocean: &mut Ocean, config: &RunConfig, quiet: bool) {
    // A zero period would panic; treat it as "as fast as possible".
    let mut interval = interval(Duration::from_millis(config.tick_delay_ms.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately.
    interval.tick().await;

    for _ in 0..config.num_ticks {
        interval.tick().await;

        let report = ocean.tick();
        let census = ocean.census();

        info!(
            tick = report.tick,
            producers = census.producers,
            grazers = census.grazers,
            predators = census.predators,
            grazers_caught = report.hunt.grazers_caught,
            "Tick"
        );

        if !quiet {
            print!("\nAfter tick {}:\n{}", report.tick, ocean.grid());
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_defaults() {
        let args = Args::parse_from(["reef", "--ticks", "3", "--delay-ms", "0", "--seed", "7"]);
        let config = args.run_config();
        assert_eq!(config.num_ticks, 3);
        assert_eq!(config.tick_delay_ms, 0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_args_default_scenario() {
        let args = Args::parse_from(["reef"]);
        let config = args.run_config();
        assert_eq!(config.num_ticks, 50);
        assert!(config.seed.is_none());
        assert_eq!(args.scenario().unwrap().placements.len(), 5);
    }

    #[test]
    fn test_missing_scenario_file_is_an_error() {
        let args = Args::parse_from(["reef", "--scenario", "/nonexistent/reef.json"]);
        assert!(args.scenario().is_err());
    }

    #[tokio::test]
    async fn test_run_completes_requested_ticks() {
        let mut ocean = Ocean::from_scenario(&ScenarioConfig::default(), Some(1)).unwrap();
        let config = RunConfig {
            num_ticks: 4,
            tick_delay_ms: 1,
            seed: Some(1),
        };
        run(&mut ocean, &config, true).await;
        assert_eq!(ocean.tick_count(), 4);
    }
}
