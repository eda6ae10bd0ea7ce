//! Energy dashboard entry point: CLI wiring and mode selection.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::{debug, info};

use energy_dash::cli::CliArgs;
use energy_dash::config::DashConfig;
use energy_dash::io::export::TickWriter;
use energy_dash::sim::engine::Simulation;
use energy_dash::sim::random::seeded;
use energy_dash::{Result, telemetry};

/// Runs a fixed number of ticks, printing one line per tick as it is produced.
///
/// A closed stdout ends the run early without error.
fn run_headless(cli: &CliArgs, cfg: &DashConfig) -> Result<()> {
    let mut sim = Simulation::from_config(cfg);
    let mut rng = seeded(cfg.simulation.seed);

    info!(
        ticks = cli.ticks,
        seed = cfg.simulation.seed,
        policy = ?cfg.efficiency_policy(),
        "headless run"
    );

    let mut telemetry = match &cli.telemetry_out {
        Some(path) => Some(TickWriter::create(path)?),
        None => None,
    };

    let mut out = io::stdout().lock();
    for _ in 0..cli.ticks {
        let snapshot = sim.tick(&mut rng);
        if let Some(w) = telemetry.as_mut() {
            w.write(snapshot)?;
        }
        if stdout_closed(writeln!(out, "{snapshot}"))? {
            debug!(tick = snapshot.tick, "stdout closed, stopping");
            break;
        }
    }
    stdout_closed(out.flush())?;

    if let (Some(w), Some(path)) = (telemetry, &cli.telemetry_out) {
        let rows = w.finish()?;
        info!(path = %path.display(), rows, "telemetry written");
    }
    Ok(())
}

/// Maps a broken pipe to `Ok(true)` and passes other results through.
fn stdout_closed(result: io::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(true),
        Err(e) => Err(e.into()),
    }
}

#[cfg(feature = "tui")]
fn run_dashboard(cli: &CliArgs, cfg: &DashConfig) -> Result<()> {
    let _guard = telemetry::init_file(&cli.log_file)?;
    energy_dash::tui::run(cfg)
}

#[cfg(not(feature = "tui"))]
fn run_dashboard(cli: &CliArgs, cfg: &DashConfig) -> Result<()> {
    telemetry::init_stderr();
    tracing::warn!("built without the `tui` feature; running headless");
    run_headless(cli, cfg)
}

fn run(cli: &CliArgs) -> Result<()> {
    let cfg = cli.load_config()?;
    if cli.headless {
        telemetry::init_stderr();
        run_headless(cli, &cfg)
    } else {
        run_dashboard(cli, &cfg)
    }
}

fn main() {
    let cli = CliArgs::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
