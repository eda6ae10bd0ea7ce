//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DashConfig;
use crate::error::Result;

/// Simulated renewable-energy dashboard.
///
/// Without `--config` or `--preset`, the default preset is used.
#[derive(Debug, Parser)]
#[command(name = "energy-dash", version)]
pub struct CliArgs {
    /// Load configuration from a TOML file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Use a built-in preset (default, overcast, heatwave)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Clamp the efficiency score to 0..=100
    #[arg(long)]
    pub clamp_efficiency: bool,

    /// Print ticks to stdout instead of opening the dashboard
    #[arg(long)]
    pub headless: bool,

    /// Number of ticks to run in headless mode
    #[arg(long, default_value_t = 24)]
    pub ticks: usize,

    /// Export headless ticks to CSV
    #[arg(long, value_name = "PATH", requires = "headless")]
    pub telemetry_out: Option<PathBuf>,

    /// Log file used while the dashboard is open
    #[arg(long, value_name = "PATH", default_value = "energy-dash.log")]
    pub log_file: PathBuf,
}

impl CliArgs {
    /// Resolves the configuration: `--config`, then `--preset`, then the
    /// default preset, with command-line overrides applied and validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or preset cannot be loaded or the result
    /// fails validation.
    pub fn load_config(&self) -> Result<DashConfig> {
        let mut cfg = if let Some(path) = &self.config {
            DashConfig::from_toml_file(path)?
        } else if let Some(name) = &self.preset {
            DashConfig::from_preset(name)?
        } else {
            DashConfig::standard()
        };

        if let Some(seed) = self.seed {
            cfg.simulation.seed = seed;
        }
        if self.clamp_efficiency {
            cfg.simulation.clamp_efficiency = true;
        }

        cfg.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::sim::types::WeatherCondition;

    fn parse(args: &[&str]) -> std::result::Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("energy-dash").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]).expect("no args should parse");
        assert!(!cli.headless);
        assert_eq!(cli.ticks, 24);
        assert_eq!(cli.log_file, PathBuf::from("energy-dash.log"));
        let cfg = cli.load_config().expect("default config loads");
        assert_eq!(cfg, DashConfig::standard());
    }

    #[test]
    fn preset_and_overrides() {
        let cli = parse(&["--preset", "overcast", "--seed", "9", "--clamp-efficiency"])
            .expect("should parse");
        let cfg = cli.load_config().expect("preset loads");
        assert_eq!(cfg.weather.condition, WeatherCondition::Cloudy);
        assert_eq!(cfg.simulation.seed, 9);
        assert!(cfg.simulation.clamp_efficiency);
    }

    #[test]
    fn config_and_preset_conflict() {
        assert!(parse(&["--config", "a.toml", "--preset", "default"]).is_err());
    }

    #[test]
    fn telemetry_requires_headless() {
        assert!(parse(&["--telemetry-out", "out.csv"]).is_err());
        assert!(parse(&["--headless", "--telemetry-out", "out.csv"]).is_ok());
    }

    #[test]
    fn unknown_preset_is_reported() {
        let cli = parse(&["--preset", "bogus"]).expect("should parse");
        assert!(matches!(
            cli.load_config(),
            Err(DashError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn bad_seed_rejected() {
        assert!(parse(&["--seed", "-3"]).is_err());
    }
}
