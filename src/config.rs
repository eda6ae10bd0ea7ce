//! TOML-based dashboard configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::{DashError, Result};
use crate::sim::clock::TimeOfDay;
use crate::sim::types::{
    BatteryState, CumulativeStats, GlobalStats, PowerUsage, Snapshot, SolarState, VehicleState,
    WeatherCondition, WeatherState,
};
use crate::sim::weather::{EfficiencyPolicy, HUMIDITY_RANGE, WIND_RANGE};

/// Top-level dashboard configuration parsed from TOML.
///
/// All fields have defaults matching the values the dashboard opens with.
/// Load from TOML with [`DashConfig::from_toml_file`] or use
/// [`DashConfig::standard`] for the built-in default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashConfig {
    /// Tick timing and global parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Opening values for the household metrics.
    #[serde(default)]
    pub initial: InitialConfig,
    /// Opening weather.
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Household power draw.
    #[serde(default)]
    pub usage: UsageConfig,
    /// Fleet-wide aggregates.
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Tick timing and global parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Random seed.
    pub seed: u64,
    /// Tick period in milliseconds (must be > 0).
    pub tick_interval_ms: u64,
    /// Saturate the efficiency score to `[0, 100]`.
    pub clamp_efficiency: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_interval_ms: 1000,
            clamp_efficiency: false,
        }
    }
}

/// Opening values for the household metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialConfig {
    /// Hour of day (1–24).
    pub hour: u8,
    /// Solar output (percent).
    pub solar_output: f64,
    /// Powerwall charge (percent).
    pub battery_charge: f64,
    /// Vehicle charge (percent).
    pub vehicle_charge: f64,
    /// Efficiency shown before the first tick (percent).
    pub efficiency: i32,
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            hour: 12,
            solar_output: 0.0,
            battery_charge: 50.0,
            vehicle_charge: 70.0,
            efficiency: 92,
        }
    }
}

/// Opening weather.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherConfig {
    /// Temperature (°F).
    pub temperature: f64,
    /// Sky condition: `"sunny"` or `"cloudy"`.
    pub condition: WeatherCondition,
    /// Relative humidity (30–70 %).
    pub humidity: f64,
    /// Wind speed (0–15 mph).
    pub wind_speed: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature: 72.0,
            condition: WeatherCondition::Sunny,
            humidity: 45.0,
            wind_speed: 8.0,
        }
    }
}

/// Household power draw (kW).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsageConfig {
    pub home_kw: f64,
    pub car_kw: f64,
    pub total_kw: f64,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            home_kw: 2.4,
            car_kw: 7.6,
            total_kw: 10.0,
        }
    }
}

/// Fleet-wide aggregates shown in the banner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    pub total_powerwall: u64,
    pub total_solar_roof: u64,
    pub total_vehicles: u64,
    /// Aggregate output (GW).
    pub global_output: f64,
    /// Aggregate CO₂ offset (Mt).
    pub co2_offset: f64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            total_powerwall: 458_932,
            total_solar_roof: 234_567,
            total_vehicles: 987_654,
            global_output: 4.5,
            co2_offset: 12.3,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"initial.hour"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl DashConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "overcast", "heatwave"];

    /// Returns the standard dashboard: sunny noon, half-full Powerwall.
    pub fn standard() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            initial: InitialConfig::default(),
            weather: WeatherConfig::default(),
            usage: UsageConfig::default(),
            global: GlobalConfig::default(),
        }
    }

    /// Returns the overcast preset: cloudy sky, cooler and more humid.
    pub fn overcast() -> Self {
        Self {
            initial: InitialConfig {
                efficiency: 90,
                ..InitialConfig::default()
            },
            weather: WeatherConfig {
                temperature: 64.0,
                condition: WeatherCondition::Cloudy,
                humidity: 65.0,
                wind_speed: 12.0,
            },
            ..Self::standard()
        }
    }

    /// Returns the heatwave preset: hot late afternoon with light household draw.
    pub fn heatwave() -> Self {
        Self {
            initial: InitialConfig {
                hour: 16,
                battery_charge: 80.0,
                ..InitialConfig::default()
            },
            weather: WeatherConfig {
                temperature: 88.0,
                humidity: 32.0,
                wind_speed: 3.0,
                ..WeatherConfig::default()
            },
            usage: UsageConfig {
                home_kw: 3.1,
                car_kw: 0.0,
                total_kw: 3.1,
            },
            ..Self::standard()
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::UnknownPreset`] if the name is not in [`Self::PRESETS`].
    pub fn from_preset(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::standard()),
            "overcast" => Ok(Self::overcast()),
            "heatwave" => Ok(Self::heatwave()),
            _ => Err(DashError::UnknownPreset {
                name: name.to_string(),
                available: Self::PRESETS.join(", "),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DashError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Efficiency bounding policy selected by this configuration.
    pub fn efficiency_policy(&self) -> EfficiencyPolicy {
        if self.simulation.clamp_efficiency {
            EfficiencyPolicy::Clamped
        } else {
            EfficiencyPolicy::Unclamped
        }
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.simulation.tick_interval_ms == 0 {
            errors.push(ConfigError::new("simulation.tick_interval_ms", "must be > 0"));
        }

        let i = &self.initial;
        if TimeOfDay::new(i.hour).is_none() {
            errors.push(ConfigError::new(
                "initial.hour",
                format!("must be in 1..=24, got {}", i.hour),
            ));
        }
        for (field, value) in [
            ("initial.solar_output", i.solar_output),
            ("initial.battery_charge", i.battery_charge),
            ("initial.vehicle_charge", i.vehicle_charge),
        ] {
            check_range(&mut errors, field, value, 0.0, 100.0);
        }

        let w = &self.weather;
        if !w.temperature.is_finite() {
            errors.push(ConfigError::new("weather.temperature", "must be finite"));
        }
        let (lo, hi) = HUMIDITY_RANGE;
        check_range(&mut errors, "weather.humidity", w.humidity, lo, hi);
        let (lo, hi) = WIND_RANGE;
        check_range(&mut errors, "weather.wind_speed", w.wind_speed, lo, hi);

        let u = &self.usage;
        for (field, value) in [
            ("usage.home_kw", u.home_kw),
            ("usage.car_kw", u.car_kw),
            ("usage.total_kw", u.total_kw),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                errors.push(ConfigError::new(field, format!("must be >= 0, got {value}")));
            }
        }

        let g = &self.global;
        if !g.global_output.is_finite() {
            errors.push(ConfigError::new("global.global_output", "must be finite"));
        }
        if !(g.co2_offset.is_finite() && g.co2_offset >= 0.0) {
            errors.push(ConfigError::new("global.co2_offset", "must be >= 0"));
        }

        errors
    }

    /// Returns the configuration, or every validation error at once.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Invalid`] when [`Self::validate`] finds problems.
    pub fn validated(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(DashError::Invalid(errors))
        }
    }

    /// Builds the opening snapshot described by this configuration.
    ///
    /// An out-of-range hour falls back to noon; call [`Self::validate`] first.
    pub fn initial_snapshot(&self) -> Snapshot {
        let i = &self.initial;
        let w = &self.weather;
        let u = &self.usage;
        let g = &self.global;
        Snapshot {
            tick: 0,
            hour: TimeOfDay::new(i.hour).unwrap_or(TimeOfDay::NOON),
            solar: SolarState {
                output: i.solar_output,
            },
            battery: BatteryState {
                charge: i.battery_charge,
            },
            vehicle: VehicleState {
                charge: i.vehicle_charge,
            },
            weather: WeatherState {
                temperature: w.temperature,
                condition: w.condition,
                humidity: w.humidity,
                wind_speed: w.wind_speed,
            },
            usage: PowerUsage {
                home: u.home_kw,
                car: u.car_kw,
                total: u.total_kw,
            },
            stats: CumulativeStats::default(),
            efficiency: i.efficiency,
            global: GlobalStats {
                total_powerwall: g.total_powerwall,
                total_solar_roof: g.total_solar_roof,
                total_vehicles: g.total_vehicles,
                global_output: g.global_output,
                co2_offset: g.co2_offset,
            },
        }
    }
}

fn check_range(errors: &mut Vec<ConfigError>, field: &str, value: f64, lo: f64, hi: f64) {
    if !(lo..=hi).contains(&value) {
        errors.push(ConfigError::new(
            field,
            format!("must be in {lo}..={hi}, got {value}"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_preset_valid() {
        let cfg = DashConfig::standard();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "standard should be valid: {errors:?}");
    }

    #[test]
    fn standard_matches_default_snapshot() {
        assert_eq!(DashConfig::standard().initial_snapshot(), Snapshot::default());
    }

    #[test]
    fn from_preset_unknown() {
        let err = DashConfig::from_preset("nonexistent");
        assert!(matches!(err, Err(DashError::UnknownPreset { .. })));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in DashConfig::PRESETS {
            let cfg = DashConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn overcast_is_cloudy() {
        let cfg = DashConfig::overcast();
        assert_eq!(cfg.weather.condition, WeatherCondition::Cloudy);
        assert_eq!(cfg.initial_snapshot().weather.condition, WeatherCondition::Cloudy);
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[simulation]
seed = 7
tick_interval_ms = 250
clamp_efficiency = true

[initial]
hour = 6
battery_charge = 20.0

[weather]
temperature = 91.0
condition = "cloudy"
humidity = 55.0
wind_speed = 2.5

[usage]
home_kw = 1.5
car_kw = 0.0
total_kw = 1.5

[global]
global_output = 5.0
"#;
        let cfg = DashConfig::from_toml_str(toml).expect("valid TOML should parse");
        assert_eq!(cfg.simulation.seed, 7);
        assert_eq!(cfg.simulation.tick_interval_ms, 250);
        assert_eq!(cfg.efficiency_policy(), EfficiencyPolicy::Clamped);
        assert_eq!(cfg.initial.hour, 6);
        assert_eq!(cfg.initial.vehicle_charge, 70.0);
        assert_eq!(cfg.weather.condition, WeatherCondition::Cloudy);
        assert_eq!(cfg.global.total_powerwall, 458_932);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[simulation]
seed = 1
bogus_field = true
"#;
        assert!(DashConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn invalid_condition_rejected() {
        let toml = r#"
[weather]
condition = "hail"
"#;
        assert!(matches!(
            DashConfig::from_toml_str(toml),
            Err(DashError::ConfigParse(_))
        ));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let cfg = DashConfig::from_toml_str("[initial]\nhour = 3\n").expect("should parse");
        assert_eq!(cfg.initial.hour, 3);
        assert_eq!(cfg.simulation, SimulationConfig::default());
        assert_eq!(cfg.weather, WeatherConfig::default());
    }

    #[test]
    fn empty_toml_is_standard() {
        let cfg = DashConfig::from_toml_str("").expect("empty should parse");
        assert_eq!(cfg, DashConfig::standard());
    }

    #[test]
    fn validation_catches_bad_hour() {
        let mut cfg = DashConfig::standard();
        cfg.initial.hour = 0;
        assert!(cfg.validate().iter().any(|e| e.field == "initial.hour"));
        cfg.initial.hour = 25;
        assert!(cfg.validate().iter().any(|e| e.field == "initial.hour"));
    }

    #[test]
    fn validation_catches_ranges() {
        let mut cfg = DashConfig::standard();
        cfg.initial.battery_charge = 120.0;
        cfg.weather.humidity = 10.0;
        cfg.weather.wind_speed = 20.0;
        cfg.usage.total_kw = -1.0;
        cfg.simulation.tick_interval_ms = 0;
        let fields: Vec<String> = cfg.validate().into_iter().map(|e| e.field).collect();
        for f in [
            "initial.battery_charge",
            "weather.humidity",
            "weather.wind_speed",
            "usage.total_kw",
            "simulation.tick_interval_ms",
        ] {
            assert!(fields.iter().any(|x| x == f), "missing {f} in {fields:?}");
        }
    }

    #[test]
    fn validated_collects_errors() {
        let mut cfg = DashConfig::standard();
        cfg.initial.hour = 0;
        cfg.weather.humidity = 90.0;
        match cfg.validated() {
            Err(DashError::Invalid(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DashConfig::from_toml_file(Path::new("/nonexistent/dash.toml"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("/nonexistent/dash.toml"));
    }
}
