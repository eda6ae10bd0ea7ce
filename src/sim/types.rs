//! Core dashboard types: the simulated snapshot and its parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::clock::TimeOfDay;

/// Sky condition. Only [`WeatherCondition::Sunny`] is ever checked by the
/// simulation math; every other condition is treated alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    /// Clear sky, full solar multiplier.
    Sunny,
    /// Overcast sky, reduced solar multiplier.
    Cloudy,
}

impl WeatherCondition {
    /// Returns `true` for a sunny sky.
    pub fn is_sunny(self) -> bool {
        matches!(self, Self::Sunny)
    }

    /// Lowercase name used in config files and CSV output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rooftop solar generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarState {
    /// Output as a percentage of peak (0–100).
    pub output: f64,
}

/// Home battery (Powerwall) storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryState {
    /// State of charge in percent (0–100).
    pub charge: f64,
}

/// Electric vehicle. Illustrative only; the loop never advances it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// State of charge in percent (0–100).
    pub charge: f64,
}

/// Local weather read-out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherState {
    /// Air temperature (°F). Unbounded.
    pub temperature: f64,
    /// Sky condition, fixed after initialization.
    pub condition: WeatherCondition,
    /// Relative humidity in percent, kept within [30, 70].
    pub humidity: f64,
    /// Wind speed (mph), kept within [0, 15].
    pub wind_speed: f64,
}

/// Household power draw. Static in this version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUsage {
    /// Home consumption (kW).
    pub home: f64,
    /// Vehicle charging draw (kW).
    pub car: f64,
    /// Total draw (kW); drives the battery drift.
    pub total: f64,
}

/// Running totals accrued while the panels produce.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CumulativeStats {
    /// Energy generated (kWh).
    pub energy_saved: f64,
    /// Carbon avoided (tons).
    pub co2_reduced: f64,
    /// Grid cost avoided (USD).
    pub money_saved: f64,
}

/// Fleet-wide aggregate read-outs shown in the hero banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalStats {
    /// Installed Powerwall count (display constant).
    pub total_powerwall: u64,
    /// Installed Solar Roof count (display constant).
    pub total_solar_roof: u64,
    /// Vehicle fleet size (display constant).
    pub total_vehicles: u64,
    /// Aggregate output (GW), random-walked each tick.
    pub global_output: f64,
    /// Aggregate CO₂ offset (Mt), increases every tick.
    pub co2_offset: f64,
}

/// Full set of simulated metrics at one point in time.
///
/// Produced by [`crate::sim::engine::advance`] and consumed read-only by
/// the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Number of ticks applied since start.
    pub tick: u64,
    pub hour: TimeOfDay,
    pub solar: SolarState,
    pub battery: BatteryState,
    pub vehicle: VehicleState,
    pub weather: WeatherState,
    pub usage: PowerUsage,
    pub stats: CumulativeStats,
    /// System efficiency in percent.
    pub efficiency: i32,
    pub global: GlobalStats,
}

impl Default for Snapshot {
    /// Initial values shown when the dashboard first opens.
    fn default() -> Self {
        Self {
            tick: 0,
            hour: TimeOfDay::NOON,
            solar: SolarState { output: 0.0 },
            battery: BatteryState { charge: 50.0 },
            vehicle: VehicleState { charge: 70.0 },
            weather: WeatherState {
                temperature: 72.0,
                condition: WeatherCondition::Sunny,
                humidity: 45.0,
                wind_speed: 8.0,
            },
            usage: PowerUsage {
                home: 2.4,
                car: 7.6,
                total: 10.0,
            },
            stats: CumulativeStats::default(),
            efficiency: 92,
            global: GlobalStats {
                total_powerwall: 458_932,
                total_solar_roof: 234_567,
                total_vehicles: 987_654,
                global_output: 4.5,
                co2_offset: 12.3,
            },
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick={:>4} {} | solar={:>5.1}%  battery={:>5.1}%  ev={:>5.1}% | \
             {:.1}°F {} hum={:.1}% wind={:.1}mph | eff={}% | \
             saved={:.1}kWh co2={:.2}t ${:.2} | global={:.2}GW offset={:.2}Mt",
            self.tick,
            self.hour,
            self.solar.output,
            self.battery.charge,
            self.vehicle.charge,
            self.weather.temperature,
            self.weather.condition,
            self.weather.humidity,
            self.weather.wind_speed,
            self.efficiency,
            self.stats.energy_saved,
            self.stats.co2_reduced,
            self.stats.money_saved,
            self.global.global_output,
            self.global.co2_offset,
        )
    }
}
