//! Presentation-side state and read-outs.
//!
//! Everything here is owned by the rendering layer. The simulation never sees
//! [`UiFlags`]; read-outs are pure functions of a [`Snapshot`].

use std::fmt;

use tracing::{debug, info};

use crate::sim::types::Snapshot;

/// Region shown in the selector. Display label only; every region shares
/// the same simulated numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    NorthAmerica,
    Europe,
    AsiaPacific,
    SouthAmerica,
    Africa,
}

impl Region {
    /// Selector order.
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::SouthAmerica,
        Region::Africa,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::SouthAmerica => "South America",
            Self::Africa => "Africa",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Next region in selector order, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous region in selector order, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// UI-only toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiFlags {
    pub selected_region: Region,
    pub show_details: bool,
    /// Drives the Charging/Paused label only.
    pub is_charging: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            selected_region: Region::default(),
            show_details: false,
            is_charging: true,
        }
    }
}

impl UiFlags {
    /// Flips the Charging/Paused label.
    pub fn toggle_charging(&mut self) {
        self.is_charging = !self.is_charging;
        debug!(is_charging = self.is_charging, "charging label toggled");
    }

    /// Shows or hides the supplementary read-outs.
    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
        debug!(show_details = self.show_details, "details toggled");
    }

    pub fn select_region(&mut self, region: Region) {
        self.selected_region = region;
        debug!(region = region.label(), "region selected");
    }

    pub fn charging_label(&self) -> &'static str {
        if self.is_charging { "Charging" } else { "Paused" }
    }

    pub fn details_label(&self) -> &'static str {
        if self.show_details {
            "Hide Details"
        } else {
            "Show Details"
        }
    }

    /// Settings affordance. Logs the request and changes nothing.
    pub fn open_settings(&self) {
        info!("settings requested");
    }
}

/// Peak solar output today (kW), display constant.
pub const PEAK_TODAY_KW: f64 = 7.8;
/// Daily average solar output (kW), display constant.
pub const DAILY_AVERAGE_KW: f64 = 5.2;
/// Powerwall backup reserve (percent), display constant.
pub const BACKUP_RESERVE_PCT: u8 = 20;
/// Vehicle charging rate (miles of range per hour), display constant.
pub const CHARGING_RATE_MPH: u8 = 48;
/// Miles of range per percent of vehicle charge.
pub const MILES_PER_PERCENT: f64 = 3.5;

/// Static next-24-hours forecast lines shown with the details.
pub const FORECAST: [(&str, &str); 3] = [
    ("Expected Generation", "45.2 kWh"),
    ("Estimated Usage", "38.7 kWh"),
    ("Grid Dependency", "12%"),
];

/// Static optimization tips shown with the details.
pub const TIPS: [&str; 3] = [
    "Best charging time: 10:00 AM - 2:00 PM",
    "Peak production expected: 12:30 PM",
    "Suggested backup reserve: 30%",
];

/// Colour band for the efficiency read-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyBand {
    High,
    Medium,
    Low,
}

impl EfficiencyBand {
    /// Above 95 is high, above 90 medium, anything else low.
    pub fn of(efficiency: i32) -> Self {
        if efficiency > 95 {
            Self::High
        } else if efficiency > 90 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Hours until the Powerwall is full at ten percent per hour.
pub fn time_to_full_hours(battery_charge: f64) -> u32 {
    ((100.0 - battery_charge) / 10.0).ceil().max(0.0) as u32
}

/// Estimated vehicle range in miles.
pub fn vehicle_range_miles(vehicle_charge: f64) -> u32 {
    (vehicle_charge * MILES_PER_PERCENT).round().max(0.0) as u32
}

/// Formatted read-outs derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub clock: String,
    pub daylight: bool,
    pub temperature_f: i64,
    pub wind_mph: i64,
    pub humidity_pct: i64,
    pub efficiency_band: EfficiencyBand,
    pub solar_pct: i64,
    pub solar_kw: f64,
    pub battery_pct: i64,
    pub storage_kwh: f64,
    pub vehicle_pct: i64,
    pub time_to_full_hours: u32,
    pub vehicle_range_miles: u32,
}

impl Readouts {
    pub fn from_snapshot(s: &Snapshot) -> Self {
        Self {
            clock: s.hour.to_string(),
            daylight: s.hour.is_daylight(),
            temperature_f: s.weather.temperature.round() as i64,
            wind_mph: s.weather.wind_speed.round() as i64,
            humidity_pct: s.weather.humidity.round() as i64,
            efficiency_band: EfficiencyBand::of(s.efficiency),
            solar_pct: s.solar.output.round() as i64,
            solar_kw: s.solar.output / 10.0,
            battery_pct: s.battery.charge.round() as i64,
            storage_kwh: s.battery.charge / 10.0,
            vehicle_pct: s.vehicle.charge.round() as i64,
            time_to_full_hours: time_to_full_hours(s.battery.charge),
            vehicle_range_miles: vehicle_range_miles(s.vehicle.charge),
        }
    }
}

/// Formats a count with thousands separators, e.g. `458,932`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
