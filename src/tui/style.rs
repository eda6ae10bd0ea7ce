//! Color constants and helpers for the dashboard.

use ratatui::style::Color;

use crate::view::EfficiencyBand;

/// Solar gauge and chart line color.
pub const SOLAR_COLOR: Color = Color::Yellow;
/// Powerwall gauge and chart line color.
pub const BATTERY_COLOR: Color = Color::Green;
/// Vehicle gauge color.
pub const VEHICLE_COLOR: Color = Color::Blue;
/// Home read-out color.
pub const HOME_COLOR: Color = Color::Magenta;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Region badge color.
pub const REGION_COLOR: Color = Color::LightBlue;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Charging label color while active.
pub const CHARGING_ON: Color = Color::Green;
/// Charging label color while paused.
pub const CHARGING_OFF: Color = Color::Gray;

/// Returns the efficiency read-out color.
pub fn efficiency_color(band: EfficiencyBand) -> Color {
    match band {
        EfficiencyBand::High => Color::Green,
        EfficiencyBand::Medium => Color::Yellow,
        EfficiencyBand::Low => Color::Red,
    }
}

/// Sun icon color: yellow by day, blue at night.
pub fn sky_color(daylight: bool) -> Color {
    if daylight { Color::Yellow } else { Color::Blue }
}

/// Returns `percent` as a gauge ratio.
pub fn ratio(percent: f64) -> f64 {
    (percent / 100.0).clamp(0.0, 1.0)
}
