use std::f64::consts::PI;

use super::clock::{SUNRISE_HOUR, TimeOfDay};
use super::types::WeatherCondition;

/// Solar multiplier under a clear sky.
pub const SUNNY_MULTIPLIER: f64 = 1.0;
/// Solar multiplier under any other sky.
pub const OVERCAST_MULTIPLIER: f64 = 0.6;

/// Returns the output multiplier for the given sky condition.
pub fn weather_multiplier(condition: WeatherCondition) -> f64 {
    if condition.is_sunny() {
        SUNNY_MULTIPLIER
    } else {
        OVERCAST_MULTIPLIER
    }
}

/// Raw solar output in percent of peak, before clamping.
///
/// Follows a half-sine between sunrise and sunset (both inclusive), peaking
/// at 100 at noon, scaled by the weather multiplier. Zero at night.
pub fn raw_output(hour: TimeOfDay, condition: WeatherCondition) -> f64 {
    if !hour.is_daylight() {
        return 0.0;
    }
    let since_sunrise = f64::from(hour.get() - SUNRISE_HOUR);
    (since_sunrise * PI / 12.0).sin() * 100.0 * weather_multiplier(condition)
}

/// Displayed solar output, clamped to `[0, 100]`.
pub fn clamp_output(raw: f64) -> f64 {
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(h: u8) -> TimeOfDay {
        TimeOfDay::new(h).expect("valid hour")
    }

    #[test]
    fn test_noon_sunny_is_full() {
        let out = raw_output(hour(12), WeatherCondition::Sunny);
        assert!((out - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_noon_cloudy_is_sixty() {
        let out = raw_output(hour(12), WeatherCondition::Cloudy);
        assert!((out - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_night_is_zero_regardless_of_weather() {
        for h in [1, 5, 19, 23, 24] {
            assert_eq!(raw_output(hour(h), WeatherCondition::Sunny), 0.0);
            assert_eq!(raw_output(hour(h), WeatherCondition::Cloudy), 0.0);
        }
    }

    #[test]
    fn test_sunrise_is_zero_and_sunset_near_zero() {
        assert_eq!(raw_output(hour(6), WeatherCondition::Sunny), 0.0);
        // sin(pi) is not exactly zero in floating point
        assert!(raw_output(hour(18), WeatherCondition::Sunny).abs() < 1e-9);
    }

    #[test]
    fn test_curve_is_symmetric() {
        let morning = raw_output(hour(9), WeatherCondition::Sunny);
        let afternoon = raw_output(hour(15), WeatherCondition::Sunny);
        assert!((morning - afternoon).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_output() {
        assert_eq!(clamp_output(-1e-12), 0.0);
        assert_eq!(clamp_output(100.000_001), 100.0);
        assert_eq!(clamp_output(42.0), 42.0);
    }
}
