//! Weather perturbation and system efficiency scoring.

use super::random::RandomSource;
use super::types::WeatherState;

/// Probability per tick that the weather shifts.
pub const PERTURB_PROBABILITY: f64 = 0.10;
/// Humidity range (percent).
pub const HUMIDITY_RANGE: (f64, f64) = (30.0, 70.0);
/// Wind speed range (mph).
pub const WIND_RANGE: (f64, f64) = (0.0, 15.0);
/// Temperature (°F) above which panels lose efficiency.
pub const HOT_THRESHOLD_F: f64 = 85.0;

/// How the efficiency score is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EfficiencyPolicy {
    /// Report the formula result as-is.
    #[default]
    Unclamped,
    /// Saturate the score to `[0, 100]`.
    Clamped,
}

/// Possibly perturbs the weather.
///
/// Draws the gate first; only when it passes are the temperature, humidity
/// and wind draws taken, in that order. The sky condition never changes.
pub fn perturb(weather: &WeatherState, rng: &mut impl RandomSource) -> WeatherState {
    let mut next = *weather;
    if !rng.chance(PERTURB_PROBABILITY) {
        return next;
    }
    next.temperature += rng.uniform(-1.0, 1.0);
    let (lo, hi) = HUMIDITY_RANGE;
    next.humidity = (next.humidity + rng.uniform(-2.0, 2.0)).clamp(lo, hi);
    let (lo, hi) = WIND_RANGE;
    next.wind_speed = (next.wind_speed + rng.uniform(-1.0, 1.0)).clamp(lo, hi);
    next
}

/// Efficiency score in percent for the given weather.
///
/// `90`, plus `5` when sunny, minus `3` above 85 °F.
pub fn efficiency(weather: &WeatherState, policy: EfficiencyPolicy) -> i32 {
    let mut score = 90.0;
    if weather.condition.is_sunny() {
        score += 5.0;
    }
    if weather.temperature > HOT_THRESHOLD_F {
        score -= 3.0;
    }
    let score = f64::round(score) as i32;
    match policy {
        EfficiencyPolicy::Unclamped => score,
        EfficiencyPolicy::Clamped => score.clamp(0, 100),
    }
}
