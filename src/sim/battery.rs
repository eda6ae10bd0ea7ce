/// Raw solar output above which the battery gains charge.
pub const SURPLUS_THRESHOLD: f64 = 50.0;
/// Charge gained per tick under solar surplus.
pub const SOLAR_GAIN: f64 = 1.0;
/// Charge lost per tick without solar surplus.
pub const SOLAR_DEFICIT: f64 = -0.5;
/// Total household draw (kW) above which usage counts as heavy.
pub const HEAVY_USAGE_KW: f64 = 8.0;
/// Charge drained per tick under heavy usage.
pub const HEAVY_DRAIN: f64 = -0.8;
/// Charge drained per tick under light usage.
pub const LIGHT_DRAIN: f64 = -0.3;

/// Returns the battery charge after one tick of drift.
///
/// The solar contribution uses the unclamped raw output; the result is
/// saturated to `[0, 100]`.
///
/// # Arguments
///
/// * `charge` - Pre-tick charge in percent
/// * `raw_solar` - Raw (unclamped) solar output computed this tick
/// * `total_usage_kw` - Pre-tick total household draw
pub fn drift(charge: f64, raw_solar: f64, total_usage_kw: f64) -> f64 {
    let solar = if raw_solar > SURPLUS_THRESHOLD {
        SOLAR_GAIN
    } else {
        SOLAR_DEFICIT
    };
    let usage = if total_usage_kw > HEAVY_USAGE_KW {
        HEAVY_DRAIN
    } else {
        LIGHT_DRAIN
    };
    (charge + solar + usage).clamp(0.0, 100.0)
}
