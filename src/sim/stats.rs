//! Cumulative impact statistics and fleet-wide aggregates.

use super::random::RandomSource;
use super::types::{CumulativeStats, GlobalStats};

/// Energy credited per producing tick (kWh).
pub const ENERGY_PER_TICK_KWH: f64 = 0.1;
/// Carbon credited per producing tick (tons).
pub const CO2_PER_TICK_TONS: f64 = 0.05;
/// Money credited per producing tick (USD).
pub const MONEY_PER_TICK_USD: f64 = 0.02;
/// Maximum global output step per tick (GW).
pub const GLOBAL_OUTPUT_STEP_GW: f64 = 0.05;
/// Global CO₂ offset added per tick (Mt).
pub const CO2_OFFSET_STEP_MT: f64 = 0.01;

/// Credits one tick of savings if the panels produced anything.
pub fn accrue(stats: &CumulativeStats, raw_solar: f64) -> CumulativeStats {
    if raw_solar <= 0.0 {
        return *stats;
    }
    CumulativeStats {
        energy_saved: stats.energy_saved + ENERGY_PER_TICK_KWH,
        co2_reduced: stats.co2_reduced + CO2_PER_TICK_TONS,
        money_saved: stats.money_saved + MONEY_PER_TICK_USD,
    }
}

/// Walks the global output and advances the CO₂ offset.
///
/// Takes exactly one random draw. Both values are rounded to two decimals.
pub fn walk_global(global: &GlobalStats, rng: &mut impl RandomSource) -> GlobalStats {
    let step = rng.uniform(-GLOBAL_OUTPUT_STEP_GW, GLOBAL_OUTPUT_STEP_GW);
    GlobalStats {
        global_output: round2(global.global_output + step),
        co2_offset: round2(global.co2_offset + CO2_OFFSET_STEP_MT),
        ..*global
    }
}

/// Rounds to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::types::Snapshot;

    #[test]
    fn test_accrue_while_producing() {
        let s = accrue(&CumulativeStats::default(), 12.0);
        assert!((s.energy_saved - 0.1).abs() < 1e-12);
        assert!((s.co2_reduced - 0.05).abs() < 1e-12);
        assert!((s.money_saved - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_no_accrual_at_night() {
        let before = CumulativeStats {
            energy_saved: 1.0,
            co2_reduced: 0.5,
            money_saved: 0.2,
        };
        assert_eq!(accrue(&before, 0.0), before);
    }

    #[test]
    fn test_walk_global_rounds_and_offsets() {
        let g = Snapshot::default().global;
        // 0.9 maps to +0.04
        let mut rng = ScriptedRandom::constant(0.9);
        let next = walk_global(&g, &mut rng);
        assert_eq!(next.global_output, 4.54);
        assert_eq!(next.co2_offset, 12.31);
        assert_eq!(next.total_powerwall, g.total_powerwall);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_co2_offset_strictly_increases() {
        let mut g = Snapshot::default().global;
        let mut rng = ScriptedRandom::constant(0.0);
        for _ in 0..500 {
            let next = walk_global(&g, &mut rng);
            assert!(next.co2_offset > g.co2_offset);
            g = next;
        }
        assert_eq!(g.co2_offset, 17.3);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.545_000_1), 4.55);
        assert_eq!(round2(12.304), 12.3);
    }
}
