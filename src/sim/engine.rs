//! Simulation controller that owns the snapshot and advances it per tick.

use tracing::trace;

use super::random::RandomSource;
use crate::config::DashConfig;
use super::types::{BatteryState, Snapshot, SolarState};
use super::weather::EfficiencyPolicy;
use super::{battery, solar, stats, weather};

/// Computes the snapshot that follows `prev`.
///
/// Every derived value is computed from `prev` alone and committed together.
/// Solar output reads the pre-tick hour and sky, and efficiency reads the
/// pre-tick weather, so the displayed hour runs one tick ahead of the curve.
///
/// Random draws are taken in a fixed order: the weather gate (plus three
/// perturbation draws when it passes), then the global output step.
pub fn advance(
    prev: &Snapshot,
    rng: &mut impl RandomSource,
    policy: EfficiencyPolicy,
) -> Snapshot {
    let raw_solar = solar::raw_output(prev.hour, prev.weather.condition);
    let next_weather = weather::perturb(&prev.weather, rng);
    let next_global = stats::walk_global(&prev.global, rng);

    Snapshot {
        tick: prev.tick + 1,
        hour: prev.hour.next(),
        solar: SolarState {
            output: solar::clamp_output(raw_solar),
        },
        battery: BatteryState {
            charge: battery::drift(prev.battery.charge, raw_solar, prev.usage.total),
        },
        vehicle: prev.vehicle,
        weather: next_weather,
        usage: prev.usage,
        stats: stats::accrue(&prev.stats, raw_solar),
        efficiency: weather::efficiency(&prev.weather, policy),
        global: next_global,
    }
}

/// Owns the current snapshot and applies ticks to it.
///
/// Has no knowledge of any UI state; the presentation layer reads
/// [`Simulation::snapshot`] after each tick.
#[derive(Debug, Clone)]
pub struct Simulation {
    snapshot: Snapshot,
    policy: EfficiencyPolicy,
}

impl Simulation {
    /// Creates a simulation starting from the opening values.
    pub fn new(policy: EfficiencyPolicy) -> Self {
        Self::with_initial(Snapshot::default(), policy)
    }

    /// Creates a simulation starting from an arbitrary snapshot.
    pub fn with_initial(snapshot: Snapshot, policy: EfficiencyPolicy) -> Self {
        Self { snapshot, policy }
    }

    /// Creates a simulation from a configuration's opening values and policy.
    pub fn from_config(cfg: &DashConfig) -> Self {
        Self::with_initial(cfg.initial_snapshot(), cfg.efficiency_policy())
    }

    /// Returns the latest committed snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Number of ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.snapshot.tick
    }

    /// Returns the efficiency bounding policy.
    pub fn policy(&self) -> EfficiencyPolicy {
        self.policy
    }

    /// Advances by one tick and returns the new snapshot.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> &Snapshot {
        self.snapshot = advance(&self.snapshot, rng, self.policy);
        trace!(tick = self.snapshot.tick, hour = self.snapshot.hour.get(), "tick");
        &self.snapshot
    }

    /// Advances `n` ticks, returning every post-tick snapshot.
    pub fn run(&mut self, n: usize, rng: &mut impl RandomSource) -> Vec<Snapshot> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.tick(rng).clone());
        }
        out
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(EfficiencyPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::clock::TimeOfDay;
    use crate::sim::random::{ScriptedRandom, seeded};
    use crate::sim::types::WeatherCondition;

    /// Script that never perturbs weather and leaves global output unchanged.
    fn calm() -> ScriptedRandom {
        ScriptedRandom::constant(0.5)
    }

    fn at_hour(h: u8) -> Snapshot {
        Snapshot {
            hour: TimeOfDay::new(h).expect("valid hour"),
            ..Snapshot::default()
        }
    }

    #[test]
    fn noon_tick_matches_reference_values() {
        let prev = at_hour(12);
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert_eq!(next.hour.get(), 13);
        assert!((next.solar.output - 100.0).abs() < 1e-9);
        assert!((next.battery.charge - 50.2).abs() < 1e-9);
        assert!((next.stats.energy_saved - 0.1).abs() < 1e-12);
        assert_eq!(next.tick, 1);
    }

    #[test]
    fn night_tick_has_no_output_and_no_accrual() {
        let prev = at_hour(23);
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert_eq!(next.solar.output, 0.0);
        assert_eq!(next.stats, prev.stats);
        assert_eq!(next.hour.get(), 24);
        assert!((next.battery.charge - 48.7).abs() < 1e-9);
    }

    #[test]
    fn solar_uses_pre_tick_hour() {
        let prev = at_hour(13);
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert_eq!(next.hour.get(), 14);
        let expected = (7.0 * std::f64::consts::PI / 12.0).sin() * 100.0;
        assert!((next.solar.output - expected).abs() < 1e-9);

        // pre-tick 5 gives nothing although the new hour is 6
        let prev = at_hour(5);
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert_eq!(next.hour.get(), 6);
        assert_eq!(next.solar.output, 0.0);
    }

    #[test]
    fn sunset_hour_still_accrues_but_sunrise_hour_does_not() {
        // sin(pi) leaves a tiny positive raw output at 18
        let prev = at_hour(18);
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert!(next.solar.output > 0.0 && next.solar.output < 1e-9);
        assert!((next.stats.energy_saved - 0.1).abs() < 1e-12);
        assert!((next.stats.co2_reduced - 0.05).abs() < 1e-12);
        assert!((next.stats.money_saved - 0.02).abs() < 1e-12);

        let prev = at_hour(6);
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert_eq!(next.solar.output, 0.0);
        assert_eq!(next.stats, prev.stats);
    }

    #[test]
    fn efficiency_uses_pre_tick_temperature() {
        let mut prev = Snapshot::default();
        prev.weather.temperature = 85.5;
        // gate passes and drops the temperature by one degree
        let mut rng = ScriptedRandom::new(vec![0.0, 0.0, 0.5, 0.5, 0.5]);
        let next = advance(&prev, &mut rng, EfficiencyPolicy::Unclamped);
        assert!((next.weather.temperature - 84.5).abs() < 1e-9);
        assert_eq!(next.efficiency, 92);
    }

    #[test]
    fn cloudy_sky_lowers_output() {
        let mut prev = at_hour(12);
        prev.weather.condition = WeatherCondition::Cloudy;
        let next = advance(&prev, &mut calm(), EfficiencyPolicy::Unclamped);
        assert!((next.solar.output - 60.0).abs() < 1e-9);
        assert_eq!(next.efficiency, 90);
        assert_eq!(next.weather.condition, WeatherCondition::Cloudy);
    }

    #[test]
    fn vehicle_and_usage_never_change() {
        let mut sim = Simulation::default();
        let before = sim.snapshot().clone();
        let mut rng = seeded(3);
        sim.run(100, &mut rng);
        assert_eq!(sim.snapshot().vehicle, before.vehicle);
        assert_eq!(sim.snapshot().usage, before.usage);
    }

    #[test]
    fn run_returns_each_post_tick_snapshot() {
        let mut sim = Simulation::default();
        let history = sim.run(5, &mut calm());
        assert_eq!(history.len(), 5);
        assert_eq!(sim.ticks(), 5);
        let hours: Vec<u8> = history.iter().map(|s| s.hour.get()).collect();
        assert_eq!(hours, vec![13, 14, 15, 16, 17]);
        assert_eq!(history.last(), Some(sim.snapshot()));
    }

    #[test]
    fn from_config_uses_opening_values_and_policy() {
        let mut cfg = DashConfig::overcast();
        cfg.simulation.clamp_efficiency = true;
        let sim = Simulation::from_config(&cfg);
        assert_eq!(sim.policy(), EfficiencyPolicy::Clamped);
        assert_eq!(sim.snapshot().weather.condition, WeatherCondition::Cloudy);
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn same_seed_same_trajectory() {
        let mut a = Simulation::default();
        let mut b = Simulation::default();
        let ra = a.run(200, &mut seeded(42));
        let rb = b.run(200, &mut seeded(42));
        assert_eq!(ra, rb);
    }
}
