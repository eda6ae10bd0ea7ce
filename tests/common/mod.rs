//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use energy_dash::sim::clock::TimeOfDay;
use energy_dash::sim::engine::Simulation;
use energy_dash::sim::random::{ScriptedRandom, seeded};
use energy_dash::sim::types::Snapshot;
use energy_dash::sim::weather::EfficiencyPolicy;

/// Seed used by the default fixtures.
pub const SEED: u64 = 42;

/// Opening snapshot moved to the given hour.
pub fn snapshot_at(hour: u8) -> Snapshot {
    Snapshot {
        hour: TimeOfDay::new(hour).expect("fixture hour must be 1..=24"),
        ..Snapshot::default()
    }
}

/// Random source that never perturbs weather and leaves global output flat.
pub fn calm() -> ScriptedRandom {
    ScriptedRandom::constant(0.5)
}

/// Default simulation run for `n` ticks with the fixture seed.
pub fn default_history(n: usize) -> Vec<Snapshot> {
    Simulation::new(EfficiencyPolicy::Unclamped).run(n, &mut seeded(SEED))
}

/// Opening snapshot followed by `n` post-tick snapshots.
pub fn trajectory(start: Snapshot, n: usize, seed: u64) -> Vec<Snapshot> {
    let mut sim = Simulation::with_initial(start.clone(), EfficiencyPolicy::Unclamped);
    let mut out = vec![start];
    out.extend(sim.run(n, &mut seeded(seed)));
    out
}
