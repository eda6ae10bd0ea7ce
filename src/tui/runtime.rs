//! Dashboard application state and tick timer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use tracing::info;

use crate::config::DashConfig;
use crate::sim::engine::Simulation;
use crate::sim::random::seeded;
use crate::sim::types::Snapshot;
use crate::view::{Readouts, UiFlags};

/// Maximum number of history entries kept for the rolling chart.
pub const MAX_HISTORY: usize = 120;

/// Dashboard application state.
///
/// Owns the simulation, its random source, and the UI flags. The flags are
/// never passed into the simulation.
pub struct App {
    sim: Simulation,
    rng: StdRng,
    /// UI-only toggles.
    pub flags: UiFlags,
    /// Rolling history of snapshots for the chart, oldest first.
    pub history: VecDeque<Snapshot>,
    /// Tick period.
    pub tick_interval: Duration,
    /// When the last tick was applied (or the view opened).
    pub last_tick: Instant,
    /// Set once the view is torn down; no tick runs afterwards.
    pub quit: bool,
}

impl App {
    /// Creates the dashboard state from a validated configuration.
    pub fn new(cfg: &DashConfig) -> Self {
        let sim = Simulation::from_config(cfg);
        let mut history = VecDeque::with_capacity(MAX_HISTORY);
        history.push_back(sim.snapshot().clone());
        Self {
            sim,
            rng: seeded(cfg.simulation.seed),
            flags: UiFlags::default(),
            history,
            tick_interval: Duration::from_millis(cfg.simulation.tick_interval_ms),
            last_tick: Instant::now(),
            quit: false,
        }
    }

    /// Latest simulated snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        self.sim.snapshot()
    }

    /// Formatted read-outs for the latest snapshot.
    pub fn readouts(&self) -> Readouts {
        Readouts::from_snapshot(self.sim.snapshot())
    }

    /// Applies one tick unless the view has been torn down.
    pub fn tick(&mut self) {
        if self.quit {
            return;
        }
        let snapshot = self.sim.tick(&mut self.rng).clone();
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(snapshot);
    }

    /// Time left until the next tick is due, saturating at zero.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        (self.last_tick + self.tick_interval).saturating_duration_since(now)
    }

    /// Fires the tick if its deadline has passed.
    ///
    /// The deadline is re-armed from `now`, so a late tick fires once and
    /// missed periods are skipped rather than queued.
    pub fn tick_if_due(&mut self, now: Instant) -> bool {
        if self.quit || now.saturating_duration_since(self.last_tick) < self.tick_interval {
            return false;
        }
        self.tick();
        self.last_tick = now;
        true
    }

    /// Tears the view down. The timer stops unconditionally.
    pub fn shutdown(&mut self) {
        if !self.quit {
            self.quit = true;
            info!(ticks = self.sim.ticks(), "dashboard closed");
        }
    }
}
