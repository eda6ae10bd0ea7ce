//! Simulated renewable-energy dashboard.
//!
//! A once-per-second simulation of household solar, storage and weather
//! metrics, rendered as a terminal dashboard.

pub mod cli;
pub mod config;
pub mod error;
/// CSV export of tick history.
pub mod io;
/// Simulation loop: state, tick function, and random sources.
pub mod sim;
pub mod telemetry;
#[cfg(feature = "tui")]
pub mod tui;
pub mod view;

pub use error::{DashError, Result};
