/// Battery drift model.
pub mod battery;
/// Cyclic hour-of-day counter.
pub mod clock;
pub mod engine;
pub mod random;
/// Solar output curve.
pub mod solar;
pub mod stats;
pub mod types;
pub mod weather;
