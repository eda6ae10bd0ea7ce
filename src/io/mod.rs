//! File output for tick history.

pub mod export;
