//! CSV export for tick history.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::sim::types::{Snapshot, WeatherCondition};

/// Column header for CSV tick export.
const HEADER: &str = "tick,hour,solar_pct,battery_pct,vehicle_pct,\
                      temperature_f,condition,humidity_pct,wind_mph,efficiency_pct,\
                      energy_saved_kwh,co2_reduced_t,money_saved_usd,\
                      global_output_gw,co2_offset_mt";

/// One CSV row. Field order matches [`HEADER`].
#[derive(Serialize)]
struct Row {
    tick: u64,
    hour: u8,
    solar_pct: String,
    battery_pct: String,
    vehicle_pct: String,
    temperature_f: String,
    condition: WeatherCondition,
    humidity_pct: String,
    wind_mph: String,
    efficiency_pct: i32,
    energy_saved_kwh: String,
    co2_reduced_t: String,
    money_saved_usd: String,
    global_output_gw: String,
    co2_offset_mt: String,
}

impl From<&Snapshot> for Row {
    fn from(s: &Snapshot) -> Self {
        Self {
            tick: s.tick,
            hour: s.hour.get(),
            solar_pct: format!("{:.4}", s.solar.output),
            battery_pct: format!("{:.4}", s.battery.charge),
            vehicle_pct: format!("{:.4}", s.vehicle.charge),
            temperature_f: format!("{:.4}", s.weather.temperature),
            condition: s.weather.condition,
            humidity_pct: format!("{:.4}", s.weather.humidity),
            wind_mph: format!("{:.4}", s.weather.wind_speed),
            efficiency_pct: s.efficiency,
            energy_saved_kwh: format!("{:.4}", s.stats.energy_saved),
            co2_reduced_t: format!("{:.4}", s.stats.co2_reduced),
            money_saved_usd: format!("{:.4}", s.stats.money_saved),
            global_output_gw: format!("{:.2}", s.global.global_output),
            co2_offset_mt: format!("{:.2}", s.global.co2_offset),
        }
    }
}

/// Streams snapshots to CSV one row at a time.
///
/// The header is written on creation, so an empty run still yields a
/// well-formed file.
pub struct TickWriter<W: Write> {
    wtr: csv::Writer<W>,
    rows: usize,
}

impl TickWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or the header written.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> TickWriter<W> {
    /// Wraps `writer` and emits the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(writer: W) -> Result<Self> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(HEADER.split(',').map(str::trim))?;
        Ok(Self { wtr, rows: 0 })
    }

    /// Appends one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn write(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.wtr.serialize(Row::from(snapshot))?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes buffered rows and returns how many were written.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> Result<usize> {
        self.wtr.flush()?;
        Ok(self.rows)
    }
}

/// Exports a tick history to a CSV file at the given path.
///
/// Writes a header row followed by one row per snapshot. Produces identical
/// output for identical inputs.
///
/// # Errors
///
/// Returns an error if file creation or writing fails.
pub fn export_csv(history: &[Snapshot], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(history, BufWriter::new(file))
}

/// Writes a tick history as CSV to any writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv(history: &[Snapshot], writer: impl Write) -> Result<()> {
    let mut out = TickWriter::new(writer)?;
    for s in history {
        out.write(s)?;
    }
    out.finish()?;
    Ok(())
}
