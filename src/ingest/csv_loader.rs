use std::{fs::File, io::Read, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::models::{Observation, MINUTES_PER_DAY};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// One row as it appears in the export: numerics arrive as strings and the
/// `light` column holds a Python-style boolean literal.
#[derive(Debug, Deserialize)]
struct RawRow {
    min_of_day: String,
    act: String,
    temp: String,
    mouse_id: String,
    light: String,
}

/// Outcome of a load: rows kept vs rows rejected as malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Load observations from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<(Vec<Observation>, LoadReport)> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_csv(file)
}

/// Read observations from any CSV source with a header row.
///
/// Malformed rows are rejected individually: each one logs a warning and
/// bumps the skip count, and the load continues over the remaining rows.
pub fn read_csv<R: Read>(reader: R) -> Result<(Vec<Observation>, LoadReport)> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut observations = Vec::new();
    let mut report = LoadReport::default();

    for (idx, record) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row_number = idx + 1;
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                log_warn!("skipping unreadable row {row_number}: {err}");
                report.skipped += 1;
                continue;
            }
        };

        match parse_row(&row) {
            Ok(obs) => {
                observations.push(obs);
                report.loaded += 1;
            }
            Err(err) => {
                log_warn!("skipping malformed row {row_number}: {err}");
                report.skipped += 1;
            }
        }
    }

    Ok((observations, report))
}

fn parse_row(row: &RawRow) -> Result<Observation> {
    let minute_of_day: u16 = row
        .min_of_day
        .trim()
        .parse()
        .with_context(|| format!("bad min_of_day {:?}", row.min_of_day))?;
    if minute_of_day >= MINUTES_PER_DAY {
        bail!("min_of_day {minute_of_day} outside [0, {MINUTES_PER_DAY})");
    }

    let activity: f64 = row
        .act
        .trim()
        .parse()
        .with_context(|| format!("bad act {:?}", row.act))?;
    if !activity.is_finite() || activity < 0.0 {
        bail!("act {activity} is not a non-negative number");
    }

    let temperature: f64 = row
        .temp
        .trim()
        .parse()
        .with_context(|| format!("bad temp {:?}", row.temp))?;
    if !temperature.is_finite() {
        bail!("temp {temperature} is not finite");
    }

    Ok(Observation {
        minute_of_day,
        activity,
        temperature,
        subject_id: row.mouse_id.clone(),
        // The export writes "True" for light; any other value means dark.
        is_light: row.light == "True",
    })
}
