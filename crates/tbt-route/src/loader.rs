//! CSV route loader.
//!
//! # CSV format
//!
//! One row per step, in traversal order.  `radius_m` may be left empty to use
//! the caller's default radius.
//!
//! ```csv
//! instruction,distance_m,lat,lon,radius_m
//! Turn left onto Infinite Loop,50,37.33182,-122.03118,
//! Turn right onto Mariani Ave,120,37.33240,-122.03020,25
//! Arrive at destination,0,37.33300,-122.03000,
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tbt_core::Coordinate;

use crate::{Route, RouteBuilder, RouteError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StepRecord {
    instruction: String,
    distance_m:  f64,
    lat:         f64,
    lon:         f64,
    #[serde(default)]
    radius_m:    Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Route`] from a CSV file.
pub fn load_route_csv(path: &Path, default_radius_m: f64) -> Result<Route, RouteError> {
    let file = std::fs::File::open(path)
        .map_err(RouteError::Io)?;
    load_route_reader(file, default_radius_m)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for routes embedded in a
/// binary with `include_str!`.
pub fn load_route_reader<R: Read>(reader: R, default_radius_m: f64) -> Result<Route, RouteError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder    = RouteBuilder::with_default_radius(default_radius_m);

    for (row_no, result) in csv_reader.deserialize::<StepRecord>().enumerate() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;

        let anchor = Coordinate::new(row.lat, row.lon);
        if !anchor.is_valid() {
            return Err(RouteError::Parse(format!(
                "row {}: coordinate {anchor} is out of range",
                row_no + 1
            )));
        }
        if !row.distance_m.is_finite() || row.distance_m < 0.0 {
            return Err(RouteError::Parse(format!(
                "row {}: invalid distance_m {}",
                row_no + 1,
                row.distance_m
            )));
        }

        match row.radius_m {
            Some(r) if r.is_finite() && r > 0.0 => {
                builder.add_step_with_radius(row.instruction, row.distance_m, anchor, r)?;
            }
            Some(r) => {
                return Err(RouteError::Parse(format!("row {}: invalid radius_m {r}", row_no + 1)));
            }
            None => {
                builder.add_step(row.instruction, row.distance_m, anchor)?;
            }
        }
    }

    Ok(builder.build())
}
