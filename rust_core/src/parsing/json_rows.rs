//! Import of externally parsed flight rows.
//!
//! The spreadsheet import pipeline hands over its rows as a JSON array in
//! the application's camelCase wire format: per-flight metadata plus the
//! bucket columns, everything nullable. This module turns that document
//! into [`ParsedFlight`] records.
//!
//! Imported data is taken at face value: a `flightHours` value supplied by
//! the source is kept verbatim even when it disagrees with the bucket sum,
//! so the validation engine can surface the inconsistency instead of the
//! import silently repairing it. Only a missing `flightHours` is computed
//! from the buckets.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;
use std::path::Path;

use crate::models::{round1, FlightId, ParsedFlight, TimeBuckets};

/// Raw row exactly as the import pipeline serializes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFlightRow {
    date: String,
    aircraft_type: Option<String>,
    registration: Option<String>,
    pic_name: Option<String>,
    other_crew: Option<String>,
    route: Option<String>,
    remarks: Option<String>,
    flight_hours: Option<f64>,
    #[serde(flatten)]
    buckets: TimeBuckets,
}

/// Parse a flight rows file into [`ParsedFlight`] records.
pub fn parse_flight_rows(path: &Path) -> Result<Vec<ParsedFlight>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read flight rows file: {}", path.display()))?;
    parse_flight_rows_str(&content)
}

/// Parse a flight rows JSON document from a string.
///
/// Rows keep their document order and receive sequential ids starting at 1.
/// Blank identification fields are imported as-is; flagging them is the
/// validation engine's job.
pub fn parse_flight_rows_str(json_str: &str) -> Result<Vec<ParsedFlight>> {
    let mut deserializer = serde_json::Deserializer::from_str(json_str);
    let rows: Vec<RawFlightRow> =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            let path = e.path().to_string();
            anyhow::anyhow!(
                "invalid flight rows JSON at {}: {}",
                path,
                e.into_inner()
            )
        })?;

    let flights = rows
        .into_iter()
        .enumerate()
        .map(|(index, raw)| convert_row(raw, index))
        .collect::<Result<Vec<ParsedFlight>>>()?;

    debug!("imported {} flight rows", flights.len());
    Ok(flights)
}

fn convert_row(raw: RawFlightRow, index: usize) -> Result<ParsedFlight> {
    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .with_context(|| format!("row {}: invalid date '{}'", index + 1, raw.date))?;

    let flight_hours = match raw.flight_hours {
        Some(hours) => hours,
        None => {
            let computed = round1(raw.buckets.aircraft_total());
            debug!(
                "row {}: flightHours missing, computed {:.1} from buckets",
                index + 1,
                computed
            );
            computed
        }
    };

    Ok(ParsedFlight {
        id: FlightId(index as i64 + 1),
        date,
        aircraft_type: raw.aircraft_type.unwrap_or_default(),
        registration: raw.registration.unwrap_or_default(),
        pic_name: raw.pic_name.unwrap_or_default(),
        other_crew: raw.other_crew,
        route: raw.route,
        remarks: raw.remarks,
        buckets: raw.buckets,
        flight_hours,
    })
}
