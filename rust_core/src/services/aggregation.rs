//! Dashboard aggregation over parsed flights.
//!
//! Two views share one accumulation path: grand totals across the whole
//! logbook, and the same totals per aircraft type with recency information.
//! Hours are summed at full precision in input order and rounded to a tenth
//! exactly once, when the result struct is built, so the numbers here agree
//! column-for-column with the running totals the pagination engine prints.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{round1, BucketTotals, ParsedFlight};

/// Logbook-wide totals for the dashboard.
///
/// `total_hours` is aircraft time only; simulator time accumulates in
/// `total_simulator` and is excluded from every aircraft column. The
/// cross-country pair is informational; it re-describes hours already
/// counted in the SE/ME columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightTotals {
    pub total_flights: usize,
    pub aircraft_flights: usize,
    pub simulator_flights: usize,

    pub total_hours: f64,
    pub total_simulator: f64,

    pub se_day: f64,
    pub se_night: f64,
    pub se_total: f64,
    pub me_day: f64,
    pub me_night: f64,
    pub me_total: f64,

    pub xc_day_total: f64,
    pub xc_night_total: f64,

    pub total_pic: f64,
    pub total_dual: f64,
    pub total_copilot: f64,
    pub total_night: f64,
    pub total_instrument: f64,
    pub total_instructor: f64,
    pub total_dual_received: f64,

    pub day_takeoffs_landings: i64,
    pub night_takeoffs_landings: i64,
    pub ifr_approaches: i64,
    pub holding: i64,
}

/// Per-aircraft-type rollup for the fleet view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftSummary {
    pub aircraft_type: String,
    /// Same shape as the grand totals, restricted to this type's flights.
    pub totals: FlightTotals,
    pub last_flight_date: NaiveDate,
    /// Whole days since the most recent flight; zero when that date is today
    /// or in the future.
    pub days_since_last_flight: i64,
    /// True when this type logged simulator time and no aircraft time.
    pub is_simulator: bool,
}

/// Full-precision accumulation state shared by both aggregation views.
#[derive(Debug, Default)]
struct Accumulator {
    totals: BucketTotals,
    total_flights: usize,
    aircraft_flights: usize,
    simulator_flights: usize,
}

impl Accumulator {
    fn add(&mut self, flight: &ParsedFlight) {
        self.totals.add(&flight.buckets);
        self.total_flights += 1;
        if flight.is_simulator_only() {
            self.simulator_flights += 1;
        } else {
            self.aircraft_flights += 1;
        }
    }

    /// Build the result struct; this is the one place hours get rounded.
    fn finish(&self) -> FlightTotals {
        let t = &self.totals;
        FlightTotals {
            total_flights: self.total_flights,
            aircraft_flights: self.aircraft_flights,
            simulator_flights: self.simulator_flights,
            total_hours: round1(t.aircraft_total()),
            total_simulator: round1(t.simulator),
            se_day: round1(t.se_day()),
            se_night: round1(t.se_night()),
            se_total: round1(t.se_total()),
            me_day: round1(t.me_day()),
            me_night: round1(t.me_night()),
            me_total: round1(t.me_total()),
            xc_day_total: round1(t.xc_day_total()),
            xc_night_total: round1(t.xc_night_total()),
            total_pic: round1(t.pic_total()),
            total_dual: round1(t.dual_total()),
            total_copilot: round1(t.copilot_total()),
            total_night: round1(t.night_total()),
            total_instrument: round1(t.instrument_total()),
            total_instructor: round1(t.as_flight_instructor),
            total_dual_received: round1(t.dual_received),
            day_takeoffs_landings: t.day_takeoffs_landings,
            night_takeoffs_landings: t.night_takeoffs_landings,
            ifr_approaches: t.ifr_approaches,
            holding: t.holding,
        }
    }
}

/// Compute logbook-wide totals over all flights, in input order.
pub fn aggregate_totals(flights: &[ParsedFlight]) -> FlightTotals {
    let mut acc = Accumulator::default();
    for flight in flights {
        acc.add(flight);
    }
    acc.finish()
}

/// Compute per-aircraft-type summaries.
///
/// Grouping is by the exact aircraft type string; "C172" and "C-172" are
/// distinct types on purpose (the cleanup belongs to the import side).
/// Ordering: aircraft first by descending total hours, then simulator
/// devices by descending simulator hours; ties keep first-appearance order.
///
/// `today` is supplied by the caller so recency is reproducible.
pub fn aggregate_by_aircraft(flights: &[ParsedFlight], today: NaiveDate) -> Vec<AircraftSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ParsedFlight>> = HashMap::new();
    for flight in flights {
        let key = flight.aircraft_type.as_str();
        if !groups.contains_key(key) {
            order.push(key);
        }
        groups.entry(key).or_default().push(flight);
    }
    debug!(
        "aggregating {} flights across {} aircraft types",
        flights.len(),
        order.len()
    );

    let mut summaries: Vec<AircraftSummary> = Vec::with_capacity(order.len());
    for key in order {
        let group = &groups[key];

        let mut acc = Accumulator::default();
        let mut last: Option<NaiveDate> = None;
        for flight in group {
            acc.add(flight);
            if last.map_or(true, |d| flight.date > d) {
                last = Some(flight.date);
            }
        }
        let Some(last_flight_date) = last else {
            continue;
        };

        let is_simulator = acc.totals.aircraft_total() == 0.0 && acc.totals.simulator > 0.0;
        summaries.push(AircraftSummary {
            aircraft_type: key.to_string(),
            totals: acc.finish(),
            last_flight_date,
            days_since_last_flight: (today - last_flight_date).num_days().max(0),
            is_simulator,
        });
    }

    // Stable sort keeps first-appearance order within equal keys
    summaries.sort_by(|a, b| match (a.is_simulator, b.is_simulator) {
        (false, true) => std::cmp::Ordering::Less,
        (true, false) => std::cmp::Ordering::Greater,
        (false, false) => b
            .totals
            .total_hours
            .partial_cmp(&a.totals.total_hours)
            .unwrap_or(std::cmp::Ordering::Equal),
        (true, true) => b
            .totals
            .total_simulator
            .partial_cmp(&a.totals.total_simulator)
            .unwrap_or(std::cmp::Ordering::Equal),
    });

    summaries
}
