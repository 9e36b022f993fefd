//! Flight record validation.
//!
//! Every rule has a fixed severity: errors mark records that should not be
//! exported or aggregated without correction, warnings flag suspicious but
//! tolerable data. A record failing one rule still runs through all the
//! others, so a single pass reports everything that is wrong with it.
//!
//! Validation runs on flights from both entry paths. Derivation already
//! blocks some of these conditions at the door (non-positive time,
//! cross-country overrides beyond base); the same conditions can still
//! arrive through the row import, which is why they are re-checked here.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{CountColumn, FlightId, HourColumn, ParsedFlight};

/// Tolerance for the recorded-vs-summed flight time check.
const HOURS_TOLERANCE: f64 = 0.1;

/// Slack absorbing float dust in hour comparisons.
const EPSILON: f64 = 1e-9;

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// The fixed validation rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Recorded flight time disagrees with the SE+ME bucket sum.
    HoursMismatch,
    /// A cross-country qualifier claims more time than its base columns.
    XcExceedsBase,
    /// Instrument time exceeds flight time.
    InstrumentExceedsFlightTime,
    /// Flight is dated after today.
    FutureDate,
    /// Aircraft type is blank.
    MissingAircraftType,
    /// Registration is blank.
    MissingRegistration,
    /// Non-simulator flight with zero or negative flight time.
    NonPositiveHours,
    /// A bucket column holds a negative value.
    NegativeField,
    /// Instructor time and dual-received time on the same flight.
    InstructorDualOverlap,
}

impl Rule {
    pub fn severity(&self) -> Severity {
        match self {
            Rule::HoursMismatch => Severity::Warning,
            Rule::XcExceedsBase => Severity::Error,
            Rule::InstrumentExceedsFlightTime => Severity::Error,
            Rule::FutureDate => Severity::Warning,
            Rule::MissingAircraftType => Severity::Error,
            Rule::MissingRegistration => Severity::Error,
            Rule::NonPositiveHours => Severity::Error,
            Rule::NegativeField => Severity::Error,
            Rule::InstructorDualOverlap => Severity::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::HoursMismatch => "hours_mismatch",
            Rule::XcExceedsBase => "xc_exceeds_base",
            Rule::InstrumentExceedsFlightTime => "instrument_exceeds_flight_time",
            Rule::FutureDate => "future_date",
            Rule::MissingAircraftType => "missing_aircraft_type",
            Rule::MissingRegistration => "missing_registration",
            Rule::NonPositiveHours => "non_positive_hours",
            Rule::NegativeField => "negative_field",
            Rule::InstructorDualOverlap => "instructor_dual_overlap",
        }
    }
}

/// A single finding for one flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub flight_id: FlightId,
    pub severity: Severity,
    pub rule: Rule,
    /// Wire name of the offending column, when the rule points at one.
    pub field: Option<String>,
    pub message: String,
}

impl Issue {
    fn new(flight_id: FlightId, rule: Rule, field: Option<String>, message: String) -> Self {
        Issue {
            flight_id,
            severity: rule.severity(),
            rule,
            field,
            message,
        }
    }
}

/// Validation summary over a batch of flights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub issues: Vec<Issue>,
    pub total_flights: usize,
    /// Flights with no error-severity issues. Warnings do not count against
    /// a flight.
    pub success_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    /// True when the batch carries no errors at all.
    pub is_valid: bool,
}

/// Validate a single flight. Returns every issue found, in rule order.
pub fn validate_flight(flight: &ParsedFlight, today: NaiveDate) -> Vec<Issue> {
    let mut issues = Vec::new();
    let buckets = &flight.buckets;
    let simulator_only = flight.is_simulator_only();

    // Check 1: recorded flight time vs bucket sum (aircraft flights only)
    if !simulator_only {
        let bucket_sum = buckets.aircraft_total();
        if (flight.flight_hours - bucket_sum).abs() > HOURS_TOLERANCE + EPSILON {
            issues.push(Issue::new(
                flight.id,
                Rule::HoursMismatch,
                Some("flightHours".to_string()),
                format!(
                    "flight time {:.1}h does not match bucket sum {:.1}h",
                    flight.flight_hours, bucket_sum
                ),
            ));
        }
    }

    // Check 2: cross-country qualifier vs base columns, per role
    let role_pairs = [
        ("xcDual", buckets.xc_dual_total(), buckets.dual_total()),
        ("xcPic", buckets.xc_pic_total(), buckets.pic_total()),
        ("xcCopilot", buckets.xc_copilot_total(), buckets.copilot_total()),
    ];
    for (field, xc, base) in role_pairs {
        if xc > base + EPSILON {
            issues.push(Issue::new(
                flight.id,
                Rule::XcExceedsBase,
                Some(field.to_string()),
                format!(
                    "cross-country time {:.1}h exceeds {:.1}h recorded in the base columns",
                    xc, base
                ),
            ));
        }
    }

    // Check 3: instrument time vs flight time (meaningless in a simulator)
    if !simulator_only {
        let instrument = buckets.instrument_total();
        if instrument > flight.flight_hours + EPSILON {
            issues.push(Issue::new(
                flight.id,
                Rule::InstrumentExceedsFlightTime,
                Some("actualImc".to_string()),
                format!(
                    "instrument time {:.1}h exceeds flight time {:.1}h",
                    instrument, flight.flight_hours
                ),
            ));
        }
    }

    // Check 4: future-dated flight
    if flight.date > today {
        issues.push(Issue::new(
            flight.id,
            Rule::FutureDate,
            Some("date".to_string()),
            format!("flight is dated {} which is after {}", flight.date, today),
        ));
    }

    // Check 5: required identification fields
    if flight.aircraft_type.trim().is_empty() {
        issues.push(Issue::new(
            flight.id,
            Rule::MissingAircraftType,
            Some("aircraftType".to_string()),
            "aircraft type is blank".to_string(),
        ));
    }
    if flight.registration.trim().is_empty() {
        issues.push(Issue::new(
            flight.id,
            Rule::MissingRegistration,
            Some("registration".to_string()),
            "registration is blank".to_string(),
        ));
    }

    // Check 6: aircraft flights must carry positive flight time
    if !simulator_only && flight.flight_hours <= 0.0 {
        issues.push(Issue::new(
            flight.id,
            Rule::NonPositiveHours,
            Some("flightHours".to_string()),
            format!("flight time is {:.1}h", flight.flight_hours),
        ));
    }

    // Check 7: no column may go negative, one issue per offending column
    for column in HourColumn::ALL {
        if let Some(value) = column.value(buckets) {
            if value < 0.0 {
                issues.push(Issue::new(
                    flight.id,
                    Rule::NegativeField,
                    Some(column.name().to_string()),
                    format!("{} is negative ({:.1})", column.name(), value),
                ));
            }
        }
    }
    for column in CountColumn::ALL {
        if let Some(value) = column.value(buckets) {
            if value < 0 {
                issues.push(Issue::new(
                    flight.id,
                    Rule::NegativeField,
                    Some(column.name().to_string()),
                    format!("{} is negative ({})", column.name(), value),
                ));
            }
        }
    }

    // Check 8: instructing and receiving instruction on the same flight
    if buckets.as_flight_instructor.unwrap_or(0.0) > 0.0
        && buckets.dual_received.unwrap_or(0.0) > 0.0
    {
        issues.push(Issue::new(
            flight.id,
            Rule::InstructorDualOverlap,
            Some("dualReceived".to_string()),
            "flight logs both instructor time and dual received".to_string(),
        ));
    }

    issues
}

/// Validate a batch of flights and summarize the findings.
pub fn validate_batch(flights: &[ParsedFlight], today: NaiveDate) -> BatchReport {
    let mut issues = Vec::new();
    let mut success_count = 0;

    for flight in flights {
        let flight_issues = validate_flight(flight, today);
        if !flight_issues
            .iter()
            .any(|i| i.severity == Severity::Error)
        {
            success_count += 1;
        }
        issues.extend(flight_issues);
    }

    let error_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    if error_count > 0 {
        warn!(
            "validation found {} errors and {} warnings across {} flights",
            error_count,
            warning_count,
            flights.len()
        );
    }

    BatchReport {
        issues,
        total_flights: flights.len(),
        success_count,
        error_count,
        warning_count,
        is_valid: error_count == 0,
    }
}
