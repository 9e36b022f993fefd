//! Bucket derivation from quick-entry input.
//!
//! Quick entry asks the pilot for a handful of fields (role, aircraft type,
//! flight time, tags) and this engine expands them into the full bucket
//! record. The expansion is a single exhaustive match over role and engine
//! class, with the Night tag selecting the day or night slot atomically, so
//! tag combinations cannot write into two slots by accident.
//!
//! Policy notes:
//! - The IFR tag records the whole flight time as actual IMC. Coarse, but it
//!   matches how the quick-entry form is used; partial IMC goes through the
//!   per-field overrides.
//! - Instructors log PIC time and the same hours under as-flight-instructor.
//!   The instructor column is a parallel tracker, never added to flight time.
//! - Simulator sessions (simulator role or SIM engine class) route the whole
//!   time into the simulator column; tags that describe aircraft operations
//!   (cross-country, IFR, circuits) do not apply there.

use log::debug;
use thiserror::Error;

use crate::models::{round1, EngineClass, FlightRole, FlightTag, TimeBuckets};

/// Takeoffs/landings assumed for a circuits flight when the pilot does not
/// supply a count.
const CIRCUITS_DEFAULT_COUNT: i32 = 4;

/// Tolerance for the bucket-sum-vs-flight-time advisory check.
const TOTALS_MISMATCH_TOLERANCE: f64 = 0.01;

/// Slack for cross-country-versus-base comparisons, absorbing float dust.
const QUALIFIER_EPSILON: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum DerivationError {
    /// Quick entry requires a positive flight time.
    #[error("flight time must be positive, got {0}")]
    NonPositiveTime(f64),
    /// A cross-country override claims more time than the base slot holds.
    #[error("{field} override of {xc_hours}h exceeds base slot time of {base_hours}h")]
    QualifierExceedsBase {
        field: &'static str,
        xc_hours: f64,
        base_hours: f64,
    },
}

/// Advisory finding attached to an otherwise successful derivation.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivationWarning {
    /// After overrides, the SE+ME bucket sum no longer matches the entered
    /// flight time.
    TotalsMismatch { bucket_sum: f64, flight_time: f64 },
}

impl std::fmt::Display for DerivationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DerivationWarning::TotalsMismatch {
                bucket_sum,
                flight_time,
            } => write!(
                f,
                "bucket sum {:.2}h does not match flight time {:.2}h",
                bucket_sum, flight_time
            ),
        }
    }
}

/// Result of a quick-entry derivation.
#[derive(Debug, Clone)]
pub struct Derivation {
    pub buckets: TimeBuckets,
    /// Aircraft flight time after rounding; zero for simulator sessions.
    pub flight_hours: f64,
    pub warnings: Vec<DerivationWarning>,
}

/// Expand quick-entry input into a full bucket record.
///
/// `overrides` carries per-field corrections from the expanded entry form;
/// any `Some` field replaces the derived value verbatim. Overrides are
/// applied before the cross-country invariant is enforced, so an override
/// that pushes a qualifier past its base slot is rejected rather than
/// silently stored.
pub fn derive(
    role: FlightRole,
    engine_class: EngineClass,
    flight_time_hours: f64,
    tags: &[FlightTag],
    overrides: &TimeBuckets,
) -> Result<Derivation, DerivationError> {
    if flight_time_hours <= 0.0 {
        return Err(DerivationError::NonPositiveTime(flight_time_hours));
    }

    let night = tags.contains(&FlightTag::Night);
    let cross_country = tags.contains(&FlightTag::CrossCountry);
    let simulator_session =
        role == FlightRole::Simulator || engine_class == EngineClass::Sim;

    let mut buckets = TimeBuckets::default();
    let t = flight_time_hours;

    // One exhaustive match decides the slot; Night and CrossCountry are
    // resolved inside each arm so day/night and the XC mirror stay in step.
    match (role, engine_class) {
        (FlightRole::Simulator, _) | (_, EngineClass::Sim) => {
            buckets.simulator = Some(t);
        }
        (FlightRole::Student, EngineClass::Se) => {
            if night {
                buckets.se_night_dual = Some(t);
                buckets.xc_night_dual = cross_country.then_some(t);
            } else {
                buckets.se_day_dual = Some(t);
                buckets.xc_day_dual = cross_country.then_some(t);
            }
        }
        (FlightRole::Student, EngineClass::Me) => {
            if night {
                buckets.me_night_dual = Some(t);
                buckets.xc_night_dual = cross_country.then_some(t);
            } else {
                buckets.me_day_dual = Some(t);
                buckets.xc_day_dual = cross_country.then_some(t);
            }
        }
        (FlightRole::Pic, EngineClass::Se) => {
            if night {
                buckets.se_night_pic = Some(t);
                buckets.xc_night_pic = cross_country.then_some(t);
            } else {
                buckets.se_day_pic = Some(t);
                buckets.xc_day_pic = cross_country.then_some(t);
            }
        }
        (FlightRole::Pic, EngineClass::Me) => {
            if night {
                buckets.me_night_pic = Some(t);
                buckets.xc_night_pic = cross_country.then_some(t);
            } else {
                buckets.me_day_pic = Some(t);
                buckets.xc_day_pic = cross_country.then_some(t);
            }
        }
        (FlightRole::Instructor, EngineClass::Se) => {
            if night {
                buckets.se_night_pic = Some(t);
                buckets.xc_night_pic = cross_country.then_some(t);
            } else {
                buckets.se_day_pic = Some(t);
                buckets.xc_day_pic = cross_country.then_some(t);
            }
            buckets.as_flight_instructor = Some(t);
        }
        (FlightRole::Instructor, EngineClass::Me) => {
            if night {
                buckets.me_night_pic = Some(t);
                buckets.xc_night_pic = cross_country.then_some(t);
            } else {
                buckets.me_day_pic = Some(t);
                buckets.xc_day_pic = cross_country.then_some(t);
            }
            buckets.as_flight_instructor = Some(t);
        }
    }

    if !simulator_session {
        for tag in tags {
            match tag {
                FlightTag::Ifr => {
                    buckets.actual_imc = Some(t);
                }
                FlightTag::Circuits => {
                    if night {
                        buckets.night_takeoffs_landings = Some(CIRCUITS_DEFAULT_COUNT);
                    } else {
                        buckets.day_takeoffs_landings = Some(CIRCUITS_DEFAULT_COUNT);
                    }
                }
                // Night and CrossCountry were consumed by the slot match;
                // Checkride is an annotation with no bucket effect.
                FlightTag::Night | FlightTag::CrossCountry | FlightTag::Checkride => {}
            }
        }
    }

    let buckets = merge_overrides(&buckets, overrides);
    check_qualifiers(&buckets)?;

    let mut warnings = Vec::new();
    if !simulator_session {
        let bucket_sum = buckets.aircraft_total();
        if (bucket_sum - flight_time_hours).abs() > TOTALS_MISMATCH_TOLERANCE {
            warnings.push(DerivationWarning::TotalsMismatch {
                bucket_sum,
                flight_time: flight_time_hours,
            });
        }
    }

    let flight_hours = round1(buckets.aircraft_total());
    debug!(
        "derived buckets: role={} engine={} flight_hours={:.1} warnings={}",
        role.as_str(),
        engine_class.as_str(),
        flight_hours,
        warnings.len()
    );

    Ok(Derivation {
        buckets,
        flight_hours,
        warnings,
    })
}

/// Field-wise merge: any `Some` override replaces the derived value.
fn merge_overrides(derived: &TimeBuckets, overrides: &TimeBuckets) -> TimeBuckets {
    TimeBuckets {
        se_day_dual: overrides.se_day_dual.or(derived.se_day_dual),
        se_day_pic: overrides.se_day_pic.or(derived.se_day_pic),
        se_day_copilot: overrides.se_day_copilot.or(derived.se_day_copilot),
        se_night_dual: overrides.se_night_dual.or(derived.se_night_dual),
        se_night_pic: overrides.se_night_pic.or(derived.se_night_pic),
        se_night_copilot: overrides.se_night_copilot.or(derived.se_night_copilot),
        me_day_dual: overrides.me_day_dual.or(derived.me_day_dual),
        me_day_pic: overrides.me_day_pic.or(derived.me_day_pic),
        me_day_copilot: overrides.me_day_copilot.or(derived.me_day_copilot),
        me_night_dual: overrides.me_night_dual.or(derived.me_night_dual),
        me_night_pic: overrides.me_night_pic.or(derived.me_night_pic),
        me_night_copilot: overrides.me_night_copilot.or(derived.me_night_copilot),
        xc_day_dual: overrides.xc_day_dual.or(derived.xc_day_dual),
        xc_day_pic: overrides.xc_day_pic.or(derived.xc_day_pic),
        xc_day_copilot: overrides.xc_day_copilot.or(derived.xc_day_copilot),
        xc_night_dual: overrides.xc_night_dual.or(derived.xc_night_dual),
        xc_night_pic: overrides.xc_night_pic.or(derived.xc_night_pic),
        xc_night_copilot: overrides.xc_night_copilot.or(derived.xc_night_copilot),
        day_takeoffs_landings: overrides
            .day_takeoffs_landings
            .or(derived.day_takeoffs_landings),
        night_takeoffs_landings: overrides
            .night_takeoffs_landings
            .or(derived.night_takeoffs_landings),
        ifr_approaches: overrides.ifr_approaches.or(derived.ifr_approaches),
        holding: overrides.holding.or(derived.holding),
        actual_imc: overrides.actual_imc.or(derived.actual_imc),
        hood: overrides.hood.or(derived.hood),
        simulator: overrides.simulator.or(derived.simulator),
        as_flight_instructor: overrides
            .as_flight_instructor
            .or(derived.as_flight_instructor),
        dual_received: overrides.dual_received.or(derived.dual_received),
    }
}

/// Enforce the cross-country invariant per slot: a qualifier may never claim
/// more time than the SE+ME slots it describes.
fn check_qualifiers(buckets: &TimeBuckets) -> Result<(), DerivationError> {
    let slots: [(&'static str, Option<f64>, f64); 6] = [
        (
            "xcDayDual",
            buckets.xc_day_dual,
            buckets.se_day_dual.unwrap_or(0.0) + buckets.me_day_dual.unwrap_or(0.0),
        ),
        (
            "xcDayPic",
            buckets.xc_day_pic,
            buckets.se_day_pic.unwrap_or(0.0) + buckets.me_day_pic.unwrap_or(0.0),
        ),
        (
            "xcDayCopilot",
            buckets.xc_day_copilot,
            buckets.se_day_copilot.unwrap_or(0.0) + buckets.me_day_copilot.unwrap_or(0.0),
        ),
        (
            "xcNightDual",
            buckets.xc_night_dual,
            buckets.se_night_dual.unwrap_or(0.0) + buckets.me_night_dual.unwrap_or(0.0),
        ),
        (
            "xcNightPic",
            buckets.xc_night_pic,
            buckets.se_night_pic.unwrap_or(0.0) + buckets.me_night_pic.unwrap_or(0.0),
        ),
        (
            "xcNightCopilot",
            buckets.xc_night_copilot,
            buckets.se_night_copilot.unwrap_or(0.0) + buckets.me_night_copilot.unwrap_or(0.0),
        ),
    ];

    for (field, xc, base) in slots {
        if let Some(xc_hours) = xc {
            if xc_hours > base + QUALIFIER_EPSILON {
                return Err(DerivationError::QualifierExceedsBase {
                    field,
                    xc_hours,
                    base_hours: base,
                });
            }
        }
    }
    Ok(())
}
