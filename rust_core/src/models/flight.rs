//! Flight records and the quick-entry input enums.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bucket::TimeBuckets;

/// Identifier for a logbook flight entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightId(pub i64);

impl std::fmt::Display for FlightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FlightId {
    fn from(v: i64) -> Self {
        FlightId(v)
    }
}

impl From<FlightId> for i64 {
    fn from(id: FlightId) -> Self {
        id.0
    }
}

/// Pilot function selected in quick entry. Drives which bucket slot receives
/// the flight time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightRole {
    /// Dual instruction received; time goes to the dual slot.
    Student,
    /// Pilot in command; time goes to the PIC slot.
    Pic,
    /// Instructing; time goes to the PIC slot and is mirrored into
    /// as-flight-instructor.
    Instructor,
    /// Ground trainer session; time goes to the simulator column only.
    Simulator,
}

impl FlightRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightRole::Student => "student",
            FlightRole::Pic => "pic",
            FlightRole::Instructor => "instructor",
            FlightRole::Simulator => "simulator",
        }
    }
}

/// Quick-entry tags qualifying a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightTag {
    CrossCountry,
    Night,
    Ifr,
    Circuits,
    /// Annotation only; has no effect on the bucket record.
    Checkride,
}

impl FlightTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightTag::CrossCountry => "xc",
            FlightTag::Night => "night",
            FlightTag::Ifr => "ifr",
            FlightTag::Circuits => "circuits",
            FlightTag::Checkride => "checkride",
        }
    }
}

/// Engine classification of the aircraft type, resolved by the caller's
/// aircraft-type lookup before derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineClass {
    /// Single-engine aircraft.
    Se,
    /// Multi-engine aircraft.
    Me,
    /// Ground trainer / simulator device.
    Sim,
}

impl EngineClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineClass::Se => "se",
            EngineClass::Me => "me",
            EngineClass::Sim => "sim",
        }
    }
}

/// One logbook flight with its bucket breakdown.
///
/// Produced by the derivation engine (quick entry) or by the row import;
/// consumed read-only by aggregation, validation, and pagination. The bucket
/// fields sit at the top level of the wire format, so `buckets` is flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFlight {
    pub id: FlightId,
    pub date: NaiveDate,
    pub aircraft_type: String,
    pub registration: String,
    pub pic_name: String,
    pub other_crew: Option<String>,
    pub route: Option<String>,
    pub remarks: Option<String>,
    #[serde(flatten)]
    pub buckets: TimeBuckets,
    /// Block-to-block flight time in decimal hours. Zero for simulator-only
    /// entries; kept verbatim from imported rows so inconsistencies stay
    /// visible to validation.
    pub flight_hours: f64,
}

impl ParsedFlight {
    /// True when the flight holds simulator time and no aircraft time.
    pub fn is_simulator_only(&self) -> bool {
        self.buckets.is_simulator_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_id_display_and_from() {
        let id = FlightId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i64::from(id), 42);
    }

    #[test]
    fn test_enum_names() {
        assert_eq!(FlightRole::Student.as_str(), "student");
        assert_eq!(FlightRole::Pic.as_str(), "pic");
        assert_eq!(FlightTag::CrossCountry.as_str(), "xc");
        assert_eq!(FlightTag::Checkride.as_str(), "checkride");
        assert_eq!(EngineClass::Me.as_str(), "me");
    }

    #[test]
    fn test_flight_serializes_buckets_flat() {
        let flight = ParsedFlight {
            id: FlightId(1),
            date: NaiveDate::from_ymd_opt(2024, 5, 12).unwrap(),
            aircraft_type: "C172".to_string(),
            registration: "C-GABC".to_string(),
            pic_name: "Self".to_string(),
            other_crew: None,
            route: Some("CYKZ-CYKZ".to_string()),
            remarks: None,
            buckets: TimeBuckets {
                se_day_pic: Some(1.5),
                ..Default::default()
            },
            flight_hours: 1.5,
        };

        let json = serde_json::to_value(&flight).unwrap();
        // Bucket columns appear at the top level, not nested under "buckets"
        assert_eq!(json["seDayPic"], 1.5);
        assert!(json.get("buckets").is_none());
        assert_eq!(json["aircraftType"], "C172");
        assert_eq!(json["flightHours"], 1.5);
    }
}
