//! Flight-time bucket record and column definitions.
//!
//! The bucket record is the heart of the logbook: every flight is broken down
//! into the regulatory time columns (single/multi-engine x day/night x
//! dual/PIC/copilot, cross-country qualifiers, takeoff/landing and approach
//! counts, instrument time, instructor/dual-received time). All downstream
//! engines consume this record read-only.
//!
//! Conventions:
//! - Decimal hours, 0.1 granularity at the edges. Accumulation runs at full
//!   `f64` precision; [`round1`] is applied exactly once when a total is
//!   emitted.
//! - `None` means "not applicable to this flight"; `Some(0.0)` / `Some(0)`
//!   means "applicable, and zero". Sums treat `None` as zero.
//! - Cross-country fields are qualifiers: they re-describe hours already
//!   recorded in the matching SE/ME slot and are never added to flight time.

use serde::{Deserialize, Serialize};

/// Round a decimal-hour value to one decimal place, half away from zero.
///
/// This is the single rounding rule of the whole crate. Totals are
/// accumulated at full precision and pass through here exactly once on
/// emission, so `round1(round1(x)) == round1(x)` always holds.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Per-flight time bucket record.
///
/// Field names mirror the wire format used by the import rows and the
/// dashboard (camelCase via serde). The struct is deliberately a fixed set of
/// named fields rather than a string-keyed map: adding a column is a type
/// change, not a runtime surprise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeBuckets {
    // Single-engine aircraft time
    pub se_day_dual: Option<f64>,
    pub se_day_pic: Option<f64>,
    pub se_day_copilot: Option<f64>,
    pub se_night_dual: Option<f64>,
    pub se_night_pic: Option<f64>,
    pub se_night_copilot: Option<f64>,

    // Multi-engine aircraft time
    pub me_day_dual: Option<f64>,
    pub me_day_pic: Option<f64>,
    pub me_day_copilot: Option<f64>,
    pub me_night_dual: Option<f64>,
    pub me_night_pic: Option<f64>,
    pub me_night_copilot: Option<f64>,

    // Cross-country qualifiers (subsets of the SE/ME slots above)
    pub xc_day_dual: Option<f64>,
    pub xc_day_pic: Option<f64>,
    pub xc_day_copilot: Option<f64>,
    pub xc_night_dual: Option<f64>,
    pub xc_night_pic: Option<f64>,
    pub xc_night_copilot: Option<f64>,

    // Event counts
    pub day_takeoffs_landings: Option<i32>,
    pub night_takeoffs_landings: Option<i32>,
    pub ifr_approaches: Option<i32>,
    pub holding: Option<i32>,

    // Instrument time; simulator is tracked but never part of flight hours
    pub actual_imc: Option<f64>,
    pub hood: Option<f64>,
    pub simulator: Option<f64>,

    // Instructor / dual-received parallel trackers
    pub as_flight_instructor: Option<f64>,
    pub dual_received: Option<f64>,
}

fn opt(v: Option<f64>) -> f64 {
    v.unwrap_or(0.0)
}

impl TimeBuckets {
    /// Total single-engine aircraft hours (day + night, all roles).
    pub fn se_total(&self) -> f64 {
        opt(self.se_day_dual)
            + opt(self.se_day_pic)
            + opt(self.se_day_copilot)
            + opt(self.se_night_dual)
            + opt(self.se_night_pic)
            + opt(self.se_night_copilot)
    }

    /// Total multi-engine aircraft hours (day + night, all roles).
    pub fn me_total(&self) -> f64 {
        opt(self.me_day_dual)
            + opt(self.me_day_pic)
            + opt(self.me_day_copilot)
            + opt(self.me_night_dual)
            + opt(self.me_night_pic)
            + opt(self.me_night_copilot)
    }

    /// Total aircraft hours (SE + ME). Simulator time is not aircraft time.
    pub fn aircraft_total(&self) -> f64 {
        self.se_total() + self.me_total()
    }

    /// True when the record holds simulator time and no aircraft time.
    pub fn is_simulator_only(&self) -> bool {
        self.aircraft_total() == 0.0 && opt(self.simulator) > 0.0
    }

    /// Dual-instruction hours received in aircraft (SE + ME, day + night).
    pub fn dual_total(&self) -> f64 {
        opt(self.se_day_dual)
            + opt(self.se_night_dual)
            + opt(self.me_day_dual)
            + opt(self.me_night_dual)
    }

    /// Pilot-in-command hours in aircraft (SE + ME, day + night).
    pub fn pic_total(&self) -> f64 {
        opt(self.se_day_pic)
            + opt(self.se_night_pic)
            + opt(self.me_day_pic)
            + opt(self.me_night_pic)
    }

    /// Copilot hours in aircraft (SE + ME, day + night).
    pub fn copilot_total(&self) -> f64 {
        opt(self.se_day_copilot)
            + opt(self.se_night_copilot)
            + opt(self.me_day_copilot)
            + opt(self.me_night_copilot)
    }

    /// Night hours in aircraft (SE + ME, all roles).
    pub fn night_total(&self) -> f64 {
        opt(self.se_night_dual)
            + opt(self.se_night_pic)
            + opt(self.se_night_copilot)
            + opt(self.me_night_dual)
            + opt(self.me_night_pic)
            + opt(self.me_night_copilot)
    }

    /// Cross-country day hours (qualifier sum, all roles).
    pub fn xc_day_total(&self) -> f64 {
        opt(self.xc_day_dual) + opt(self.xc_day_pic) + opt(self.xc_day_copilot)
    }

    /// Cross-country night hours (qualifier sum, all roles).
    pub fn xc_night_total(&self) -> f64 {
        opt(self.xc_night_dual) + opt(self.xc_night_pic) + opt(self.xc_night_copilot)
    }

    /// Cross-country dual hours (day + night).
    pub fn xc_dual_total(&self) -> f64 {
        opt(self.xc_day_dual) + opt(self.xc_night_dual)
    }

    /// Cross-country PIC hours (day + night).
    pub fn xc_pic_total(&self) -> f64 {
        opt(self.xc_day_pic) + opt(self.xc_night_pic)
    }

    /// Cross-country copilot hours (day + night).
    pub fn xc_copilot_total(&self) -> f64 {
        opt(self.xc_day_copilot) + opt(self.xc_night_copilot)
    }

    /// Instrument hours: actual IMC plus simulated (hood). Ground simulator
    /// instrument time is tracked under `simulator` and not counted here.
    pub fn instrument_total(&self) -> f64 {
        opt(self.actual_imc) + opt(self.hood)
    }
}

/// Every decimal-hour column of the bucket record, in logbook order.
///
/// The aggregation and pagination engines iterate this same fixed list, which
/// is what makes their totals comparable column-for-column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourColumn {
    SeDayDual,
    SeDayPic,
    SeDayCopilot,
    SeNightDual,
    SeNightPic,
    SeNightCopilot,
    MeDayDual,
    MeDayPic,
    MeDayCopilot,
    MeNightDual,
    MeNightPic,
    MeNightCopilot,
    XcDayDual,
    XcDayPic,
    XcDayCopilot,
    XcNightDual,
    XcNightPic,
    XcNightCopilot,
    ActualImc,
    Hood,
    Simulator,
    AsFlightInstructor,
    DualReceived,
}

impl HourColumn {
    pub const ALL: [HourColumn; 23] = [
        HourColumn::SeDayDual,
        HourColumn::SeDayPic,
        HourColumn::SeDayCopilot,
        HourColumn::SeNightDual,
        HourColumn::SeNightPic,
        HourColumn::SeNightCopilot,
        HourColumn::MeDayDual,
        HourColumn::MeDayPic,
        HourColumn::MeDayCopilot,
        HourColumn::MeNightDual,
        HourColumn::MeNightPic,
        HourColumn::MeNightCopilot,
        HourColumn::XcDayDual,
        HourColumn::XcDayPic,
        HourColumn::XcDayCopilot,
        HourColumn::XcNightDual,
        HourColumn::XcNightPic,
        HourColumn::XcNightCopilot,
        HourColumn::ActualImc,
        HourColumn::Hood,
        HourColumn::Simulator,
        HourColumn::AsFlightInstructor,
        HourColumn::DualReceived,
    ];

    /// Wire name of the column, matching the serde field name.
    pub fn name(&self) -> &'static str {
        match self {
            HourColumn::SeDayDual => "seDayDual",
            HourColumn::SeDayPic => "seDayPic",
            HourColumn::SeDayCopilot => "seDayCopilot",
            HourColumn::SeNightDual => "seNightDual",
            HourColumn::SeNightPic => "seNightPic",
            HourColumn::SeNightCopilot => "seNightCopilot",
            HourColumn::MeDayDual => "meDayDual",
            HourColumn::MeDayPic => "meDayPic",
            HourColumn::MeDayCopilot => "meDayCopilot",
            HourColumn::MeNightDual => "meNightDual",
            HourColumn::MeNightPic => "meNightPic",
            HourColumn::MeNightCopilot => "meNightCopilot",
            HourColumn::XcDayDual => "xcDayDual",
            HourColumn::XcDayPic => "xcDayPic",
            HourColumn::XcDayCopilot => "xcDayCopilot",
            HourColumn::XcNightDual => "xcNightDual",
            HourColumn::XcNightPic => "xcNightPic",
            HourColumn::XcNightCopilot => "xcNightCopilot",
            HourColumn::ActualImc => "actualImc",
            HourColumn::Hood => "hood",
            HourColumn::Simulator => "simulator",
            HourColumn::AsFlightInstructor => "asFlightInstructor",
            HourColumn::DualReceived => "dualReceived",
        }
    }

    /// Read this column from a bucket record.
    pub fn value(&self, buckets: &TimeBuckets) -> Option<f64> {
        match self {
            HourColumn::SeDayDual => buckets.se_day_dual,
            HourColumn::SeDayPic => buckets.se_day_pic,
            HourColumn::SeDayCopilot => buckets.se_day_copilot,
            HourColumn::SeNightDual => buckets.se_night_dual,
            HourColumn::SeNightPic => buckets.se_night_pic,
            HourColumn::SeNightCopilot => buckets.se_night_copilot,
            HourColumn::MeDayDual => buckets.me_day_dual,
            HourColumn::MeDayPic => buckets.me_day_pic,
            HourColumn::MeDayCopilot => buckets.me_day_copilot,
            HourColumn::MeNightDual => buckets.me_night_dual,
            HourColumn::MeNightPic => buckets.me_night_pic,
            HourColumn::MeNightCopilot => buckets.me_night_copilot,
            HourColumn::XcDayDual => buckets.xc_day_dual,
            HourColumn::XcDayPic => buckets.xc_day_pic,
            HourColumn::XcDayCopilot => buckets.xc_day_copilot,
            HourColumn::XcNightDual => buckets.xc_night_dual,
            HourColumn::XcNightPic => buckets.xc_night_pic,
            HourColumn::XcNightCopilot => buckets.xc_night_copilot,
            HourColumn::ActualImc => buckets.actual_imc,
            HourColumn::Hood => buckets.hood,
            HourColumn::Simulator => buckets.simulator,
            HourColumn::AsFlightInstructor => buckets.as_flight_instructor,
            HourColumn::DualReceived => buckets.dual_received,
        }
    }

    /// Read this column from an accumulated totals record.
    pub fn total(&self, totals: &BucketTotals) -> f64 {
        match self {
            HourColumn::SeDayDual => totals.se_day_dual,
            HourColumn::SeDayPic => totals.se_day_pic,
            HourColumn::SeDayCopilot => totals.se_day_copilot,
            HourColumn::SeNightDual => totals.se_night_dual,
            HourColumn::SeNightPic => totals.se_night_pic,
            HourColumn::SeNightCopilot => totals.se_night_copilot,
            HourColumn::MeDayDual => totals.me_day_dual,
            HourColumn::MeDayPic => totals.me_day_pic,
            HourColumn::MeDayCopilot => totals.me_day_copilot,
            HourColumn::MeNightDual => totals.me_night_dual,
            HourColumn::MeNightPic => totals.me_night_pic,
            HourColumn::MeNightCopilot => totals.me_night_copilot,
            HourColumn::XcDayDual => totals.xc_day_dual,
            HourColumn::XcDayPic => totals.xc_day_pic,
            HourColumn::XcDayCopilot => totals.xc_day_copilot,
            HourColumn::XcNightDual => totals.xc_night_dual,
            HourColumn::XcNightPic => totals.xc_night_pic,
            HourColumn::XcNightCopilot => totals.xc_night_copilot,
            HourColumn::ActualImc => totals.actual_imc,
            HourColumn::Hood => totals.hood,
            HourColumn::Simulator => totals.simulator,
            HourColumn::AsFlightInstructor => totals.as_flight_instructor,
            HourColumn::DualReceived => totals.dual_received,
        }
    }
}

/// Every event-count column of the bucket record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountColumn {
    DayTakeoffsLandings,
    NightTakeoffsLandings,
    IfrApproaches,
    Holding,
}

impl CountColumn {
    pub const ALL: [CountColumn; 4] = [
        CountColumn::DayTakeoffsLandings,
        CountColumn::NightTakeoffsLandings,
        CountColumn::IfrApproaches,
        CountColumn::Holding,
    ];

    /// Wire name of the column, matching the serde field name.
    pub fn name(&self) -> &'static str {
        match self {
            CountColumn::DayTakeoffsLandings => "dayTakeoffsLandings",
            CountColumn::NightTakeoffsLandings => "nightTakeoffsLandings",
            CountColumn::IfrApproaches => "ifrApproaches",
            CountColumn::Holding => "holding",
        }
    }

    /// Read this column from a bucket record.
    pub fn value(&self, buckets: &TimeBuckets) -> Option<i32> {
        match self {
            CountColumn::DayTakeoffsLandings => buckets.day_takeoffs_landings,
            CountColumn::NightTakeoffsLandings => buckets.night_takeoffs_landings,
            CountColumn::IfrApproaches => buckets.ifr_approaches,
            CountColumn::Holding => buckets.holding,
        }
    }

    /// Read this column from an accumulated totals record.
    pub fn total(&self, totals: &BucketTotals) -> i64 {
        match self {
            CountColumn::DayTakeoffsLandings => totals.day_takeoffs_landings,
            CountColumn::NightTakeoffsLandings => totals.night_takeoffs_landings,
            CountColumn::IfrApproaches => totals.ifr_approaches,
            CountColumn::Holding => totals.holding,
        }
    }
}

/// Column-wise accumulator over bucket records.
///
/// Both the aggregation engine and the pagination engine build their sums
/// through this one type, at full precision; [`BucketTotals::rounded`] is the
/// single emission point. `None` bucket fields contribute zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotals {
    pub se_day_dual: f64,
    pub se_day_pic: f64,
    pub se_day_copilot: f64,
    pub se_night_dual: f64,
    pub se_night_pic: f64,
    pub se_night_copilot: f64,
    pub me_day_dual: f64,
    pub me_day_pic: f64,
    pub me_day_copilot: f64,
    pub me_night_dual: f64,
    pub me_night_pic: f64,
    pub me_night_copilot: f64,
    pub xc_day_dual: f64,
    pub xc_day_pic: f64,
    pub xc_day_copilot: f64,
    pub xc_night_dual: f64,
    pub xc_night_pic: f64,
    pub xc_night_copilot: f64,
    pub actual_imc: f64,
    pub hood: f64,
    pub simulator: f64,
    pub as_flight_instructor: f64,
    pub dual_received: f64,
    pub day_takeoffs_landings: i64,
    pub night_takeoffs_landings: i64,
    pub ifr_approaches: i64,
    pub holding: i64,
}

impl BucketTotals {
    /// Accumulate one bucket record into the running totals.
    pub fn add(&mut self, buckets: &TimeBuckets) {
        self.se_day_dual += opt(buckets.se_day_dual);
        self.se_day_pic += opt(buckets.se_day_pic);
        self.se_day_copilot += opt(buckets.se_day_copilot);
        self.se_night_dual += opt(buckets.se_night_dual);
        self.se_night_pic += opt(buckets.se_night_pic);
        self.se_night_copilot += opt(buckets.se_night_copilot);
        self.me_day_dual += opt(buckets.me_day_dual);
        self.me_day_pic += opt(buckets.me_day_pic);
        self.me_day_copilot += opt(buckets.me_day_copilot);
        self.me_night_dual += opt(buckets.me_night_dual);
        self.me_night_pic += opt(buckets.me_night_pic);
        self.me_night_copilot += opt(buckets.me_night_copilot);
        self.xc_day_dual += opt(buckets.xc_day_dual);
        self.xc_day_pic += opt(buckets.xc_day_pic);
        self.xc_day_copilot += opt(buckets.xc_day_copilot);
        self.xc_night_dual += opt(buckets.xc_night_dual);
        self.xc_night_pic += opt(buckets.xc_night_pic);
        self.xc_night_copilot += opt(buckets.xc_night_copilot);
        self.actual_imc += opt(buckets.actual_imc);
        self.hood += opt(buckets.hood);
        self.simulator += opt(buckets.simulator);
        self.as_flight_instructor += opt(buckets.as_flight_instructor);
        self.dual_received += opt(buckets.dual_received);
        self.day_takeoffs_landings += buckets.day_takeoffs_landings.unwrap_or(0) as i64;
        self.night_takeoffs_landings += buckets.night_takeoffs_landings.unwrap_or(0) as i64;
        self.ifr_approaches += buckets.ifr_approaches.unwrap_or(0) as i64;
        self.holding += buckets.holding.unwrap_or(0) as i64;
    }

    /// Emit the totals with every hour column rounded to a tenth. Counts are
    /// exact integers and copied through.
    pub fn rounded(&self) -> BucketTotals {
        BucketTotals {
            se_day_dual: round1(self.se_day_dual),
            se_day_pic: round1(self.se_day_pic),
            se_day_copilot: round1(self.se_day_copilot),
            se_night_dual: round1(self.se_night_dual),
            se_night_pic: round1(self.se_night_pic),
            se_night_copilot: round1(self.se_night_copilot),
            me_day_dual: round1(self.me_day_dual),
            me_day_pic: round1(self.me_day_pic),
            me_day_copilot: round1(self.me_day_copilot),
            me_night_dual: round1(self.me_night_dual),
            me_night_pic: round1(self.me_night_pic),
            me_night_copilot: round1(self.me_night_copilot),
            xc_day_dual: round1(self.xc_day_dual),
            xc_day_pic: round1(self.xc_day_pic),
            xc_day_copilot: round1(self.xc_day_copilot),
            xc_night_dual: round1(self.xc_night_dual),
            xc_night_pic: round1(self.xc_night_pic),
            xc_night_copilot: round1(self.xc_night_copilot),
            actual_imc: round1(self.actual_imc),
            hood: round1(self.hood),
            simulator: round1(self.simulator),
            as_flight_instructor: round1(self.as_flight_instructor),
            dual_received: round1(self.dual_received),
            day_takeoffs_landings: self.day_takeoffs_landings,
            night_takeoffs_landings: self.night_takeoffs_landings,
            ifr_approaches: self.ifr_approaches,
            holding: self.holding,
        }
    }

    /// Single-engine day hours, all roles.
    pub fn se_day(&self) -> f64 {
        self.se_day_dual + self.se_day_pic + self.se_day_copilot
    }

    /// Single-engine night hours, all roles.
    pub fn se_night(&self) -> f64 {
        self.se_night_dual + self.se_night_pic + self.se_night_copilot
    }

    /// Multi-engine day hours, all roles.
    pub fn me_day(&self) -> f64 {
        self.me_day_dual + self.me_day_pic + self.me_day_copilot
    }

    /// Multi-engine night hours, all roles.
    pub fn me_night(&self) -> f64 {
        self.me_night_dual + self.me_night_pic + self.me_night_copilot
    }

    pub fn se_total(&self) -> f64 {
        self.se_day() + self.se_night()
    }

    pub fn me_total(&self) -> f64 {
        self.me_day() + self.me_night()
    }

    /// Aircraft hours (SE + ME); the basis of total flight time.
    pub fn aircraft_total(&self) -> f64 {
        self.se_total() + self.me_total()
    }

    pub fn pic_total(&self) -> f64 {
        self.se_day_pic + self.se_night_pic + self.me_day_pic + self.me_night_pic
    }

    pub fn dual_total(&self) -> f64 {
        self.se_day_dual + self.se_night_dual + self.me_day_dual + self.me_night_dual
    }

    pub fn copilot_total(&self) -> f64 {
        self.se_day_copilot + self.se_night_copilot + self.me_day_copilot + self.me_night_copilot
    }

    pub fn night_total(&self) -> f64 {
        self.se_night() + self.me_night()
    }

    pub fn xc_day_total(&self) -> f64 {
        self.xc_day_dual + self.xc_day_pic + self.xc_day_copilot
    }

    pub fn xc_night_total(&self) -> f64 {
        self.xc_night_dual + self.xc_night_pic + self.xc_night_copilot
    }

    /// Instrument hours: actual IMC plus hood.
    pub fn instrument_total(&self) -> f64 {
        self.actual_imc + self.hood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_nearest_tenth() {
        assert_eq!(round1(1.23), 1.2);
        assert_eq!(round1(1.26), 1.3);
        assert_eq!(round1(1.0), 1.0);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_round1_half_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(1.15), 1.2);
        assert_eq!(round1(-1.15), -1.2);
    }

    #[test]
    fn test_round1_idempotent() {
        for v in [0.0, 0.1, 1.25, 3.7, 102.45, -0.35] {
            let once = round1(v);
            assert_eq!(round1(once), once);
        }
    }

    #[test]
    fn test_none_sums_as_zero() {
        let buckets = TimeBuckets {
            se_day_pic: Some(1.5),
            ..Default::default()
        };
        assert_eq!(buckets.se_total(), 1.5);
        assert_eq!(buckets.me_total(), 0.0);
        assert_eq!(buckets.aircraft_total(), 1.5);
        assert_eq!(buckets.night_total(), 0.0);
    }

    #[test]
    fn test_simulator_only_detection() {
        let sim = TimeBuckets {
            simulator: Some(1.0),
            ..Default::default()
        };
        assert!(sim.is_simulator_only());

        let mixed = TimeBuckets {
            se_day_pic: Some(1.0),
            simulator: Some(1.0),
            ..Default::default()
        };
        assert!(!mixed.is_simulator_only());

        let empty = TimeBuckets::default();
        assert!(!empty.is_simulator_only());
    }

    #[test]
    fn test_role_and_night_sums() {
        let buckets = TimeBuckets {
            se_day_dual: Some(1.0),
            se_night_pic: Some(2.0),
            me_day_pic: Some(3.0),
            me_night_copilot: Some(0.5),
            ..Default::default()
        };
        assert_eq!(buckets.dual_total(), 1.0);
        assert_eq!(buckets.pic_total(), 5.0);
        assert_eq!(buckets.copilot_total(), 0.5);
        assert_eq!(buckets.night_total(), 2.5);
    }

    #[test]
    fn test_hour_columns_cover_every_hour_field() {
        // Writing a distinct value into each field through the struct and
        // reading it back through the enum proves the accessor table is
        // complete and free of duplicate mappings.
        let mut buckets = TimeBuckets::default();
        buckets.se_day_dual = Some(1.0);
        buckets.se_day_pic = Some(2.0);
        buckets.se_day_copilot = Some(3.0);
        buckets.se_night_dual = Some(4.0);
        buckets.se_night_pic = Some(5.0);
        buckets.se_night_copilot = Some(6.0);
        buckets.me_day_dual = Some(7.0);
        buckets.me_day_pic = Some(8.0);
        buckets.me_day_copilot = Some(9.0);
        buckets.me_night_dual = Some(10.0);
        buckets.me_night_pic = Some(11.0);
        buckets.me_night_copilot = Some(12.0);
        buckets.xc_day_dual = Some(13.0);
        buckets.xc_day_pic = Some(14.0);
        buckets.xc_day_copilot = Some(15.0);
        buckets.xc_night_dual = Some(16.0);
        buckets.xc_night_pic = Some(17.0);
        buckets.xc_night_copilot = Some(18.0);
        buckets.actual_imc = Some(19.0);
        buckets.hood = Some(20.0);
        buckets.simulator = Some(21.0);
        buckets.as_flight_instructor = Some(22.0);
        buckets.dual_received = Some(23.0);

        let mut seen: Vec<f64> = HourColumn::ALL
            .iter()
            .map(|c| c.value(&buckets).unwrap())
            .collect();
        seen.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (1..=23).map(|i| i as f64).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_column_names_are_wire_names() {
        assert_eq!(HourColumn::SeDayDual.name(), "seDayDual");
        assert_eq!(HourColumn::ActualImc.name(), "actualImc");
        assert_eq!(HourColumn::AsFlightInstructor.name(), "asFlightInstructor");
        assert_eq!(CountColumn::DayTakeoffsLandings.name(), "dayTakeoffsLandings");
        assert_eq!(CountColumn::IfrApproaches.name(), "ifrApproaches");
    }

    #[test]
    fn test_totals_add_and_round() {
        let a = TimeBuckets {
            se_day_pic: Some(1.25),
            night_takeoffs_landings: Some(2),
            ..Default::default()
        };
        let b = TimeBuckets {
            se_day_pic: Some(1.25),
            night_takeoffs_landings: Some(1),
            ..Default::default()
        };

        let mut totals = BucketTotals::default();
        totals.add(&a);
        totals.add(&b);

        assert_eq!(totals.se_day_pic, 2.5);
        assert_eq!(totals.night_takeoffs_landings, 3);

        let rounded = totals.rounded();
        assert_eq!(rounded.se_day_pic, 2.5);
        assert_eq!(rounded.night_takeoffs_landings, 3);
    }

    #[test]
    fn test_totals_round_once_on_emission() {
        // Three thirds accumulate to 0.30000000000000004 at full precision;
        // emission rounds it to a clean tenth.
        let third = TimeBuckets {
            hood: Some(0.1),
            ..Default::default()
        };
        let mut totals = BucketTotals::default();
        for _ in 0..3 {
            totals.add(&third);
        }
        assert_eq!(totals.rounded().hood, 0.3);
    }

    #[test]
    fn test_totals_subtotal_helpers() {
        let buckets = TimeBuckets {
            se_day_dual: Some(1.0),
            se_night_pic: Some(2.0),
            me_day_pic: Some(4.0),
            xc_day_pic: Some(3.0),
            actual_imc: Some(0.5),
            hood: Some(0.5),
            simulator: Some(9.0),
            ..Default::default()
        };
        let mut totals = BucketTotals::default();
        totals.add(&buckets);

        assert_eq!(totals.se_day(), 1.0);
        assert_eq!(totals.se_night(), 2.0);
        assert_eq!(totals.me_day(), 4.0);
        assert_eq!(totals.se_total(), 3.0);
        assert_eq!(totals.aircraft_total(), 7.0);
        assert_eq!(totals.pic_total(), 6.0);
        assert_eq!(totals.dual_total(), 1.0);
        assert_eq!(totals.night_total(), 2.0);
        assert_eq!(totals.xc_day_total(), 3.0);
        assert_eq!(totals.instrument_total(), 1.0);
        // Simulator hours never leak into aircraft totals
        assert_eq!(totals.simulator, 9.0);
    }

    #[test]
    fn test_buckets_serde_camel_case() {
        let buckets = TimeBuckets {
            se_day_pic: Some(1.5),
            day_takeoffs_landings: Some(4),
            ..Default::default()
        };
        let json = serde_json::to_string(&buckets).unwrap();
        assert!(json.contains("\"seDayPic\":1.5"));
        assert!(json.contains("\"dayTakeoffsLandings\":4"));

        let back: TimeBuckets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, buckets);
    }

    #[test]
    fn test_buckets_deserialize_missing_fields_as_none() {
        let buckets: TimeBuckets = serde_json::from_str(r#"{"seDayPic": 2.0}"#).unwrap();
        assert_eq!(buckets.se_day_pic, Some(2.0));
        assert_eq!(buckets.me_day_pic, None);
        assert_eq!(buckets.holding, None);
    }
}
