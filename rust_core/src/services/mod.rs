//! Engine layer: pure computation over parsed flights.
//!
//! Every engine is a set of free functions over borrowed slices. No clocks,
//! no IO, no shared state; "today" is always an explicit parameter. The same
//! input therefore produces bit-identical output wherever it runs, which is
//! what lets the exported document and the dashboard be compared
//! column-for-column.

pub mod aggregation;
pub mod derivation;
pub mod pagination;
pub mod validation;


pub use aggregation::{aggregate_by_aircraft, aggregate_totals, AircraftSummary, FlightTotals};
pub use derivation::{derive, Derivation, DerivationError, DerivationWarning};
pub use pagination::{
    format_count, format_hours, paginate, sort_for_export, LogbookPage, PaginationError,
};
pub use validation::{validate_batch, validate_flight, BatchReport, Issue, Rule, Severity};
