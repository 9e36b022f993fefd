//! Logbook pagination and running totals.
//!
//! The printed logbook carries three totals rows per page: this page, amount
//! forwarded from previous pages, and totals to date. The recurrence is
//! maintained on one full-precision accumulator that survives across pages;
//! each page's emitted totals are rounded snapshots of it. Because the same
//! accumulator type and the same rounding rule back the aggregation engine,
//! the last page's totals-to-date line matches the dashboard grand totals
//! column for column.
//!
//! Callers hand in flights already sorted by date; [`sort_for_export`] is
//! the canonical way to establish that order. An unsorted input is a
//! programming bug and trips a debug assertion rather than producing a
//! misnumbered document.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::models::{BucketTotals, ParsedFlight};

#[derive(Debug, Error)]
pub enum PaginationError {
    /// Page size comes from configuration, so a zero is reported as an
    /// error instead of a panic.
    #[error("rows per page must be at least 1")]
    InvalidPageSize,
}

/// One export page: its row slice and the three totals lines, rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogbookPage<'a> {
    /// 1-based page number as printed.
    pub page_number: usize,
    pub rows: &'a [ParsedFlight],
    pub page_totals: BucketTotals,
    pub totals_forwarded: BucketTotals,
    pub totals_to_date: BucketTotals,
}

/// Split sorted flights into fixed-size pages with running totals.
///
/// The last page may be partial; an empty logbook yields no pages. Page one
/// forwards zero in every column.
pub fn paginate(
    flights: &[ParsedFlight],
    rows_per_page: usize,
) -> Result<Vec<LogbookPage<'_>>, PaginationError> {
    if rows_per_page == 0 {
        return Err(PaginationError::InvalidPageSize);
    }
    debug_assert!(
        flights.windows(2).all(|w| w[0].date <= w[1].date),
        "flights must be sorted by date before pagination"
    );

    let mut pages = Vec::with_capacity(flights.len().div_ceil(rows_per_page));
    let mut cumulative = BucketTotals::default();

    for (index, chunk) in flights.chunks(rows_per_page).enumerate() {
        let forwarded = cumulative.clone();
        let mut page_totals = BucketTotals::default();
        for flight in chunk {
            page_totals.add(&flight.buckets);
            cumulative.add(&flight.buckets);
        }

        pages.push(LogbookPage {
            page_number: index + 1,
            rows: chunk,
            page_totals: page_totals.rounded(),
            totals_forwarded: forwarded.rounded(),
            totals_to_date: cumulative.rounded(),
        });
    }

    debug!(
        "paginated {} flights into {} pages of {}",
        flights.len(),
        pages.len(),
        rows_per_page
    );
    Ok(pages)
}

/// Sort flights into export order: chronological, ties broken by id so
/// repeated runs print identical documents.
pub fn sort_for_export(flights: &mut [ParsedFlight]) {
    flights.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
}

/// Render an hour cell: one decimal place, blank when zero or not
/// applicable. Presentation only; totals are computed from the raw values.
pub fn format_hours(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => format!("{:.1}", v),
        _ => String::new(),
    }
}

/// Render a count cell: bare integer, blank when zero or not applicable.
pub fn format_count(value: Option<i64>) -> String {
    match value {
        Some(v) if v != 0 => v.to_string(),
        _ => String::new(),
    }
}
