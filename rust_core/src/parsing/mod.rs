//! Deserialization of externally produced flight data.

pub mod json_rows;

#[cfg(test)]
mod json_rows_tests;

pub use json_rows::{parse_flight_rows, parse_flight_rows_str};
