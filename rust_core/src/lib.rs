//! # Skylog Core
//!
//! Flight-time engine for the Skylog pilot logbook.
//!
//! This crate turns quick-entry input and imported spreadsheet rows into the
//! regulatory time-bucket record (single/multi-engine, day/night,
//! dual/PIC/copilot, cross-country qualifiers, counts, instrument and
//! instructor time), then computes everything the application shows or
//! prints from those records.
//!
//! ## Features
//!
//! - **Derivation**: expand role, engine class, tags, and flight time into a
//!   full bucket record, with per-field overrides
//! - **Aggregation**: dashboard grand totals and per-aircraft summaries
//! - **Validation**: the fixed rule set with error/warning severities and
//!   batch reports
//! - **Pagination**: fixed-size logbook pages with forwarded and to-date
//!   running totals for the printed document
//! - **Import**: the application's camelCase JSON row format
//!
//! ## Architecture
//!
//! The crate is organized into a small set of modules:
//!
//! - [`models`]: the bucket record, column enums, and flight types
//! - [`services`]: the four engines, each a set of pure functions
//! - [`parsing`]: deserialization of imported flight rows
//! - [`config`]: TOML export settings
//!
//! ## Determinism
//!
//! Engines never read clocks ("today" is a parameter), accumulate in input
//! order at full precision, and round to a tenth exactly once on emission.
//! Identical input gives bit-identical output, which is what makes the
//! printed document's final totals line provably equal to the dashboard
//! totals.

pub mod config;
pub mod models;
pub mod parsing;
pub mod services;
