//! Core types for the COVID-19 surveillance dashboard.
//!
//! - `metric`: the fixed, ordered Metric Catalog (label → column)
//! - `record`: row types for the state, county and demography tables
//! - `config`: dashboard defaults passed into the selection controller
//! - `date`: date normalisation shared by loaders

pub mod config;
pub mod date;
pub mod metric;
pub mod record;

/// The aggregate location that always heads the location picker.
pub const AGGREGATE_LOCATION: &str = "US";
