//! The Metric Catalog.
//!
//! Maps the human-readable metric label shown in the pickers to the column
//! identifier in the state series table. The catalog is an ordered slice so
//! that picker order is part of the contract, not an accident of a map.

use serde::Serialize;

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Label shown in pickers and chart legends (e.g. "cases").
    pub label: &'static str,
    /// Column identifier in the state series table (e.g. "case_total").
    pub column: &'static str,
}

/// All supported disease metrics, in picker order.
pub static METRIC_CATALOG: &[Metric] = &[
    Metric { label: "cases", column: "case_total" },
    Metric { label: "deaths", column: "out_death" },
    Metric { label: "severe cases", column: "out_severe" },
    Metric { label: "infection rate", column: "pop_infect_rate" },
    Metric { label: "severe case rate", column: "case_severe_rate" },
    Metric { label: "case death rate", column: "case_death_rate" },
    Metric { label: "severe case death rate", column: "severe_death_rate" },
];

/// Look up the column identifier for a metric label.
///
/// Returns `None` for labels that are not in the catalog, including the
/// empty string.
pub fn column_for_label(label: &str) -> Option<&'static str> {
    METRIC_CATALOG
        .iter()
        .find(|m| m.label == label)
        .map(|m| m.column)
}

/// Iterate catalog labels in picker order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    METRIC_CATALOG.iter().map(|m| m.label)
}
