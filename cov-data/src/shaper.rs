//! Table shaping: location filtering and wide-to-long reshaping.
//!
//! The state series table is "wide" (one column per metric). Charts want it
//! "long": one row per (date, metric, value) for just the metrics the user
//! picked.

use cov_core::metric::column_for_label;
use cov_core::record::{DemographyRecord, StateSeriesRecord};
use cov_core::AGGREGATE_LOCATION;
use serde::Serialize;
use std::collections::HashSet;

/// Rows whose location equals `location` exactly, in input order.
pub fn filter_location<'a>(rows: &'a [StateSeriesRecord], location: &str) -> Vec<&'a StateSeriesRecord> {
    rows.iter().filter(|r| r.location == location).collect()
}

/// Unique locations in first-seen order, with the aggregate location moved
/// to the front when present.
pub fn location_set(rows: &[StateSeriesRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut locations: Vec<String> = rows
        .iter()
        .filter(|r| seen.insert(r.location.as_str()))
        .map(|r| r.location.clone())
        .collect();

    if let Some(pos) = locations.iter().position(|l| l == AGGREGATE_LOCATION) {
        let aggregate = locations.remove(pos);
        locations.insert(0, aggregate);
    } else if !locations.is_empty() {
        log::warn!(
            "[COV] shaper: aggregate location '{}' not present in series",
            AGGREGATE_LOCATION
        );
    }
    locations
}

/// The pair of metric labels chosen in the two pickers.
///
/// An empty string means the picker is unselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSelection {
    pub primary: String,
    pub secondary: String,
}

/// A selected metric label and the column it resolved to.
///
/// `column` is `None` when the label is not in the catalog; such a metric
/// contributes no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetric {
    pub label: String,
    pub column: Option<&'static str>,
}

impl MetricSelection {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Resolve labels to columns.
    ///
    /// If either picker is empty, or both name the same metric, only the
    /// primary is used. Otherwise both are used, primary first.
    pub fn resolve(&self) -> Vec<ResolvedMetric> {
        let labels: Vec<&str> = if self.primary.is_empty()
            || self.secondary.is_empty()
            || self.primary == self.secondary
        {
            vec![self.primary.as_str()]
        } else {
            vec![self.primary.as_str(), self.secondary.as_str()]
        };

        labels
            .into_iter()
            .map(|label| {
                let column = column_for_label(label);
                if column.is_none() {
                    log::warn!("[COV] shaper: metric label '{}' matches no column", label);
                }
                ResolvedMetric {
                    label: label.to_string(),
                    column,
                }
            })
            .collect()
    }
}

/// One (date, metric, value) row of the long-format table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRow {
    pub date: String,
    /// Human-readable metric label.
    pub metric: String,
    pub value: f64,
}

/// Reshape filtered rows into long format for the resolved metrics.
///
/// Output is metric-major: every row for the first metric (in input order),
/// then the second. Empty cells and unresolved metrics produce no rows.
pub fn reshape_long(rows: &[&StateSeriesRecord], metrics: &[ResolvedMetric]) -> Vec<LongRow> {
    let mut out = Vec::new();
    for metric in metrics {
        let Some(column) = metric.column else {
            continue;
        };
        for row in rows {
            if let Some(value) = row.metric_value(column) {
                out.push(LongRow {
                    date: row.date.clone(),
                    metric: metric.label.clone(),
                    value,
                });
            }
        }
    }
    out
}

/// Demography rows for one category, or all rows when `category` is `None`.
pub fn filter_demography<'a>(rows: &'a [DemographyRecord], category: Option<&str>) -> Vec<&'a DemographyRecord> {
    rows.iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cov_core::metric::METRIC_CATALOG;

    fn rec(location: &str, date: &str, cases: f64, deaths: f64) -> StateSeriesRecord {
        let mut r = StateSeriesRecord::empty(location, date);
        r.case_total = Some(cases);
        r.out_death = Some(deaths);
        r
    }

    fn scenario_table() -> Vec<StateSeriesRecord> {
        vec![
            rec("US", "2021-01-01", 100.0, 2.0),
            rec("CA", "2021-01-01", 10.0, 1.0),
        ]
    }

    fn shape(rows: &[StateSeriesRecord], location: &str, m1: &str, m2: &str) -> Vec<LongRow> {
        let filtered = filter_location(rows, location);
        reshape_long(&filtered, &MetricSelection::new(m1, m2).resolve())
    }

    fn series_count(rows: &[LongRow]) -> usize {
        let mut metrics: Vec<_> = rows.iter().map(|r| r.metric.as_str()).collect();
        metrics.sort();
        metrics.dedup();
        metrics.len()
    }

    #[test]
    fn filter_yields_only_matching_locations() {
        let rows = vec![
            rec("CA", "2021-01-01", 1.0, 0.0),
            rec("US", "2021-01-01", 5.0, 0.0),
            rec("NY", "2021-01-01", 2.0, 0.0),
            rec("CA", "2021-01-02", 3.0, 0.0),
            rec("US", "2021-01-02", 8.0, 0.0),
        ];
        for location in location_set(&rows) {
            let filtered = filter_location(&rows, &location);
            assert!(!filtered.is_empty());
            assert!(
                filtered.iter().all(|r| r.location == location),
                "Filter for '{}' leaked other locations",
                location
            );
        }
        assert_eq!(filter_location(&rows, "CA").len(), 2);
    }

    #[test]
    fn location_set_puts_us_first() {
        let rows = vec![
            rec("CA", "2021-01-01", 1.0, 0.0),
            rec("NY", "2021-01-01", 1.0, 0.0),
            rec("US", "2021-01-01", 1.0, 0.0),
            rec("CA", "2021-01-02", 1.0, 0.0),
            rec("TX", "2021-01-02", 1.0, 0.0),
        ];
        assert_eq!(location_set(&rows), vec!["US", "CA", "NY", "TX"]);
    }

    #[test]
    fn location_set_us_already_first_or_last() {
        let rows = vec![rec("US", "d", 1.0, 0.0), rec("CA", "d", 1.0, 0.0)];
        assert_eq!(location_set(&rows), vec!["US", "CA"]);

        let rows = vec![rec("CA", "d", 1.0, 0.0), rec("US", "d", 1.0, 0.0)];
        assert_eq!(location_set(&rows), vec!["US", "CA"]);
    }

    #[test]
    fn location_set_without_us() {
        let rows = vec![rec("CA", "d", 1.0, 0.0), rec("NY", "d", 1.0, 0.0)];
        assert_eq!(location_set(&rows), vec!["CA", "NY"]);
        assert!(location_set(&[]).is_empty());
    }

    #[test]
    fn resolve_same_or_empty_secondary_is_single_series() {
        for m in METRIC_CATALOG {
            let same = MetricSelection::new(m.label, m.label).resolve();
            assert_eq!(same.len(), 1);
            assert_eq!(same[0].label, m.label);
            assert_eq!(same[0].column, Some(m.column));

            let empty = MetricSelection::new(m.label, "").resolve();
            assert_eq!(empty.len(), 1);
            assert_eq!(empty[0].label, m.label);
        }
    }

    #[test]
    fn resolve_distinct_metrics_is_two_series() {
        for a in METRIC_CATALOG {
            for b in METRIC_CATALOG.iter().filter(|b| b.label != a.label) {
                let resolved = MetricSelection::new(a.label, b.label).resolve();
                assert_eq!(resolved.len(), 2);
                assert_eq!(resolved[0].column, Some(a.column), "Primary comes first");
                assert_eq!(resolved[1].column, Some(b.column));
            }
        }
    }

    #[test]
    fn resolve_empty_primary_keeps_only_primary_slot() {
        let resolved = MetricSelection::new("", "deaths").resolve();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].label, "");
        assert_eq!(resolved[0].column, None);
    }

    #[test]
    fn resolve_unknown_label_has_no_column() {
        let resolved = MetricSelection::new("cases", "vaccinations").resolve();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].column, None);
    }

    #[test]
    fn scenario_us_cases_and_deaths() {
        let rows = shape(&scenario_table(), "US", "cases", "deaths");
        assert_eq!(
            rows,
            vec![
                LongRow { date: "2021-01-01".into(), metric: "cases".into(), value: 100.0 },
                LongRow { date: "2021-01-01".into(), metric: "deaths".into(), value: 2.0 },
            ]
        );
    }

    #[test]
    fn scenario_duplicate_metric_is_one_row() {
        let rows = shape(&scenario_table(), "US", "cases", "cases");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].metric, "cases");
        assert_eq!(rows[0].value, 100.0);
    }

    #[test]
    fn scenario_absent_location_is_empty() {
        assert!(shape(&scenario_table(), "ZZ", "cases", "deaths").is_empty());
    }

    #[test]
    fn series_count_property() {
        let table = vec![
            rec("US", "2021-01-01", 100.0, 2.0),
            rec("US", "2021-01-02", 120.0, 3.0),
        ];
        assert_eq!(series_count(&shape(&table, "US", "cases", "cases")), 1);
        assert_eq!(series_count(&shape(&table, "US", "deaths", "")), 1);
        assert_eq!(series_count(&shape(&table, "US", "cases", "deaths")), 2);
    }

    #[test]
    fn unknown_label_yields_empty_slot() {
        let rows = shape(&scenario_table(), "US", "cases", "vaccinations");
        assert_eq!(rows.len(), 1, "Only the known metric contributes rows");
        assert_eq!(rows[0].metric, "cases");
    }

    #[test]
    fn reshape_skips_empty_cells_and_is_metric_major() {
        let mut r2 = rec("US", "2021-01-02", 120.0, 0.0);
        r2.out_death = None;
        let table = vec![rec("US", "2021-01-01", 100.0, 2.0), r2];
        let rows = shape(&table, "US", "cases", "deaths");
        let got: Vec<(&str, &str)> = rows.iter().map(|r| (r.metric.as_str(), r.date.as_str())).collect();
        assert_eq!(
            got,
            vec![
                ("cases", "2021-01-01"),
                ("cases", "2021-01-02"),
                ("deaths", "2021-01-01"),
            ]
        );
    }

    #[test]
    fn filter_demography_by_category() {
        let rows = vec![
            DemographyRecord {
                category: "sex".into(),
                group: "Female".into(),
                case_total: Some(1.0),
                out_severe: None,
                out_death: None,
            },
            DemographyRecord {
                category: "age_group".into(),
                group: "0 - 17 years".into(),
                case_total: Some(2.0),
                out_severe: None,
                out_death: None,
            },
        ];
        assert_eq!(filter_demography(&rows, Some("sex")).len(), 1);
        assert_eq!(filter_demography(&rows, None).len(), 2);
        assert!(filter_demography(&rows, Some("race")).is_empty());
    }
}
