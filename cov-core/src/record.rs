//! Row types for the three surveillance tables.
//!
//! All structs derive `Serialize` so they can be handed to the chart
//! JavaScript as JSON or written back out by the CLI.

use serde::{Deserialize, Serialize};

/// One row of the state-level series table, keyed by (location, date).
///
/// Metric cells are `None` when the source had no usable (non-negative,
/// numeric) value for that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSeriesRecord {
    /// State name or the aggregate location "US".
    pub location: String,
    /// Observation date, `YYYY-MM-DD`.
    pub date: String,
    pub case_total: Option<f64>,
    pub out_death: Option<f64>,
    pub out_severe: Option<f64>,
    pub pop_infect_rate: Option<f64>,
    pub case_severe_rate: Option<f64>,
    pub case_death_rate: Option<f64>,
    pub severe_death_rate: Option<f64>,
}

impl StateSeriesRecord {
    /// A record with every metric cell empty.
    pub fn empty(location: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            date: date.into(),
            case_total: None,
            out_death: None,
            out_severe: None,
            pop_infect_rate: None,
            case_severe_rate: None,
            case_death_rate: None,
            severe_death_rate: None,
        }
    }

    /// Read a metric cell by its column identifier.
    ///
    /// Unknown column identifiers yield `None`, the same as an empty cell.
    pub fn metric_value(&self, column: &str) -> Option<f64> {
        match column {
            "case_total" => self.case_total,
            "out_death" => self.out_death,
            "out_severe" => self.out_severe,
            "pop_infect_rate" => self.pop_infect_rate,
            "case_severe_rate" => self.case_severe_rate,
            "case_death_rate" => self.case_death_rate,
            "severe_death_rate" => self.severe_death_rate,
            _ => None,
        }
    }
}

/// One row of the county-level series table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountySeriesRecord {
    pub state: String,
    pub county: String,
    /// Observation date, `YYYY-MM-DD`.
    pub date: String,
    pub case_total: Option<f64>,
    pub out_death: Option<f64>,
}

/// One row of the demographic breakdown, keyed by (category, group).
///
/// `category` names the dimension (e.g. "age_group", "sex") and `group`
/// the bucket within it (e.g. "18 to 49 years").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographyRecord {
    pub category: String,
    pub group: String,
    pub case_total: Option<f64>,
    pub out_severe: Option<f64>,
    pub out_death: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::METRIC_CATALOG;

    #[test]
    fn metric_value_covers_every_catalog_column() {
        let mut rec = StateSeriesRecord::empty("US", "2021-01-01");
        rec.case_total = Some(1.0);
        rec.out_death = Some(2.0);
        rec.out_severe = Some(3.0);
        rec.pop_infect_rate = Some(4.0);
        rec.case_severe_rate = Some(5.0);
        rec.case_death_rate = Some(6.0);
        rec.severe_death_rate = Some(7.0);

        for (i, m) in METRIC_CATALOG.iter().enumerate() {
            assert_eq!(
                rec.metric_value(m.column),
                Some((i + 1) as f64),
                "Column '{}' should map to its field",
                m.column
            );
        }
    }

    #[test]
    fn metric_value_unknown_column_is_none() {
        let mut rec = StateSeriesRecord::empty("US", "2021-01-01");
        rec.case_total = Some(100.0);
        assert_eq!(rec.metric_value("location"), None);
        assert_eq!(rec.metric_value(""), None);
    }

    #[test]
    fn records_serialize_with_column_names() {
        let mut rec = StateSeriesRecord::empty("CA", "2021-01-01");
        rec.case_total = Some(10.0);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["location"], "CA");
        assert_eq!(json["case_total"], 10.0);
        assert!(json["out_death"].is_null());
    }
}
