//! Data shaping and chart selection for the COVID-19 dashboard.
//!
//! - `shaper`: location filter, location set, long-format reshape
//! - `chart`: time-series `ChartSpec` construction
//! - `figure`: pre-rendered map figures loaded verbatim
//! - `selection`: picker options and staged/committed selection state

pub mod chart;
pub mod figure;
pub mod selection;
pub mod shaper;

use chart::{build_time_series, ChartSpec};
use cov_core::record::StateSeriesRecord;
use selection::Selection;
use shaper::{filter_location, reshape_long};

/// Filter, reshape and build the time-series chart for a selection.
///
/// This is what runs on every submit.
pub fn time_series_chart(rows: &[StateSeriesRecord], selection: &Selection) -> ChartSpec {
    let filtered = filter_location(rows, &selection.location);
    let metrics = selection.metrics().resolve();
    let long = reshape_long(&filtered, &metrics);
    log::info!(
        "[COV] chart: {} rows for '{}' reshaped to {} points",
        filtered.len(),
        selection.location,
        long.len()
    );
    build_time_series(&long, &selection.location, &metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<StateSeriesRecord> {
        let mut us = StateSeriesRecord::empty("US", "2021-01-01");
        us.case_total = Some(100.0);
        us.out_death = Some(2.0);
        let mut ca = StateSeriesRecord::empty("CA", "2021-01-01");
        ca.case_total = Some(10.0);
        ca.out_death = Some(1.0);
        vec![us, ca]
    }

    fn selection(location: &str, primary: &str, secondary: &str) -> Selection {
        Selection {
            location: location.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }

    #[test]
    fn end_to_end_two_metrics() {
        let spec = time_series_chart(&table(), &selection("US", "cases", "deaths"));
        assert_eq!(spec.traces.len(), 2);
        assert_eq!(spec.traces[0].points[0].value, 100.0);
        assert_eq!(spec.traces[1].points[0].value, 2.0);
    }

    #[test]
    fn end_to_end_absent_location() {
        let spec = time_series_chart(&table(), &selection("ZZ", "cases", "deaths"));
        assert!(spec.traces.is_empty());
        assert_eq!(spec.title, "Disease metrics over time: ZZ");
    }

    #[test]
    fn end_to_end_other_location() {
        let spec = time_series_chart(&table(), &selection("CA", "deaths", ""));
        assert_eq!(spec.traces.len(), 1);
        assert_eq!(spec.traces[0].name, "deaths");
        assert_eq!(spec.traces[0].points[0].value, 1.0);
    }
}
