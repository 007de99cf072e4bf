//! Text renderings of the dashboard's derived tables.
//!
//! Each function returns the full output so commands stay thin and the
//! formatting is testable without capturing stdout.

use cov_data::selection::{disable_matching, Selection};
use cov_data::shaper::{filter_demography, filter_location, location_set, reshape_long};
use cov_data::time_series_chart;
use cov_db::Dataset;

fn finish_csv(wtr: csv::Writer<Vec<u8>>) -> anyhow::Result<String> {
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("csv flush failed: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn cell(value: Option<f64>) -> String {
    value.map_or(String::new(), |v| v.to_string())
}

/// The Location Set, one location per line.
pub fn locations(dataset: &Dataset) -> String {
    location_set(&dataset.state)
        .into_iter()
        .map(|l| l + "\n")
        .collect()
}

/// The long-format table for a selection as `date,metric,value` CSV.
pub fn series_csv(dataset: &Dataset, selection: &Selection) -> anyhow::Result<String> {
    let rows = filter_location(&dataset.state, &selection.location);
    let long = reshape_long(&rows, &selection.metrics().resolve());

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["date", "metric", "value"])?;
    for row in &long {
        let value = row.value.to_string();
        wtr.write_record([row.date.as_str(), row.metric.as_str(), value.as_str()])?;
    }
    finish_csv(wtr)
}

/// The time-series chart spec, pretty-printed.
pub fn chart_json(dataset: &Dataset, selection: &Selection) -> anyhow::Result<String> {
    let spec = time_series_chart(&dataset.state, selection);
    if spec.is_empty() {
        log::warn!(
            "[COV] no data for location '{}' with metrics '{}'/'{}'",
            selection.location,
            selection.primary,
            selection.secondary
        );
    }
    Ok(serde_json::to_string_pretty(&spec)?)
}

/// One picker's option list given the other picker's value.
pub fn options_json(other: &str) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&disable_matching(other))?)
}

/// The demography breakdown as CSV, optionally for one category.
pub fn demography_csv(dataset: &Dataset, category: Option<&str>) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["category", "group", "case_total", "out_severe", "out_death"])?;
    for r in filter_demography(&dataset.demography, category) {
        wtr.write_record([
            r.category.clone(),
            r.group.clone(),
            cell(r.case_total),
            cell(r.out_severe),
            cell(r.out_death),
        ])?;
    }
    finish_csv(wtr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        cov_db::load_dataset(
            "state,date,case_total,out_death\n\
             CA,2021-01-01,10,1\n\
             US,2021-01-01,100,2\n\
             CA,2021-01-02,12,\n\
             US,2021-01-02,110,3\n",
            "",
            "category,group,case_total,out_severe,out_death\n\
             age_group,0 to 17 years,40,1,\n\
             sex,Female,60,4,2\n",
        )
        .unwrap()
    }

    fn selection(location: &str, primary: &str, secondary: &str) -> Selection {
        Selection {
            location: location.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }

    #[test]
    fn locations_put_aggregate_first() {
        assert_eq!(locations(&dataset()), "US\nCA\n");
    }

    #[test]
    fn series_csv_is_metric_major_and_skips_empty_cells() {
        let out = series_csv(&dataset(), &selection("CA", "cases", "deaths")).unwrap();
        assert_eq!(
            out,
            "date,metric,value\n\
             2021-01-01,cases,10\n\
             2021-01-02,cases,12\n\
             2021-01-01,deaths,1\n"
        );
    }

    #[test]
    fn series_csv_for_unknown_location_has_only_header() {
        let out = series_csv(&dataset(), &selection("ZZ", "cases", "deaths")).unwrap();
        assert_eq!(out, "date,metric,value\n");
    }

    #[test]
    fn chart_json_carries_title_and_traces() {
        let json = chart_json(&dataset(), &selection("US", "cases", "cases")).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["title"], "Disease metrics over time: US");
        let traces = v["traces"].as_array().unwrap();
        assert_eq!(traces.len(), 1, "duplicate metrics collapse to one trace");
        assert_eq!(traces[0]["name"], "cases");
        assert_eq!(traces[0]["points"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn options_json_disables_other_value() {
        let json = options_json("deaths").unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        let options = v.as_array().unwrap();
        assert_eq!(options.len(), 7);
        let disabled: Vec<&str> = options
            .iter()
            .filter(|o| o["disabled"] == true)
            .map(|o| o["label"].as_str().unwrap())
            .collect();
        assert_eq!(disabled, vec!["deaths"]);
    }

    #[test]
    fn demography_csv_filters_by_category() {
        let out = demography_csv(&dataset(), Some("age_group")).unwrap();
        assert_eq!(
            out,
            "category,group,case_total,out_severe,out_death\n\
             age_group,0 to 17 years,40,1,\n"
        );
        let all = demography_csv(&dataset(), None).unwrap();
        assert_eq!(all.lines().count(), 3);
    }
}
