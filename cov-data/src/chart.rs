//! Chart Builder: long-format rows → renderable line chart spec.
//!
//! A `ChartSpec` is plain data (`Serialize`) so the dashboard can hand it to the
//! D3 multi-line renderer and the CLI can write it to disk. Building a spec
//! has no side effects.

use crate::shaper::{LongRow, ResolvedMetric};
use serde::Serialize;

/// Fallback y-axis label for a chart with no traces.
const EMPTY_Y_LABEL: &str = "value";

/// A single (date, value) point on a trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePoint {
    pub date: String,
    pub value: f64,
}

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    /// Legend label (the human-readable metric name).
    pub name: String,
    /// Source column identifier.
    pub column: String,
    /// Points sorted by date.
    pub points: Vec<DatePoint>,
}

/// A time-indexed line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub traces: Vec<Trace>,
}

/// Flattened point for the multi-line renderer: `series` selects the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint<'a> {
    pub series: &'a str,
    pub date: &'a str,
    pub value: f64,
}

/// Renderer options passed alongside the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig<'a> {
    pub title: &'a str,
    pub x_axis_label: &'a str,
    pub y_axis_label: &'a str,
    pub date_format: &'static str,
    pub show_legend: bool,
    /// Legend/colour order; keeps colours stable across re-renders.
    pub series_order: Vec<&'a str>,
}

/// Chart title for a location.
pub fn time_series_title(location: &str) -> String {
    format!("Disease metrics over time: {}", location)
}

/// Build the time-series chart for one location.
///
/// One trace per resolved metric that has data, in resolution order, named
/// by its label. Rows whose metric is not among `metrics` are ignored. Zero
/// rows produce a chart with no traces.
pub fn build_time_series(rows: &[LongRow], location: &str, metrics: &[ResolvedMetric]) -> ChartSpec {
    let traces: Vec<Trace> = metrics
        .iter()
        .filter_map(|metric| {
            let column = metric.column?;
            let mut points: Vec<DatePoint> = rows
                .iter()
                .filter(|r| r.metric == metric.label)
                .map(|r| DatePoint {
                    date: r.date.clone(),
                    value: r.value,
                })
                .collect();
            if points.is_empty() {
                return None;
            }
            points.sort_by(|a, b| a.date.cmp(&b.date));
            Some(Trace {
                name: metric.label.clone(),
                column: column.to_string(),
                points,
            })
        })
        .collect();

    let y_axis_label = if traces.is_empty() {
        EMPTY_Y_LABEL.to_string()
    } else {
        traces
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    };

    ChartSpec {
        title: time_series_title(location),
        x_axis_label: "date".to_string(),
        y_axis_label,
        traces,
    }
}

impl ChartSpec {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.traces.iter().all(|t| t.points.is_empty())
    }

    /// Flatten traces into the point list the multi-line renderer expects.
    pub fn series_points(&self) -> Vec<SeriesPoint<'_>> {
        self.traces
            .iter()
            .flat_map(|t| {
                t.points.iter().map(move |p| SeriesPoint {
                    series: &t.name,
                    date: &p.date,
                    value: p.value,
                })
            })
            .collect()
    }

    /// Renderer options for this spec.
    pub fn config(&self) -> ChartConfig<'_> {
        ChartConfig {
            title: &self.title,
            x_axis_label: &self.x_axis_label,
            y_axis_label: &self.y_axis_label,
            date_format: "YYYY-MM-DD",
            show_legend: true,
            series_order: self.traces.iter().map(|t| t.name.as_str()).collect(),
        }
    }

    /// Serialize `(data, config)` JSON for the JS bridge.
    pub fn to_render_json(&self) -> serde_json::Result<(String, String)> {
        Ok((
            serde_json::to_string(&self.series_points())?,
            serde_json::to_string(&self.config())?,
        ))
    }
}
