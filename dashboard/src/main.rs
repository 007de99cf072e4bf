//! COVID-19 Surveillance Data Warehouse
//!
//! One page, three cards: a header, the time-series chart with its location
//! and metric pickers, and the pre-rendered state and county maps.
//!
//! Data flow:
//! 1. `build.rs` copies the three CSV extracts and two map figures into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database. A
//!    failed load is shown as a banner and the page continues with no data.
//! 4. Picker changes are staged; Submit commits them and the time-series
//!    chart is rebuilt from the state series. The maps never change.

use cov_chart_ui::components::{
    Card, ChartContainer, ErrorDisplay, LoadingSpinner, LocationSelector, MetricSelector, MetricSlot,
    PageHeader, SubmitButton,
};
use cov_chart_ui::js_bridge;
use cov_chart_ui::state::AppState;
use cov_core::config::DashboardConfig;
use cov_data::figure::StaticFigure;
use cov_data::shaper::location_set;
use cov_data::time_series_chart;
use cov_db::{load_dataset, DataAvailability};
use dioxus::prelude::*;

const STATE_SERIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/state_series.csv"));
const COUNTY_SERIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/county_series.csv"));
const DEMOGRAPHY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/demography.csv"));
const STATE_MAP_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/state_map.json"));
const COUNTY_MAP_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/county_map.json"));

/// DOM ids the renderers draw into.
const TIME_SERIES_ID: &str = "fig-time-series";
const STATE_MAP_ID: &str = "fig-states-map";
const COUNTY_MAP_ID: &str = "fig-county-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(&DashboardConfig::default()));
    // Container id -> reason its figure could not be drawn
    let mut map_errors: Signal<Vec<(&'static str, String)>> = use_signal(Vec::new);

    // ─── Effect 1: load data and draw the static maps once on mount ───
    use_effect(move || {
        let availability =
            DataAvailability::from_result(load_dataset(STATE_SERIES_CSV, COUNTY_SERIES_CSV, DEMOGRAPHY_CSV));
        if let Some(reason) = availability.error() {
            state.error_msg.set(Some(reason.to_string()));
        }

        let dataset = availability.dataset();
        let locations = location_set(&dataset.state);

        // Fall back to the first location when the default is absent
        let default_location = state.controller.peek().committed().location.clone();
        if !locations.contains(&default_location) {
            if let Some(first) = locations.first() {
                log::info!("[COV] default location '{}' absent, using '{}'", default_location, first);
                state.controller.with_mut(|c| c.stage_location(first.clone()));
                state.submit();
            }
        }

        state.locations.set(locations);
        state.dataset.set(dataset);
        state.loading.set(false);

        js_bridge::init_charts();
        let mut errors = Vec::new();
        for (id, name, raw) in [
            (STATE_MAP_ID, "state_map", STATE_MAP_JSON),
            (COUNTY_MAP_ID, "county_map", COUNTY_MAP_JSON),
        ] {
            match StaticFigure::parse(name, raw) {
                Ok(fig) => {
                    log::info!("[COV] rendering {} ({} traces)", fig.name, fig.trace_count());
                    js_bridge::render_static_figure(id, &fig.to_json());
                }
                Err(e) => {
                    log::error!("[COV] {}", e);
                    errors.push((id, format!("Map unavailable: {}", e)));
                }
            }
        }
        map_errors.set(errors);
    });

    // ─── Effect 2: rebuild the time-series chart on every submit ───
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let selection = (state.submitted)();
        let spec = time_series_chart(&state.dataset.read().state, &selection);

        match spec.to_render_json() {
            Ok((data_json, config_json)) => {
                js_bridge::init_charts();
                js_bridge::render_multi_line_chart(TIME_SERIES_ID, &data_json, &config_json);
            }
            Err(e) => {
                log::error!("[COV] failed to serialize chart: {}", e);
                js_bridge::destroy_chart(TIME_SERIES_ID);
            }
        }
    });

    let map_note = |id: &str| -> String {
        map_errors
            .read()
            .iter()
            .find(|(map_id, _)| *map_id == id)
            .map(|(_, note)| note.clone())
            .unwrap_or_default()
    };
    let state_map_note = map_note(STATE_MAP_ID);
    let county_map_note = map_note(COUNTY_MAP_ID);

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { prefix: "Data unavailable: ".to_string(), message: err }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                Card {
                    title: "Time series plot for disease metrics".to_string(),
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end;",
                        LocationSelector {}
                        MetricSelector { slot: MetricSlot::Primary }
                        MetricSelector { slot: MetricSlot::Secondary }
                        SubmitButton {}
                    }
                    ChartContainer { id: TIME_SERIES_ID.to_string() }
                }

                Card {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px;",
                        div {
                            style: "flex: 1 1 480px;",
                            ChartContainer { id: STATE_MAP_ID.to_string(), placeholder: state_map_note, min_height: 450 }
                        }
                        div {
                            style: "flex: 1 1 480px;",
                            ChartContainer { id: COUNTY_MAP_ID.to_string(), placeholder: county_map_note, min_height: 450 }
                        }
                    }
                }
            }
        }
    }
}
