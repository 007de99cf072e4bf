//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cov_core::config::DashboardConfig;
use cov_data::selection::{Selection, SelectionController};
use cov_db::Dataset;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Tables loaded at startup (empty if the load failed)
    pub dataset: Signal<Dataset>,
    /// Whether the startup load is still running
    pub loading: Signal<bool>,
    /// Startup load failure, shown as a banner above the charts
    pub error_msg: Signal<Option<String>>,
    /// Location picker values, "US" first
    pub locations: Signal<Vec<String>>,
    /// Picker state (staged) and last submitted selection
    pub controller: Signal<SelectionController>,
    /// Selection the time-series chart is drawn for; changes only on submit
    pub submitted: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState seeded from the dashboard defaults.
    pub fn new(config: &DashboardConfig) -> Self {
        let controller = SelectionController::new(config);
        let submitted = controller.committed().clone();
        Self {
            dataset: Signal::new(Dataset::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            locations: Signal::new(Vec::new()),
            controller: Signal::new(controller),
            submitted: Signal::new(submitted),
        }
    }

    /// Commit the staged picker values and publish them to the chart.
    pub fn submit(&mut self) {
        let selection = self.controller.with_mut(|c| c.submit().clone());
        self.submitted.set(selection);
    }
}
