//! Selection Controller for the time-series card.
//!
//! Two metric pickers offer every catalog label; whatever one picker holds
//! is shown disabled in the other. Picker changes are only *staged*; the
//! chart follows the *committed* selection, which changes on submit.
//!
//! Disabling is advisory. A duplicate pair can still be submitted and is
//! collapsed to a single series by [`MetricSelection::resolve`].

use crate::shaper::MetricSelection;
use cov_core::config::DashboardConfig;
use cov_core::metric::labels;
use serde::Serialize;

/// One entry of a metric picker's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub label: &'static str,
    pub value: &'static str,
    pub disabled: bool,
}

/// Every catalog label once, in catalog order, with the one equal to
/// `current_other_value` disabled.
///
/// Pass the value currently held by the *other* picker.
pub fn disable_matching(current_other_value: &str) -> Vec<PickerOption> {
    labels()
        .map(|label| PickerOption {
            label,
            value: label,
            disabled: label == current_other_value,
        })
        .collect()
}

/// Location plus the two metric labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub location: String,
    pub primary: String,
    pub secondary: String,
}

impl Selection {
    pub fn metrics(&self) -> MetricSelection {
        MetricSelection::new(self.primary.clone(), self.secondary.clone())
    }
}

impl From<&DashboardConfig> for Selection {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            location: config.default_location.clone(),
            primary: config.default_primary.clone(),
            secondary: config.default_secondary.clone(),
        }
    }
}

/// Holds the staged (picker) and committed (charted) selections.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    staged: Selection,
    committed: Selection,
}

impl SelectionController {
    /// Start with both selections at the configured defaults.
    pub fn new(config: &DashboardConfig) -> Self {
        let initial = Selection::from(config);
        Self {
            staged: initial.clone(),
            committed: initial,
        }
    }

    pub fn stage_location(&mut self, location: impl Into<String>) {
        self.staged.location = location.into();
    }

    pub fn stage_primary(&mut self, label: impl Into<String>) {
        self.staged.primary = label.into();
    }

    pub fn stage_secondary(&mut self, label: impl Into<String>) {
        self.staged.secondary = label.into();
    }

    /// Commit the staged values and return the new committed selection.
    pub fn submit(&mut self) -> &Selection {
        self.committed = self.staged.clone();
        log::info!(
            "[COV] selection: submitted location='{}' metrics=('{}', '{}')",
            self.committed.location,
            self.committed.primary,
            self.committed.secondary
        );
        &self.committed
    }

    pub fn staged(&self) -> &Selection {
        &self.staged
    }

    pub fn committed(&self) -> &Selection {
        &self.committed
    }

    /// Options for the primary picker: the secondary's value is disabled.
    pub fn primary_options(&self) -> Vec<PickerOption> {
        disable_matching(&self.staged.secondary)
    }

    /// Options for the secondary picker: the primary's value is disabled.
    pub fn secondary_options(&self) -> Vec<PickerOption> {
        disable_matching(&self.staged.primary)
    }
}
