//! Dashboard defaults.
//!
//! The initial picker values live in an explicit struct handed to the
//! selection controller at startup instead of in process-wide globals.

use serde::Deserialize;

use crate::metric::column_for_label;
use crate::AGGREGATE_LOCATION;

/// Initial selection for the time-series card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Location preselected in the location picker.
    pub default_location: String,
    /// Metric label preselected in the first metric picker.
    pub default_primary: String,
    /// Metric label preselected in the second metric picker.
    pub default_secondary: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_location: AGGREGATE_LOCATION.to_string(),
            default_primary: "cases".to_string(),
            default_secondary: "deaths".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Check that the default metric labels exist in the catalog.
    ///
    /// An empty secondary is allowed (single-series chart).
    pub fn validate(&self) -> anyhow::Result<()> {
        if column_for_label(&self.default_primary).is_none() {
            anyhow::bail!("unknown default primary metric '{}'", self.default_primary);
        }
        if !self.default_secondary.is_empty() && column_for_label(&self.default_secondary).is_none() {
            anyhow::bail!(
                "unknown default secondary metric '{}'",
                self.default_secondary
            );
        }
        Ok(())
    }
}
