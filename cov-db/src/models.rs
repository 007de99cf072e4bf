//! Query result containers.
//!
//! Row types themselves live in `cov_core::record`; this module holds the
//! aggregates the dashboard passes around after the startup load.

use cov_core::record::{CountySeriesRecord, DemographyRecord, StateSeriesRecord};
use serde::Serialize;

/// Everything loaded at startup: the three flat tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub state: Vec<StateSeriesRecord>,
    pub county: Vec<CountySeriesRecord>,
    pub demography: Vec<DemographyRecord>,
}

impl Dataset {
    /// True when no table has any rows.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty() && self.county.is_empty() && self.demography.is_empty()
    }
}

/// Outcome of the startup data load as seen by the presentation shell.
///
/// `Unavailable` keeps the reason so the page can say why its charts are
/// empty instead of failing later on access.
#[derive(Debug, Clone, PartialEq)]
pub enum DataAvailability {
    Loaded(Dataset),
    Unavailable(String),
}

impl DataAvailability {
    /// Convert a load result, logging the failure.
    pub fn from_result(result: anyhow::Result<Dataset>) -> Self {
        match result {
            Ok(dataset) => DataAvailability::Loaded(dataset),
            Err(e) => {
                log::error!("[COV] data load failed: {:#}", e);
                DataAvailability::Unavailable(format!("{:#}", e))
            }
        }
    }

    /// The loaded dataset, or an empty one when the load failed.
    pub fn dataset(&self) -> Dataset {
        match self {
            DataAvailability::Loaded(dataset) => dataset.clone(),
            DataAvailability::Unavailable(_) => Dataset::default(),
        }
    }

    /// The failure reason, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            DataAvailability::Loaded(_) => None,
            DataAvailability::Unavailable(reason) => Some(reason),
        }
    }
}

/// Earliest and latest observation dates (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_degrades_to_empty_dataset() {
        let availability = DataAvailability::from_result(Err(anyhow::anyhow!("connection refused")));
        assert_eq!(availability.error(), Some("connection refused"));
        assert!(availability.dataset().is_empty());
    }

    #[test]
    fn loaded_exposes_dataset() {
        let mut dataset = Dataset::default();
        dataset
            .state
            .push(StateSeriesRecord::empty("US", "2021-01-01"));
        let availability = DataAvailability::from_result(Ok(dataset.clone()));
        assert!(availability.error().is_none());
        assert_eq!(availability.dataset(), dataset);
    }
}
