//! Reusable Dioxus RSX components for the dashboard.

mod card;
mod chart_container;
mod error_display;
mod loading_spinner;
mod location_selector;
mod metric_selector;
mod page_header;
mod submit_button;

pub use card::Card;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_selector::LocationSelector;
pub use metric_selector::{MetricSelector, MetricSlot};
pub use page_header::PageHeader;
pub use submit_button::SubmitButton;
