//! Page header card.

use dioxus::prelude::*;

/// Dashboard title shown above all cards.
pub const PAGE_TITLE: &str = "COVID-19 Surveillance Data Warehouse";

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        div {
            style: "padding: 2rem 2rem 0 2rem;",
            h1 {
                style: "margin: 0 0 8px 0; font-size: 28px;",
                "{PAGE_TITLE}"
            }
            hr {}
        }
    }
}
