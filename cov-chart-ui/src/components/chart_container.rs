//! Chart container component with an empty-state overlay.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the renderer draws into
    pub id: String,
    /// Show a placeholder note over the (empty) chart
    #[props(default = String::new())]
    pub placeholder: String,
    /// Optional minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for D3.js / Plotly charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if !props.placeholder.is_empty() {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "{props.placeholder}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
