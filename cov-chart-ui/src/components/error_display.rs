//! Error banner component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Lead-in shown in bold before the message
    #[props(default = "Error: ".to_string())]
    pub prefix: String,
}

/// Displays an error message in a styled box.
///
/// The dashboard keeps rendering below the banner; it never replaces the page.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{props.prefix}" }
            "{props.message}"
        }
    }
}
