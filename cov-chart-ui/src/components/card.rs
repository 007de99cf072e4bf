//! Padded card wrapping one section of the page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Optional section heading
    #[props(default = String::new())]
    pub title: String,
    pub children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "padding: 2rem 2rem; margin-bottom: 16px; border: 1px solid #dee2e6; border-radius: 6px; background: #fff;",
            if !props.title.is_empty() {
                h2 {
                    style: "margin: 0 0 12px 0; font-size: 20px;",
                    "{props.title}"
                }
            }
            {props.children}
        }
    }
}
