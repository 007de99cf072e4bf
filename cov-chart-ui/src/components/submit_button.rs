//! Submit button that commits the staged selection.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SubmitButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            id: "btn-time-series",
            style: "padding: 6px 16px; margin: 8px 0; background: #0d6efd; color: #fff; border: none; border-radius: 4px; cursor: pointer;",
            onclick: move |_| state.submit(),
            "Submit"
        }
    }
}
