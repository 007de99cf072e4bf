//! Dropdown selector for choosing a location.

use crate::state::AppState;
use dioxus::prelude::*;

/// Location dropdown selector.
/// Reads the location set from AppState and stages the choice on change;
/// the chart only follows after submit.
#[component]
pub fn LocationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let locations = state.locations.read().clone();
    let selected = state.controller.read().staged().location.clone();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        state.controller.with_mut(|c| c.stage_location(value));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-right: 8px;",
                "State: "
            }
            select {
                id: "state-select",
                onchange: on_change,
                for location in locations.iter() {
                    option {
                        value: "{location}",
                        selected: *location == selected,
                        "{location}"
                    }
                }
            }
        }
    }
}
